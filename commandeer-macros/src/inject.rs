//! `#[derive(Injectable)]`

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, Ident, LitStr, ext::IdentExt, spanned::Spanned};

/// What an `#[inject]` attribute asks for.
enum Marker {
    /// `#[inject]`
    ByType,
    /// `#[inject("id")]` or `#[inject(id = "id")]`
    ById(LitStr),
    /// `#[inject(base)]`
    Base,
}

impl Marker {
    /// The marker on `field`, if any. More than one `#[inject]` is an error.
    fn from_field(field: &Field) -> syn::Result<Option<Self>> {
        let mut found = None;

        for attr in field.attrs.iter().filter(|a| a.path().is_ident("inject")) {
            if found.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "at most one #[inject] attribute is allowed per member",
                ));
            }

            let marker = match &attr.meta {
                syn::Meta::Path(_) => Marker::ByType,
                syn::Meta::List(list) => {
                    if let Ok(lit) = list.parse_args::<LitStr>() {
                        Marker::ById(lit)
                    } else {
                        let mut parsed = None;
                        list.parse_nested_meta(|meta| {
                            if meta.path.is_ident("base") {
                                parsed = Some(Marker::Base);
                                Ok(())
                            } else if meta.path.is_ident("id") {
                                parsed = Some(Marker::ById(meta.value()?.parse()?));
                                Ok(())
                            } else {
                                Err(meta.error(
                                    "expected `base`, `id = \"...\"` or a string literal",
                                ))
                            }
                        })?;
                        parsed.ok_or_else(|| {
                            syn::Error::new_spanned(list, "empty #[inject(...)] attribute")
                        })?
                    }
                }
                syn::Meta::NameValue(nv) => {
                    return Err(syn::Error::new_spanned(
                        nv,
                        "use #[inject(\"id\")] instead of #[inject = ...]",
                    ));
                }
            };
            found = Some(marker);
        }

        Ok(found)
    }
}

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    if let Some(attr) = input.attrs.iter().find(|a| a.path().is_ident("inject")) {
        return Err(syn::Error::new_spanned(attr, "#[inject] can only be placed on fields"));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "Injectable can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Injectable can only be derived for structs; markers attach to fields",
            ));
        }
    };

    let mut points = Vec::new();
    let mut arms = Vec::new();
    let mut base: Option<(&Ident, &syn::Type)> = None;

    for field in fields {
        let Some(marker) = Marker::from_field(field)? else {
            continue;
        };
        // Named fields always carry an ident.
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let ty = &field.ty;
        let member = LitStr::new(&ident.unraw().to_string(), ident.span());

        let marker_tokens = match marker {
            Marker::Base => {
                if base.is_some() {
                    return Err(syn::Error::new_spanned(
                        ident,
                        "only one field can be marked #[inject(base)]",
                    ));
                }
                base = Some((ident, ty));
                continue;
            }
            Marker::ByType => quote! { ::commandeer::Inject::new() },
            Marker::ById(id) => quote! { ::commandeer::Inject::with_identifier(#id) },
        };

        points.push(quote! {
            ::commandeer::InjectionPoint::field(
                #member,
                ::commandeer::TypeInfo::of::<#ty>(),
                #marker_tokens,
            )
        });
        arms.push(quote! {
            #member => {
                self.#ident = ::commandeer::downcast_member::<#ty>(member, value)?;
                ::core::result::Result::Ok(())
            }
        });
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let collect_points = match base {
        Some((_, base_ty)) => quote! {
            ::commandeer::inherit_points(
                own,
                <#base_ty as ::commandeer::Injectable>::injection_points(),
            )
        },
        None => quote! { own },
    };

    let fallback = match base {
        Some((base_ident, base_ty)) => quote! {
            _ => <#base_ty as ::commandeer::Injectable>::assign(
                &mut self.#base_ident,
                member,
                value,
            )
        },
        None => quote! {
            _ => {
                let _ = value;
                ::core::result::Result::Err(::commandeer::InjectError::UnknownMember {
                    target: ::commandeer::TypeInfo::of::<Self>(),
                    member: ::std::string::ToString::to_string(member),
                })
            }
        },
    };

    Ok(quote! {
        impl #impl_generics ::commandeer::Injectable for #name #ty_generics #where_clause {
            fn injection_points() -> ::std::vec::Vec<::commandeer::InjectionPoint> {
                let own: ::std::vec::Vec<::commandeer::InjectionPoint> = ::std::vec![#(#points),*];
                #collect_points
            }

            fn assign(
                &mut self,
                member: &str,
                value: ::std::boxed::Box<dyn ::core::any::Any + ::core::marker::Send>,
            ) -> ::core::result::Result<(), ::commandeer::InjectError> {
                match member {
                    #(#arms)*
                    #fallback
                }
            }
        }
    })
}
