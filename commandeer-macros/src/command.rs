//! `#[derive(RegisterCommand)]`

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Ident, LitStr, Path};

/// Arguments of the `#[command(...)]` attribute.
#[derive(Default)]
struct CommandArgs {
    factory: Option<Path>,
}

impl CommandArgs {
    fn from_attrs(input: &DeriveInput) -> syn::Result<Self> {
        let mut args = CommandArgs::default();

        for attr in input.attrs.iter().filter(|a| a.path().is_ident("command")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("factory") {
                    if args.factory.is_some() {
                        return Err(meta.error("duplicate `factory` argument"));
                    }
                    args.factory = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    let name = meta.path.get_ident().map(Ident::to_string).unwrap_or_default();
                    Err(meta.error(format!("unknown attribute: {}", name)))
                }
            })?;
        }

        Ok(args)
    }
}

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "RegisterCommand cannot be derived for generic types",
        ));
    }

    let args = CommandArgs::from_attrs(input)?;
    let name = &input.ident;
    let name_str = LitStr::new(&name.to_string(), name.span());

    let construct = match args.factory {
        Some(factory) => quote! { #factory() },
        None => quote! { <#name as ::core::default::Default>::default() },
    };

    Ok(quote! {
        const _: () = {
            fn __type_info() -> ::commandeer::__private::TypeInfo {
                ::commandeer::__private::TypeInfo::named::<#name>(::core::module_path!(), #name_str)
            }

            fn __factory() -> ::std::boxed::Box<dyn ::commandeer::__private::Command> {
                ::std::boxed::Box::new(#construct)
            }

            ::commandeer::__private::inventory::submit! {
                ::commandeer::__private::CommandRegistration::new(__type_info, __factory)
            }
        };
    })
}
