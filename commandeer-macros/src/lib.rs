use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod command;
mod inject;

/// Derive macro for implementing `Injectable`.
///
/// Fields carrying `#[inject]` become injection points resolved by their
/// declared type; `#[inject("id")]` or `#[inject(id = "id")]` resolves by
/// identifier. A single field may be marked `#[inject(base)]` to inherit the
/// injection points of an embedded `Injectable`.
#[proc_macro_derive(Injectable, attributes(inject))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    inject::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro submitting a command type for link-time discovery.
///
/// The command is constructed with `Default::default()` unless
/// `#[command(factory = path::to::fn)]` names a constructor.
#[proc_macro_derive(RegisterCommand, attributes(command))]
pub fn derive_register_command(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    command::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
