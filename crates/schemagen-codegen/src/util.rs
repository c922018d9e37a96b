use schemagen_core::{Error, Result};

use proc_macro2::TokenStream;

/// Parses `name` as an identifier. Keywords become raw identifiers.
pub(crate) fn ident(name: &str) -> Result<syn::Ident> {
    syn::parse_str::<syn::Ident>(name)
        .or_else(|_| syn::parse_str::<syn::Ident>(&format!("r#{name}")))
        .map_err(|_| Error::invalid_schema(format!("`{name}` is not a valid Rust identifier")))
}

macro_rules! ident {
    ( $($t:tt)* ) => {
        $crate::util::ident(&format!( $($t)* ))
    }
}

pub(crate) fn type_name(name: &str) -> String {
    std_util::str::upper_camel_case(name)
}

pub(crate) fn const_name(name: &str) -> String {
    std_util::str::upper_snake_case(name)
}

/// Parses a Rust type supplied by the schema or a plugin.
pub(crate) fn parse_type(src: &str) -> Result<TokenStream> {
    let ty: syn::Type = syn::parse_str(src)
        .map_err(|err| Error::invalid_source(format!("type `{src}`: {err}")))?;
    Ok(quote::quote!(#ty))
}

/// Parses Rust statements supplied by a plugin.
pub(crate) fn parse_tokens(src: &str) -> Result<TokenStream> {
    src.parse()
        .map_err(|err| Error::invalid_source(format!("`{src}`: {err}")))
}
