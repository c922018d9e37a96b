use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_join(&self) -> TokenStream {
        let names = self.table_names();
        let join = &names.join;
        let criteria = &names.criteria;

        let nested = self.joins.iter().map(|j| {
            let ident = &j.join_ident;
            let other = &j.target.join;
            quote!(pub #ident: Option<Box<#other>>,)
        });

        quote! {
            #[derive(Debug, Clone, Default)]
            pub struct #join {
                pub on: Option<#criteria>,
                pub filter: Option<#criteria>,
                pub fetch: bool,
                pub kind: JoinKind,
                #( #nested )*
            }
        }
    }
}
