use super::Expand;

use schemagen_core::{schema::Mode, Result};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_patch(&self) -> Result<TokenStream> {
        let patch = &self.table_names().patch;

        let mut fields = vec![];
        for (column, names) in self.patch_columns() {
            let field = &names.field;
            let ty = self.column_type(column, Mode::Optional)?;
            fields.push(quote!(pub #field: #ty,));
        }

        Ok(quote! {
            #[derive(Debug, Clone, Default)]
            pub struct #patch {
                #( #fields )*
            }
        })
    }
}
