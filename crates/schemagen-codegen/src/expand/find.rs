use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_find_expr(&self) -> TokenStream {
        let names = self.table_names();
        let find_expr = &names.find_expr;
        let criteria = &names.criteria;
        let joins = self.expand_join_fields();

        quote! {
            #[derive(Debug, Clone, Default)]
            pub struct #find_expr {
                pub filter: Option<#criteria>,
                pub offset: i64,
                pub limit: i64,
                pub columns: Vec<String>,
                pub order_by: Vec<RowOrder>,
                #( #joins )*
            }
        }
    }

    pub(super) fn expand_count_expr(&self) -> TokenStream {
        let names = self.table_names();
        let count_expr = &names.count_expr;
        let criteria = &names.criteria;
        let joins = self.expand_join_fields();

        quote! {
            #[derive(Debug, Clone, Default)]
            pub struct #count_expr {
                pub filter: Option<#criteria>,
                #( #joins )*
            }
        }
    }

    fn expand_join_fields(&self) -> Vec<TokenStream> {
        self.joins
            .iter()
            .map(|join| {
                let ident = &join.join_ident;
                let other = &join.target.join;
                quote!(pub #ident: Option<#other>,)
            })
            .collect()
    }
}
