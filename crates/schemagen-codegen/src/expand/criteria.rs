use super::Expand;
use crate::util;

use schemagen_core::{schema::Mode, Result};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_criteria(&self) -> Result<TokenStream> {
        let names = self.table_names();
        let filter = &names.filter;
        let criteria = &names.criteria;

        let mut fields = vec![];
        let mut conditions = vec![];

        for (column, names) in self.entity_columns() {
            let Some(ty) = self.generator.column_type(column, Mode::Criteria)? else {
                continue;
            };

            let field = &names.field;
            let const_name = &names.const_name;
            fields.push(quote!(pub #field: #ty,));

            let plugin = self
                .generator
                .plugins
                .iter()
                .find_map(|plugin| plugin.where_clause(column));

            conditions.push(match plugin {
                Some(src) => util::parse_tokens(&src)?,
                None => quote! {
                    if let Some(filter) = &self.#field {
                        clause.filter(alias, #const_name, filter);
                    }
                },
            });
        }

        let clause = if conditions.is_empty() {
            quote!(let clause = comp.clause("", " AND ");)
        } else {
            quote!(let mut clause = comp.clause("", " AND ");)
        };

        Ok(quote! {
            #[derive(Debug, Clone, Default)]
            pub struct #filter {
                #( #fields )*
            }

            impl FilterSet for #filter {
                fn write_sql(&self, comp: &mut Composer, alias: &str) -> Result<bool, Error> {
                    #clause
                    #( #conditions )*
                    Ok(clause.finish())
                }
            }

            pub type #criteria = Criteria<#filter>;
        })
    }
}
