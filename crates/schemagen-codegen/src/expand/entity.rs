use super::Expand;
use crate::util;

use schemagen_core::{resolve::EntityField, Result};

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

impl Expand<'_> {
    pub(super) fn expand_entity(&self) -> Result<TokenStream> {
        let names = self.table_names();
        let entity = &names.entity;

        let mut fields = vec![];
        for field in &self.fields {
            match field {
                EntityField::Column { index, read_only, .. } => {
                    let column = &self.table.columns[*index];
                    let ident = &names.columns[*index].field;
                    let ty = self.column_type(column, column.mode())?;
                    let doc = if *read_only {
                        quote!(#[doc = " Read only."])
                    } else {
                        quote!()
                    };

                    fields.push(quote! {
                        #doc
                        pub #ident: #ty,
                    });
                }
                EntityField::Relationship(field) => {
                    let ident = util::ident(&field.name)?;
                    let other = &self.names.tables[field.target.0].entity;
                    let ty = if field.is_single() {
                        quote!(Option<Box<#other>>)
                    } else {
                        quote!(Vec<#other>)
                    };

                    fields.push(quote!(pub #ident: #ty,));
                }
            }
        }

        let props = self.expand_props();

        Ok(quote! {
            #[derive(Debug, Clone, Default)]
            pub struct #entity {
                #( #fields )*
            }

            impl Entity for #entity {
                #props
            }
        })
    }

    /// `props` hands out each column field at most once.
    fn expand_props(&self) -> TokenStream {
        let fields: Vec<_> = self.entity_columns().map(|(_, names)| &names.field).collect();
        let locals: Vec<_> = fields.iter().map(|field| format_ident!("prop_{}", field)).collect();

        let arms = self.entity_columns().zip(&locals).map(|((_, names), local)| {
            let const_name = &names.const_name;

            quote! {
                #const_name => match #local.take() {
                    Some(prop) => props.push(prop),
                    None => return Err(Error::DuplicateColumn(col.to_string())),
                },
            }
        });

        quote! {
            fn props<S: AsRef<str>>(&mut self, cols: &[S]) -> Result<Vec<&mut dyn ScanTarget>, Error> {
                let Self { #( #fields: #locals, )* .. } = self;
                #( let mut #locals = Some(#locals); )*
                let mut props: Vec<&mut dyn ScanTarget> = Vec::with_capacity(cols.len());

                for col in cols {
                    let col = col.as_ref();

                    match col {
                        #( #arms )*
                        _ => return Err(Error::UnknownColumn(col.to_string())),
                    }
                }

                Ok(props)
            }
        }
    }
}
