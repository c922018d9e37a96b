use crate::{util, Generator};

use schemagen_core::{schema::Type, Error, Result, Schema};

use indexmap::IndexSet;
use proc_macro2::TokenStream;
use quote::quote;

const HEADER: &str = "//! Code generated by schemagen. DO NOT EDIT.\n\n";

impl Generator {
    /// Wraps the per-table blocks into the final source file.
    pub(crate) fn assemble(&self, schema: &Schema, tables: Vec<TokenStream>) -> Result<String> {
        let module = util::ident(self.config.module_name())?;
        let runtime: syn::Path = syn::parse_str(&self.config.runtime).map_err(|err| {
            Error::invalid_source(format!("runtime path `{}`: {err}", self.config.runtime))
        })?;

        let imports = imports(&self.config.imports, schema)
            .into_iter()
            .map(|path| {
                syn::parse_str::<syn::UseTree>(path)
                    .map_err(|err| Error::invalid_source(format!("import `{path}`: {err}")))
            })
            .collect::<Result<Vec<_>>>()?;

        let statics = self
            .plugins
            .iter()
            .filter_map(|plugin| plugin.statics(schema))
            .map(|src| util::parse_tokens(&src))
            .collect::<Result<Vec<_>>>()?;

        let tokens = quote! {
            pub mod #module {
                use #runtime::prelude::*;
                #( use #imports; )*

                #( #tables )*

                #( #statics )*
            }
        };

        let file = syn::parse_file(&tokens.to_string())
            .map_err(|err| Error::invalid_source(err.to_string()))?;

        Ok(format!("{HEADER}{}", prettyplease::unparse(&file)))
    }
}

/// Configured imports followed by those of custom types, first occurrence
/// wins.
fn imports<'a>(configured: &'a [String], schema: &'a Schema) -> IndexSet<&'a str> {
    let mut imports: IndexSet<&str> = configured.iter().map(String::as_str).collect();

    for table in &schema.tables {
        for column in &table.columns {
            if let Type::Custom(custom) = &column.ty {
                imports.extend(custom.imports());
            }
        }
    }

    imports
}
