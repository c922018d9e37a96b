use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_constants(&self) -> TokenStream {
        let names = self.table_names();
        let table_const = &names.table_const;
        let columns_const = &names.columns_const;
        let full_name = self.schema.full_name(self.table);

        let columns = self.table.columns.iter().zip(&names.columns).map(|(column, names)| {
            let const_name = &names.const_name;
            let value = &column.name;
            quote!(pub const #const_name: &str = #value;)
        });

        let selected = self.selected_columns().map(|(_, names)| &names.const_name);

        let constraints = names.constraints.iter().map(|constraint| {
            let const_name = &constraint.const_name;
            let value = &constraint.name;
            quote!(pub const #const_name: &str = #value;)
        });

        quote! {
            pub const #table_const: &str = #full_name;
            #( #columns )*
            pub const #columns_const: &[&str] = &[ #( #selected ),* ];
            #( #constraints )*
        }
    }
}
