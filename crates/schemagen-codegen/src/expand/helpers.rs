use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_scan_rows(&self) -> TokenStream {
        let names = self.table_names();
        let scan_rows = &names.scan_rows;
        let entity = &names.entity;
        let columns_const = &names.columns_const;

        quote! {
            pub fn #scan_rows(rows: Box<dyn Rows>) -> Result<Vec<#entity>, Error> {
                scan_all(rows, #columns_const)
            }
        }
    }
}
