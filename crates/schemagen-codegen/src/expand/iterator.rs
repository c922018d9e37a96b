use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_iterator(&self) -> TokenStream {
        let names = self.table_names();
        let iterator = &names.iterator;
        let entity = &names.entity;
        let find_expr = &names.find_expr;
        let next = &names.next;

        let joins: Vec<_> = self.fetchable_joins().collect();
        let join_idents: Vec<_> = joins.iter().map(|join| &join.join_ident).collect();
        let fields: Vec<_> = joins.iter().map(|join| &join.ident).collect();
        let entities: Vec<_> = joins.iter().map(|join| &join.target.entity).collect();
        let columns: Vec<_> = joins.iter().map(|join| &join.target.columns_const).collect();

        // Without fetched joins the expression is only kept for callers.
        let expr_attr = if joins.is_empty() {
            quote!(#[allow(dead_code)])
        } else {
            quote!()
        };

        let scan = if joins.is_empty() {
            quote! {
                let cols = self.columns()?.to_vec();
                let mut ent = #entity::default();
                self.rows.scan(&mut ent.props(&cols)?)?;
            }
        } else {
            quote! {
                #(
                    let mut #join_idents = match &self.expr.#join_idents {
                        Some(join) if join.fetch => Some(vec![Value::Null; #columns.len()]),
                        _ => None,
                    };
                )*

                let cols = self.columns()?.to_vec();
                let mut joined = 0;
                #(
                    if let Some(values) = &#join_idents {
                        joined += values.len();
                    }
                )*

                let own = cols.len().checked_sub(joined).ok_or(Error::ColumnCount {
                    expected: joined,
                    found: cols.len(),
                })?;

                let mut ent = #entity::default();
                {
                    let mut props = ent.props(&cols[..own])?;
                    #(
                        if let Some(values) = &mut #join_idents {
                            props.extend(values.iter_mut().map(|value| value as &mut dyn ScanTarget));
                        }
                    )*
                    self.rows.scan(&mut props)?;
                }

                #(
                    if let Some(values) = #join_idents {
                        ent.#fields = scan_joined::<#entities, _>(#columns, values)?.map(Box::new);
                    }
                )*
            }
        };

        quote! {
            /// Reads entities from a result set. Not safe for concurrent use.
            pub struct #iterator {
                rows: Box<dyn Rows>,
                cols: Option<Vec<String>>,
                #expr_attr
                expr: #find_expr,
            }

            impl #iterator {
                pub fn new(rows: Box<dyn Rows>, expr: #find_expr) -> Self {
                    Self {
                        rows,
                        cols: None,
                        expr,
                    }
                }

                pub fn advance(&mut self) -> bool {
                    self.rows.advance()
                }

                pub fn close(&mut self) -> Result<(), Error> {
                    self.rows.close()
                }

                pub fn err(&mut self) -> Option<Error> {
                    self.rows.err()
                }

                /// Column names of the result set, read once.
                pub fn columns(&mut self) -> Result<&[String], Error> {
                    let cols = match self.cols.take() {
                        Some(cols) => cols,
                        None => self.rows.columns()?,
                    };

                    Ok(self.cols.insert(cols).as_slice())
                }

                /// The entity in the current row, with fetched joins.
                pub fn #next(&mut self) -> Result<#entity, Error> {
                    #scan

                    Ok(ent)
                }
            }
        }
    }
}
