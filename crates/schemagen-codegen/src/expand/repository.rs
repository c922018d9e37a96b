use super::{Expand, Key};
use crate::util;

use schemagen_core::{
    schema::{Event, Mode},
    Components, Result,
};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_repository(&self) -> Result<TokenStream> {
        let components = self.generator.config.components;
        let names = self.table_names();
        let repository = &names.repository;
        let table_const = &names.table_const;
        let columns_const = &names.columns_const;
        let keys = self.keys()?;

        let mut methods = vec![];

        if components.intersects(Components::INSERT | Components::UPSERT) {
            methods.push(self.expand_write_insert());
        }

        if components.contains(Components::INSERT) {
            methods.push(self.expand_insert());
        }

        if components.contains(Components::FIND) {
            methods.push(self.expand_find());

            for key in &keys {
                methods.push(self.expand_find_one_by(key)?);
            }
        }

        if components.intersects(Components::UPDATE | Components::UPSERT) {
            methods.push(self.expand_write_patch()?);
        }

        if components.contains(Components::UPDATE) {
            for key in &keys {
                methods.push(self.expand_update_one_by(key)?);
            }
        }

        if components.contains(Components::UPSERT) {
            methods.push(self.expand_upsert());
        }

        if components.contains(Components::COUNT) {
            methods.push(self.expand_count());
        }

        if components.contains(Components::DELETE) {
            if let Some(key) = keys.iter().find(|key| key.primary_key) {
                methods.push(self.expand_delete_one_by(key)?);
            }
        }

        Ok(quote! {
            pub struct #repository<E: Executor> {
                pub table: String,
                pub columns: Vec<String>,
                pub db: E,
            }

            impl<E: Executor> #repository<E> {
                pub fn new(db: E) -> Self {
                    Self {
                        table: #table_const.to_string(),
                        columns: #columns_const.iter().map(|column| column.to_string()).collect(),
                        db,
                    }
                }

                #( #methods )*
            }
        })
    }

    fn expand_write_insert(&self) -> TokenStream {
        let entity = &self.table_names().entity;

        let columns: Vec<_> = self
            .writable_columns()
            .map(|(column, names)| {
                let field = &names.field;
                let const_name = &names.const_name;
                match column.mode() {
                    Mode::Mandatory if !column.ty.is_serial() => quote! {
                        columns.push(#const_name);
                        values.push(Value::from(ent.#field.clone()));
                    },
                    Mode::Mandatory => quote! {
                        let value = Value::from(ent.#field.clone());
                        if !value.is_zero() {
                            columns.push(#const_name);
                            values.push(value);
                        }
                    },
                    _ => quote! {
                        let value = Value::from(ent.#field.clone());
                        if !value.is_null() {
                            columns.push(#const_name);
                            values.push(value);
                        }
                    },
                }
            })
            .collect();

        let (lists, unused) = if columns.is_empty() {
            (
                quote! {
                    let columns: Vec<&str> = vec![];
                    let values: Vec<Value> = vec![];
                },
                quote!(let _ = ent;),
            )
        } else {
            (
                quote! {
                    let mut columns: Vec<&str> = vec![];
                    let mut values: Vec<Value> = vec![];
                },
                quote!(),
            )
        };

        quote! {
            fn write_insert(&self, comp: &mut Composer, ent: &#entity) {
                #unused
                #lists
                #( #columns )*

                comp.write_str("INSERT INTO ");
                comp.write_str(&self.table);

                if columns.is_empty() {
                    comp.write_str(" DEFAULT VALUES");
                } else {
                    comp.write_str(" (");
                    comp.write_str(&columns.join(", "));
                    comp.write_str(") VALUES (");
                    for (i, value) in values.into_iter().enumerate() {
                        if i > 0 {
                            comp.write_str(", ");
                        }
                        comp.bind(value);
                    }
                    comp.write_str(")");
                }
            }
        }
    }

    fn expand_insert(&self) -> TokenStream {
        let entity = &self.table_names().entity;

        quote! {
            pub fn insert_query(&self, ent: &#entity) -> Result<(String, Vec<Value>), Error> {
                let mut comp = Composer::new();
                self.write_insert(&mut comp, ent);
                comp.write_str(" RETURNING ");
                comp.write_columns("", &self.columns);
                Ok(comp.into_parts())
            }

            pub fn insert(&self, ent: &#entity) -> Result<#entity, Error> {
                let (sql, args) = self.insert_query(ent)?;
                trace_query("insert", &sql, &args);
                let rows = self.db.query(&sql, &args)?;
                scan_one(rows, &self.columns)
            }
        }
    }

    /// `FROM`, joins and `WHERE` of find and count queries. Expects `expr`
    /// and `comp` in scope.
    fn expand_from_where(&self) -> TokenStream {
        let joins = self.joins.iter().map(|join| {
            let join_ident = &join.join_ident;
            let alias = &join.alias;
            let table_const = &join.target.table_const;
            let on = join.on.iter().map(|(local, remote)| quote!((#local, #remote)));

            quote! {
                if let Some(join) = &expr.#join_ident {
                    comp.write_join(join.kind, #table_const, #alias, "t0", &[ #( #on ),* ], join.on.as_ref())?;
                }
            }
        });

        let filters = self.joins.iter().map(|join| {
            let join_ident = &join.join_ident;
            let alias = &join.alias;

            quote! {
                if let Some(join) = &expr.#join_ident {
                    clause.criteria(join.filter.as_ref(), #alias)?;
                }
            }
        });

        quote! {
            comp.write_str(" FROM ");
            comp.write_str(&self.table);
            comp.write_str(" AS t0");
            #( #joins )*

            let mut clause = comp.clause(" WHERE ", " AND ");
            clause.criteria(expr.filter.as_ref(), "t0")?;
            #( #filters )*
            clause.finish();
        }
    }

    fn expand_find(&self) -> TokenStream {
        let names = self.table_names();
        let entity = &names.entity;
        let find_expr = &names.find_expr;
        let iterator = &names.iterator;
        let next = &names.next;

        let fetched = self.fetchable_joins().map(|join| {
            let join_ident = &join.join_ident;
            let alias = &join.alias;
            let columns_const = &join.target.columns_const;

            quote! {
                if let Some(join) = &expr.#join_ident {
                    if join.fetch {
                        comp.write_str(", ");
                        comp.write_columns(#alias, #columns_const);
                    }
                }
            }
        });

        let from_where = self.expand_from_where();

        quote! {
            pub fn find_query(&self, expr: &#find_expr) -> Result<(String, Vec<Value>), Error> {
                let mut comp = Composer::new();
                comp.write_str("SELECT ");
                if expr.columns.is_empty() {
                    comp.write_columns("t0", &self.columns);
                } else {
                    comp.write_columns("t0", &expr.columns);
                }
                #( #fetched )*

                #from_where

                comp.write_order_by("t0", &expr.order_by);
                comp.write_limit_offset(expr.limit, expr.offset);
                Ok(comp.into_parts())
            }

            pub fn find_iter(&self, expr: &#find_expr) -> Result<#iterator, Error> {
                let (sql, args) = self.find_query(expr)?;
                trace_query("find", &sql, &args);
                let rows = self.db.query(&sql, &args)?;
                Ok(#iterator::new(rows, expr.clone()))
            }

            pub fn find(&self, expr: &#find_expr) -> Result<Vec<#entity>, Error> {
                let mut iter = self.find_iter(expr)?;
                let mut ents = vec![];

                while iter.advance() {
                    ents.push(iter.#next()?);
                }

                if let Some(err) = iter.err() {
                    return Err(err);
                }

                iter.close()?;
                Ok(ents)
            }
        }
    }

    /// Parameters of a key lookup and the statement binding them to `key`.
    fn expand_key(&self, key: &Key<'_>) -> Result<(Vec<TokenStream>, TokenStream)> {
        let mut params = vec![];
        let mut fields = vec![];
        let mut consts = vec![];

        for (column, names) in &key.columns {
            let field = &names.field;
            let ty = self.column_type(column, Mode::Mandatory)?;
            params.push(quote!(#field: #ty));
            fields.push(field);
            consts.push(&names.const_name);
        }

        let bind = quote! {
            let key = vec![ #( Value::from(#fields) ),* ];
            let key_columns = [ #( #consts ),* ];
        };

        Ok((params, bind))
    }

    fn expand_find_one_by(&self, key: &Key<'_>) -> Result<TokenStream> {
        let entity = &self.table_names().entity;
        let method = ident!("find_one_by_{}", key.suffix)?;
        let op = method.to_string();
        let (params, bind) = self.expand_key(key)?;

        Ok(quote! {
            pub fn #method(&self, #( #params ),*) -> Result<#entity, Error> {
                #bind

                let mut comp = Composer::new();
                comp.write_str("SELECT ");
                comp.write_columns("", &self.columns);
                comp.write_str(" FROM ");
                comp.write_str(&self.table);

                let mut clause = comp.clause(" WHERE ", " AND ");
                for (column, value) in key_columns.into_iter().zip(key) {
                    clause.assign(column, value);
                }
                clause.finish();

                let (sql, args) = comp.into_parts();
                trace_query(#op, &sql, &args);
                let rows = self.db.query(&sql, &args)?;
                scan_one(rows, &self.columns)
            }
        })
    }

    fn expand_write_patch(&self) -> Result<TokenStream> {
        let patch = &self.table_names().patch;

        let mut statements = vec![];
        for (column, names) in self.patch_columns() {
            let field = &names.field;
            let const_name = &names.const_name;

            let plugin = self
                .generator
                .plugins
                .iter()
                .find_map(|plugin| plugin.set_clause(column));

            if let Some(src) = plugin {
                statements.push(util::parse_tokens(&src)?);
                continue;
            }

            let fallback = column.default_for(Event::Update).map(|expr| {
                quote! {
                    else {
                        set.assign_raw(#const_name, #expr);
                    }
                }
            });

            statements.push(quote! {
                let value = Value::from(patch.#field.clone());
                if !value.is_null() {
                    set.assign(#const_name, value);
                }
                #fallback
            });
        }

        let unused = if statements.is_empty() {
            quote!(let _ = patch;)
        } else {
            quote!()
        };

        Ok(quote! {
            fn write_patch(set: &mut Clause<'_>, patch: &#patch) -> Result<(), Error> {
                #unused
                #( #statements )*

                if set.is_empty() {
                    return Err(Error::EmptyPatch);
                }

                Ok(())
            }
        })
    }

    fn expand_update_one_by(&self, key: &Key<'_>) -> Result<TokenStream> {
        let names = self.table_names();
        let entity = &names.entity;
        let patch = &names.patch;
        let method = ident!("update_one_by_{}", key.suffix)?;
        let query = ident!("update_one_by_{}_query", key.suffix)?;
        let op = method.to_string();
        let (params, bind) = self.expand_key(key)?;
        let args: Vec<_> = key.columns.iter().map(|(_, names)| &names.field).collect();

        Ok(quote! {
            pub fn #query(&self, #( #params, )* patch: &#patch) -> Result<(String, Vec<Value>), Error> {
                #bind

                let mut comp = Composer::new();
                comp.write_str("UPDATE ");
                comp.write_str(&self.table);

                let mut set = comp.clause(" SET ", ", ");
                Self::write_patch(&mut set, patch)?;
                set.finish();

                let mut clause = comp.clause(" WHERE ", " AND ");
                for (column, value) in key_columns.into_iter().zip(key) {
                    clause.assign(column, value);
                }
                clause.finish();

                comp.write_str(" RETURNING ");
                comp.write_columns("", &self.columns);
                Ok(comp.into_parts())
            }

            pub fn #method(&self, #( #params, )* patch: &#patch) -> Result<#entity, Error> {
                let (sql, args) = self.#query(#( #args, )* patch)?;
                trace_query(#op, &sql, &args);
                let rows = self.db.query(&sql, &args)?;
                scan_one(rows, &self.columns)
            }
        })
    }

    fn expand_upsert(&self) -> TokenStream {
        let names = self.table_names();
        let entity = &names.entity;
        let patch = &names.patch;

        quote! {
            /// Inserts `ent`, applying `patch` to the row conflicting on
            /// `conflict` instead. An empty patch leaves the row untouched.
            pub fn upsert_query(
                &self,
                ent: &#entity,
                patch: &#patch,
                conflict: &[&str],
            ) -> Result<(String, Vec<Value>), Error> {
                let mut comp = Composer::new();
                self.write_insert(&mut comp, ent);

                comp.write_str(" ON CONFLICT");
                if !conflict.is_empty() {
                    comp.write_str(" (");
                    comp.write_str(&conflict.join(", "));
                    comp.write_str(")");
                }

                let checkpoint = comp.checkpoint();
                comp.write_str(" DO UPDATE");
                let mut set = comp.clause(" SET ", ", ");
                match Self::write_patch(&mut set, patch) {
                    Ok(()) => {
                        set.finish();
                    }
                    Err(Error::EmptyPatch) => {
                        comp.rollback(checkpoint);
                        comp.write_str(" DO NOTHING");
                    }
                    Err(err) => return Err(err),
                }

                comp.write_str(" RETURNING ");
                comp.write_columns("", &self.columns);
                Ok(comp.into_parts())
            }

            pub fn upsert(
                &self,
                ent: &#entity,
                patch: &#patch,
                conflict: &[&str],
            ) -> Result<#entity, Error> {
                let (sql, args) = self.upsert_query(ent, patch, conflict)?;
                trace_query("upsert", &sql, &args);
                let rows = self.db.query(&sql, &args)?;
                scan_one(rows, &self.columns)
            }
        }
    }

    fn expand_count(&self) -> TokenStream {
        let count_expr = &self.table_names().count_expr;
        let from_where = self.expand_from_where();

        quote! {
            pub fn count_query(&self, expr: &#count_expr) -> Result<(String, Vec<Value>), Error> {
                let mut comp = Composer::new();
                comp.write_str("SELECT COUNT(*)");
                #from_where
                Ok(comp.into_parts())
            }

            pub fn count(&self, expr: &#count_expr) -> Result<i64, Error> {
                let (sql, args) = self.count_query(expr)?;
                trace_query("count", &sql, &args);
                let mut rows = self.db.query(&sql, &args)?;

                let mut count = 0i64;
                if rows.advance() {
                    let mut props: [&mut dyn ScanTarget; 1] = [&mut count];
                    rows.scan(&mut props)?;
                }

                if let Some(err) = rows.err() {
                    return Err(err);
                }

                rows.close()?;
                Ok(count)
            }
        }
    }

    fn expand_delete_one_by(&self, key: &Key<'_>) -> Result<TokenStream> {
        let method = ident!("delete_one_by_{}", key.suffix)?;
        let op = method.to_string();
        let (params, bind) = self.expand_key(key)?;

        Ok(quote! {
            pub fn #method(&self, #( #params ),*) -> Result<u64, Error> {
                #bind

                let mut comp = Composer::new();
                comp.write_str("DELETE FROM ");
                comp.write_str(&self.table);

                let mut clause = comp.clause(" WHERE ", " AND ");
                for (column, value) in key_columns.into_iter().zip(key) {
                    clause.assign(column, value);
                }
                clause.finish();

                let (sql, args) = comp.into_parts();
                trace_query(#op, &sql, &args);
                self.db.execute(&sql, &args)
            }
        })
    }
}
