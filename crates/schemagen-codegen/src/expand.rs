mod constants;
mod criteria;
mod entity;
mod find;
mod helpers;
mod iterator;
mod join;
mod patch;
mod repository;

use crate::{
    names::{ColumnNames, TableNames},
    util, Generator, Names,
};

use schemagen_core::{
    classify,
    resolve::{self, EntityField, RelationshipField},
    schema::{Column, Constraint, ConstraintKind, Mode, Table},
    Components, Error, Result, Schema,
};

use proc_macro2::TokenStream;
use quote::quote;

use std::collections::HashSet;

/// Methods every generated iterator defines.
const ITERATOR_METHODS: &[&str] = &["new", "advance", "close", "err", "columns"];

pub(crate) struct Expand<'a> {
    generator: &'a Generator,

    schema: &'a Schema,

    table: &'a Table,

    /// Identifiers of every table
    names: &'a Names,

    /// Entity fields of the table being expanded
    fields: Vec<EntityField>,

    /// Relationships that can be joined from the table
    joins: Vec<Join<'a>>,

    constraints: Vec<Constraint>,
}

/// A joinable relationship with everything needed to render it.
struct Join<'a> {
    field: RelationshipField,

    /// Entity field holding the fetched row
    ident: syn::Ident,

    /// `join_<field>` on find, count and join structs
    join_ident: syn::Ident,

    /// Alias of the joined table in queries
    alias: String,

    target: &'a TableNames,

    /// Pairs of (local, remote) column constants
    on: Vec<(&'a syn::Ident, &'a syn::Ident)>,
}

/// Columns identifying a single row: the primary key or a unique constraint.
struct Key<'a> {
    primary_key: bool,

    /// `id`, `email`, `tenant_id_and_slug`
    suffix: String,

    columns: Vec<(&'a Column, &'a ColumnNames)>,
}

impl<'a> Expand<'a> {
    pub(crate) fn new(
        generator: &'a Generator,
        schema: &'a Schema,
        table: &'a Table,
        names: &'a Names,
    ) -> Result<Expand<'a>> {
        let fields =
            resolve::entity_fields_with(schema, table.id, |column| generator.has_type(column))?;
        let constraints = classify::table_constraints(schema, table.id)?;

        let mut joins = vec![];
        for (i, field) in resolve::joinable_relationships(schema, table.id)?
            .into_iter()
            .enumerate()
        {
            let rel = schema.relationship(field.relationship)?;
            let Some(foreign) = rel.as_foreign() else {
                continue;
            };

            let target = schema.table(field.target)?;
            let on = foreign
                .owner
                .columns
                .iter()
                .zip(&foreign.inversed.columns)
                .map(|(local, remote)| {
                    Ok((
                        column_const(&names.tables[table.id.0], table, local)?,
                        column_const(&names.tables[target.id.0], target, remote)?,
                    ))
                })
                .collect::<Result<Vec<_>>>()?;

            joins.push(Join {
                ident: util::ident(&field.name)?,
                join_ident: ident!("join_{}", field.name)?,
                alias: format!("t{}", i + 1),
                target: &names.tables[target.id.0],
                on,
                field,
            });
        }

        Ok(Expand {
            generator,
            schema,
            table,
            names,
            fields,
            joins,
            constraints,
        })
    }

    pub(crate) fn expand(&self) -> Result<TokenStream> {
        let components = self.generator.config.components;
        let queries = components.intersects(Components::FIND | Components::COUNT);

        if queries {
            self.check_iterator_accessor()?;
        }

        let constants = self.expand_constants();
        let entity = self.expand_entity()?;

        let helpers = if components.contains(Components::HELPERS) {
            self.expand_scan_rows()
        } else {
            quote!()
        };

        let (iterator, criteria, find_expr, join) = if queries {
            (
                self.expand_iterator(),
                self.expand_criteria()?,
                self.expand_find_expr(),
                self.expand_join(),
            )
        } else {
            (quote!(), quote!(), quote!(), quote!())
        };

        let count_expr = if components.contains(Components::COUNT) {
            self.expand_count_expr()
        } else {
            quote!()
        };

        let patch = if components.intersects(Components::UPDATE | Components::UPSERT) {
            self.expand_patch()?
        } else {
            quote!()
        };

        let repository = if components.intersects(Components::REPOSITORY) {
            self.expand_repository()?
        } else {
            quote!()
        };

        Ok(quote! {
            #constants
            #entity
            #helpers
            #iterator
            #criteria
            #find_expr
            #join
            #count_expr
            #patch
            #repository
        })
    }

    /// The iterator's typed accessor is named after the table and shares
    /// the impl block with the fixed methods.
    fn check_iterator_accessor(&self) -> Result<()> {
        let next = self.table_names().next.to_string();

        if ITERATOR_METHODS.contains(&next.as_str()) {
            return Err(Error::invalid_schema(format!(
                "iterator accessor `{next}` collides with a built-in iterator method"
            )));
        }

        Ok(())
    }

    fn table_names(&self) -> &'a TableNames {
        &self.names.tables[self.table.id.0]
    }

    /// Columns with an entity field, in table order.
    fn entity_columns(&self) -> impl Iterator<Item = (&'a Column, &'a ColumnNames)> + '_ {
        let table = self.table;
        let names = self.table_names();

        self.fields.iter().filter_map(move |field| match field {
            EntityField::Column { index, .. } => Some((&table.columns[*index], &names.columns[*index])),
            EntityField::Relationship(_) => None,
        })
    }

    /// Columns selected by default.
    fn selected_columns(&self) -> impl Iterator<Item = (&'a Column, &'a ColumnNames)> + '_ {
        self.entity_columns().filter(|(column, _)| !column.dynamic)
    }

    /// Columns written by inserts and patches.
    fn writable_columns(&self) -> impl Iterator<Item = (&'a Column, &'a ColumnNames)> + '_ {
        self.entity_columns().filter(|(column, _)| column.is_writable())
    }

    /// Columns a patch can change.
    fn patch_columns(&self) -> impl Iterator<Item = (&'a Column, &'a ColumnNames)> + '_ {
        self.writable_columns().filter(|(column, _)| {
            !column.primary_key
                && !matches!(self.generator.column_type(column, Mode::Optional), Ok(None))
        })
    }

    /// Joins whose row can be fetched into the entity.
    fn fetchable_joins(&self) -> impl Iterator<Item = &Join<'a>> + '_ {
        self.joins.iter().filter(|join| join.field.is_single())
    }

    fn column_type(&self, column: &Column, mode: Mode) -> Result<TokenStream> {
        self.generator.column_type(column, mode)?.ok_or_else(|| {
            Error::invalid_schema(format!(
                "column `{}` has no Rust type for mode {mode:?}",
                column.name
            ))
        })
    }

    /// The primary key followed by every unique constraint, skipping column
    /// sets already covered.
    fn keys(&self) -> Result<Vec<Key<'a>>> {
        let names = self.table_names();
        let table = self.table;

        let mut sets: Vec<(bool, Vec<&str>)> = vec![];
        let pk: Vec<_> = table.primary_key_columns().map(|c| c.name.as_str()).collect();
        if !pk.is_empty() {
            sets.push((true, pk));
        }

        for constraint in &self.constraints {
            if matches!(constraint.kind, ConstraintKind::Unique | ConstraintKind::UniqueIndex)
                && !constraint.columns.is_empty()
            {
                sets.push((false, constraint.columns.iter().map(String::as_str).collect()));
            }
        }

        let mut seen = HashSet::new();
        let mut keys = vec![];

        for (primary_key, set) in sets {
            let mut columns = vec![];
            for name in &set {
                let Some(index) = table.columns.iter().position(|c| c.name == *name) else {
                    return Err(Error::invalid_reference(format!(
                        "table `{}` has no column `{name}`",
                        table.name
                    )));
                };
                columns.push((&table.columns[index], &names.columns[index]));
            }

            // Lookups take each column by value.
            let typed = columns.iter().all(|(column, _)| {
                matches!(self.generator.column_type(column, Mode::Mandatory), Ok(Some(_)))
            });

            let suffix = columns
                .iter()
                .map(|(_, names)| names.field.to_string().trim_start_matches("r#").to_string())
                .collect::<Vec<_>>()
                .join("_and_");

            if typed && seen.insert(suffix.clone()) {
                keys.push(Key {
                    primary_key,
                    suffix,
                    columns,
                });
            }
        }

        Ok(keys)
    }
}

fn column_const<'a>(names: &'a TableNames, table: &Table, column: &str) -> Result<&'a syn::Ident> {
    table
        .columns
        .iter()
        .position(|c| c.name == column)
        .map(|index| &names.columns[index].const_name)
        .ok_or_else(|| {
            Error::invalid_reference(format!(
                "table `{}` has no column `{column}`",
                table.name
            ))
        })
}
