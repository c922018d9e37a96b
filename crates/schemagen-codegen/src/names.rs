use crate::util::{const_name, type_name};

use schemagen_core::{
    classify,
    schema::{ConstraintKind, Name, Table},
    Error, Result, Schema,
};

use std::collections::HashSet;

/// Identifiers of every generated item, computed once per run.
pub(crate) struct Names {
    /// Indexed by table id.
    pub(crate) tables: Vec<TableNames>,
}

pub(crate) struct TableNames {
    pub(crate) entity: syn::Ident,
    pub(crate) filter: syn::Ident,
    pub(crate) criteria: syn::Ident,
    pub(crate) join: syn::Ident,
    pub(crate) find_expr: syn::Ident,
    pub(crate) count_expr: syn::Ident,
    pub(crate) patch: syn::Ident,
    pub(crate) iterator: syn::Ident,
    pub(crate) repository: syn::Ident,

    /// `scan_<table>_rows`
    pub(crate) scan_rows: syn::Ident,

    /// The iterator's typed accessor.
    pub(crate) next: syn::Ident,

    /// `TABLE_<TABLE>`
    pub(crate) table_const: syn::Ident,

    /// `TABLE_<TABLE>_COLUMNS`
    pub(crate) columns_const: syn::Ident,

    /// Indexed like the table's columns.
    pub(crate) columns: Vec<ColumnNames>,

    /// Aligned with `classify::table_constraints`.
    pub(crate) constraints: Vec<ConstraintNames>,
}

pub(crate) struct ColumnNames {
    pub(crate) field: syn::Ident,
    pub(crate) const_name: syn::Ident,
}

pub(crate) struct ConstraintNames {
    pub(crate) const_name: syn::Ident,
    pub(crate) name: String,
}

impl Names {
    pub(crate) fn from_schema(schema: &Schema) -> Result<Names> {
        let mut items = HashSet::new();
        let mut tables = vec![];

        for table in &schema.tables {
            let names = TableNames::from_table(schema, table)
                .map_err(|err| err.context(format!("table `{}`", table.name)))?;

            for item in names.items() {
                let item = item.to_string();

                if !items.insert(item.clone()) {
                    return Err(Error::invalid_schema(format!(
                        "generated item `{item}` is defined more than once"
                    )));
                }
            }

            tables.push(names);
        }

        Ok(Names { tables })
    }
}

impl TableNames {
    fn from_table(schema: &Schema, table: &Table) -> Result<TableNames> {
        let name = Name::new(&table.name);
        let base = type_name(&table.name);
        let prefix = format!("TABLE_{}", name.upper_snake_case());

        let columns = table
            .columns
            .iter()
            .map(|column| {
                Ok(ColumnNames {
                    field: ident!("{}", Name::new(&column.name).snake_case())?,
                    const_name: ident!("{prefix}_COLUMN_{}", const_name(&column.name))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let constraints = classify::table_constraints(schema, table.id)?
            .iter()
            .map(|constraint| {
                let suffix = match constraint.kind {
                    ConstraintKind::PrimaryKey => "PRIMARY_KEY",
                    ConstraintKind::Unique => "UNIQUE",
                    ConstraintKind::ForeignKey => "FOREIGN_KEY",
                    ConstraintKind::Check => "CHECK",
                    ConstraintKind::Index => "INDEX",
                    ConstraintKind::UniqueIndex => "UNIQUE_INDEX",
                    ConstraintKind::Exclusion => "EXCLUSION",
                };

                let const_name = if constraint.kind == ConstraintKind::PrimaryKey
                    || constraint.columns.is_empty()
                {
                    ident!("{prefix}_CONSTRAINT_{suffix}")?
                } else {
                    let columns = constraint
                        .columns
                        .iter()
                        .map(|column| const_name(column))
                        .collect::<Vec<_>>()
                        .join("_");
                    ident!("{prefix}_CONSTRAINT_{columns}_{suffix}")?
                };

                Ok(ConstraintNames {
                    const_name,
                    name: classify::name_of(schema, constraint)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TableNames {
            entity: ident!("{base}Entity")?,
            filter: ident!("{base}Filter")?,
            criteria: ident!("{base}Criteria")?,
            join: ident!("{base}Join")?,
            find_expr: ident!("{base}FindExpr")?,
            count_expr: ident!("{base}CountExpr")?,
            patch: ident!("{base}Patch")?,
            iterator: ident!("{base}Iterator")?,
            repository: ident!("{base}RepositoryBase")?,
            scan_rows: ident!("scan_{}_rows", name.snake_case())?,
            next: ident!("{}", name.snake_case())?,
            columns_const: ident!("{prefix}_COLUMNS")?,
            table_const: ident!("{prefix}")?,
            columns,
            constraints,
        })
    }

    /// Module level items, used to detect collisions between tables.
    fn items(&self) -> impl Iterator<Item = &syn::Ident> {
        [
            &self.entity,
            &self.filter,
            &self.criteria,
            &self.join,
            &self.find_expr,
            &self.count_expr,
            &self.patch,
            &self.iterator,
            &self.repository,
            &self.scan_rows,
            &self.table_const,
            &self.columns_const,
        ]
        .into_iter()
        .chain(self.columns.iter().map(|column| &column.const_name))
        .chain(self.constraints.iter().map(|constraint| &constraint.const_name))
    }
}
