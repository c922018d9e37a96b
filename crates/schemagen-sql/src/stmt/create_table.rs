use super::{ColumnDef, Statement, TableConstraint};

use schemagen_core::{
    schema::{Constraint, Table},
    Error, Result, Schema,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Schema-qualified table name
    pub name: String,

    pub temporary: bool,
    pub if_not_exists: bool,

    /// Physical columns
    pub columns: Vec<ColumnDef>,

    /// Constraints declared inline
    pub constraints: Vec<TableConstraint>,
}

impl Statement {
    /// Creates `table` with the given inline constraints.
    pub fn create_table(
        schema: &Schema,
        table: &Table,
        constraints: &[&Constraint],
    ) -> Result<Self> {
        if table.name.is_empty() {
            return Err(Error::invalid_schema("missing table name"));
        }

        let columns: Vec<_> = table.physical_columns().map(ColumnDef::from_schema).collect();

        if columns.is_empty() {
            return Err(Error::invalid_schema(format!(
                "table `{}` has no columns",
                table.name
            )));
        }

        Ok(CreateTable {
            name: schema.full_name(table),
            temporary: table.temporary,
            if_not_exists: table.if_not_exists,
            columns,
            constraints: constraints
                .iter()
                .map(|constraint| TableConstraint::from_schema(schema, constraint))
                .collect::<Result<_>>()?,
        }
        .into())
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
