use super::{Relationship, Schema, Table, TableId};
use crate::{Error, Result};

use std::collections::HashSet;

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    /// Checks the structural invariants both emitters rely on.
    pub fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        let mut table_names = HashSet::new();

        for (index, table) in self.schema.tables.iter().enumerate() {
            if table.id != TableId(index) {
                return Err(Error::invalid_schema(format!(
                    "table `{}` was not added through `Schema::add_table`",
                    table.name
                )));
            }

            if !table_names.insert(table.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "duplicate table `{}`",
                    table.name
                )));
            }

            self.verify_table(table)
                .map_err(|err| err.context(format!("table `{}`", table.name)))?;
        }

        for function in &self.schema.functions {
            if function.name.is_empty() {
                return Err(Error::invalid_schema("function without a name"));
            }

            if function.args.iter().any(|arg| arg.name.is_empty()) {
                return Err(Error::invalid_schema(format!(
                    "function `{}` has an unnamed argument",
                    function.name
                )));
            }
        }

        for (index, rel) in self.schema.relationships.iter().enumerate() {
            self.verify_relationship(rel)
                .map_err(|err| err.context(format!("relationship #{index}")))?;
        }

        Ok(())
    }

    fn verify_table(&self, table: &Table) -> Result<()> {
        if table.name.is_empty() {
            return Err(Error::invalid_schema("table without a name"));
        }

        if table.physical_columns().next().is_none() {
            return Err(Error::invalid_schema("table has no columns"));
        }

        let mut names = HashSet::new();
        for column in &table.columns {
            if column.name.is_empty() {
                return Err(Error::invalid_schema("column without a name"));
            }

            if !names.insert(column.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "duplicate column `{}`",
                    column.name
                )));
            }
        }

        Ok(())
    }

    fn verify_relationship(&self, rel: &Relationship) -> Result<()> {
        for side in [rel.owner(), rel.inversed()] {
            let table = self.schema.table(side.table)?;

            for column in &side.columns {
                if table.column(column).is_none() {
                    return Err(Error::invalid_reference(format!(
                        "table `{}` has no column `{column}`",
                        table.name
                    )));
                }
            }
        }

        if let Some(foreign) = rel.as_foreign() {
            if foreign.owner.columns.is_empty() {
                return Err(Error::invalid_reference(format!(
                    "{} relationship without owner columns",
                    rel.kind_name()
                )));
            }

            if foreign.owner.columns.len() != foreign.inversed.columns.len() {
                return Err(Error::invalid_reference(format!(
                    "{} relationship joins {} owner columns to {} inverse columns",
                    rel.kind_name(),
                    foreign.owner.columns.len(),
                    foreign.inversed.columns.len()
                )));
            }
        }

        Ok(())
    }
}
