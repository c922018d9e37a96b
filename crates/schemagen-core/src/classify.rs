//! Constraint naming and grouping shared by the SQL and Rust emitters.

use crate::schema::{Constraint, ConstraintKind, Schema, Table, TableId};
use crate::{Error, Result};

use std::collections::HashSet;

/// The derived name of `constraint`: `schema.table_col1_col2_tag`.
///
/// Tables in an unnamed schema use `public`.
pub fn name_of(schema: &Schema, constraint: &Constraint) -> Result<String> {
    let table = schema.table(constraint.table)?;
    let schema_name = if schema.name.is_empty() {
        "public"
    } else {
        &schema.name
    };

    Ok(format!(
        "{schema_name}.{}_{}_{}",
        table.name,
        constraint.columns.join("_"),
        constraint.kind.tag()
    ))
}

/// Number of constraints whose kind is one of `kinds`.
pub fn count_of<'a>(
    constraints: impl IntoIterator<Item = &'a Constraint>,
    kinds: &[ConstraintKind],
) -> usize {
    constraints
        .into_iter()
        .filter(|constraint| kinds.contains(&constraint.kind))
        .count()
}

/// Splits constraints into those declared inside `CREATE TABLE` and indexes
/// created by their own statement. Order is kept within each group.
pub fn partition<'a>(
    constraints: impl IntoIterator<Item = &'a Constraint>,
) -> (Vec<&'a Constraint>, Vec<&'a Constraint>) {
    constraints
        .into_iter()
        .partition(|constraint| !constraint.kind.is_standalone())
}

/// The constraints of `table`: declared ones followed by a foreign key for
/// each owned relationship spanning more than one column.
///
/// The returned list is validated: every column reference must exist, foreign
/// keys must be complete and names must be unique within the table.
pub fn table_constraints(schema: &Schema, table: TableId) -> Result<Vec<Constraint>> {
    let t = schema.table(table)?;
    let mut constraints = t.constraints.clone();

    for (_, rel) in schema.owned_relationships(table) {
        let Some(foreign) = rel.as_foreign() else {
            continue;
        };

        if foreign.owner.columns.len() < 2 {
            continue;
        }

        let mut constraint = Constraint::foreign_key(
            foreign.owner.columns.iter().cloned(),
            foreign.inversed.table,
            foreign.inversed.columns.iter().cloned(),
        );
        constraint.table = table;
        constraint.on_delete = foreign.on_delete;
        constraint.on_update = foreign.on_update;

        tracing::trace!(
            table = %t.name,
            columns = ?constraint.columns,
            "synthesized foreign key"
        );
        constraints.push(constraint);
    }

    let mut names = HashSet::new();
    for constraint in &constraints {
        let name = name_of(schema, constraint)?;
        verify(schema, t, constraint).map_err(|err| err.context(format!("constraint `{name}`")))?;

        if !names.insert(name.clone()) {
            return Err(Error::invalid_schema(format!(
                "duplicate constraint `{name}` on table `{}`",
                t.name
            )));
        }
    }

    Ok(constraints)
}

fn verify(schema: &Schema, table: &Table, constraint: &Constraint) -> Result<()> {
    for column in &constraint.columns {
        if table.column(column).is_none() {
            return Err(Error::invalid_reference(format!(
                "table `{}` has no column `{column}`",
                table.name
            )));
        }
    }

    if constraint.kind != ConstraintKind::ForeignKey {
        return Ok(());
    }

    if constraint.columns.is_empty() {
        return Err(Error::invalid_reference("foreign key without columns"));
    }

    if constraint.referenced_columns.is_empty() {
        return Err(Error::invalid_reference(
            "foreign key without referenced columns",
        ));
    }

    let Some(referenced) = constraint.referenced_table else {
        return Err(Error::invalid_reference("foreign key without referenced table"));
    };
    let referenced = schema.table(referenced)?;

    for column in &constraint.referenced_columns {
        if referenced.column(column).is_none() {
            return Err(Error::invalid_reference(format!(
                "table `{}` has no column `{column}`",
                referenced.name
            )));
        }
    }

    Ok(())
}
