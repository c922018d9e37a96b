use schemagen_core::{
    classify,
    schema::{Constraint, ConstraintKind, ReferentialAction},
    Error, Result, Schema,
};

/// A constraint declared inside `CREATE TABLE`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConstraint {
    pub name: String,
    pub kind: TableConstraintKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraintKind {
    PrimaryKey(Vec<String>),
    Unique(Vec<String>),
    ForeignKey {
        columns: Vec<String>,

        /// Full name of the referenced table
        references: String,

        referenced_columns: Vec<String>,
        on_delete: Option<ReferentialAction>,
        on_update: Option<ReferentialAction>,
    },
    Check(String),
}

impl TableConstraint {
    pub(crate) fn from_schema(schema: &Schema, constraint: &Constraint) -> Result<Self> {
        let name = classify::name_of(schema, constraint)?;

        let kind = match constraint.kind {
            ConstraintKind::PrimaryKey => TableConstraintKind::PrimaryKey(constraint.columns.clone()),
            ConstraintKind::Unique => TableConstraintKind::Unique(constraint.columns.clone()),
            ConstraintKind::ForeignKey => {
                if constraint.columns.is_empty() {
                    return Err(Error::invalid_reference(format!(
                        "foreign key `{name}` requires at least one column"
                    )));
                }

                if constraint.referenced_columns.is_empty() {
                    return Err(Error::invalid_reference(format!(
                        "foreign key `{name}` requires at least one referenced column"
                    )));
                }

                let Some(referenced) = constraint.referenced_table else {
                    return Err(Error::invalid_reference(format!(
                        "foreign key `{name}` is missing its referenced table"
                    )));
                };

                TableConstraintKind::ForeignKey {
                    columns: constraint.columns.clone(),
                    references: schema.full_name(schema.table(referenced)?),
                    referenced_columns: constraint.referenced_columns.clone(),
                    on_delete: constraint.on_delete,
                    on_update: constraint.on_update,
                }
            }
            ConstraintKind::Check => match &constraint.check {
                Some(expr) if !expr.trim().is_empty() => TableConstraintKind::Check(expr.clone()),
                _ => {
                    return Err(Error::invalid_schema(format!(
                        "check constraint `{name}` has no expression"
                    )))
                }
            },
            kind => {
                return Err(Error::unsupported_kind(format!(
                    "unknown constraint type `{}` for `{name}`",
                    kind.tag()
                )))
            }
        };

        Ok(Self { name, kind })
    }
}
