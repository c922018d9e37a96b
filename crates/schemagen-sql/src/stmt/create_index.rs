use super::Statement;

use schemagen_core::{
    classify,
    schema::{Constraint, ConstraintKind},
    Error, Result, Schema,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndex {
    /// Name of the index
    pub name: String,

    /// Full name of the indexed table
    pub on: String,

    /// The columns to index
    pub columns: Vec<String>,

    /// When true, the index is unique
    pub unique: bool,

    pub if_not_exists: bool,

    /// Partial index predicate. Only used by unique indexes.
    pub predicate: Option<String>,
}

impl Statement {
    pub fn create_index(schema: &Schema, constraint: &Constraint, if_not_exists: bool) -> Result<Self> {
        let unique = match constraint.kind {
            ConstraintKind::Index => false,
            ConstraintKind::UniqueIndex => true,
            kind => {
                return Err(Error::unsupported_kind(format!(
                    "`{}` constraints are not indexes",
                    kind.tag()
                )))
            }
        };

        let table = schema.table(constraint.table)?;

        Ok(CreateIndex {
            name: classify::name_of(schema, constraint)?,
            on: schema.full_name(table),
            columns: constraint.columns.clone(),
            unique,
            if_not_exists,
            predicate: if unique {
                constraint.predicate.clone()
            } else {
                None
            },
        }
        .into())
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
