use super::Statement;

use schemagen_core::Schema;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSchema {
    pub name: String,
    pub if_not_exists: bool,
}

impl Statement {
    /// Returns `None` for an unnamed schema.
    pub fn create_schema(schema: &Schema) -> Option<Self> {
        if schema.name.is_empty() {
            return None;
        }

        Some(
            CreateSchema {
                name: schema.name.clone(),
                if_not_exists: schema.if_not_exists,
            }
            .into(),
        )
    }
}

impl From<CreateSchema> for Statement {
    fn from(value: CreateSchema) -> Self {
        Self::CreateSchema(value)
    }
}
