use schemagen_core::schema::{Column, Event};

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,

    /// SQL type
    pub ty: String,

    pub collate: Option<String>,

    /// Default applied on insert
    pub default: Option<String>,

    pub not_null: bool,
}

impl ColumnDef {
    pub(crate) fn from_schema(column: &Column) -> Self {
        Self {
            name: column.name.clone(),
            ty: column.ty.to_string(),
            collate: column.collate.clone(),
            default: column.default_for(Event::Insert).map(String::from),
            not_null: column.not_null,
        }
    }
}
