mod column_def;
pub use column_def::ColumnDef;

mod create_function;
pub use create_function::CreateFunction;

mod create_index;
pub use create_index::CreateIndex;

mod create_schema;
pub use create_schema::CreateSchema;

mod create_table;
pub use create_table::CreateTable;

mod table_constraint;
pub use table_constraint::{TableConstraint, TableConstraintKind};

/// A data definition statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateFunction(CreateFunction),
    CreateIndex(CreateIndex),
    CreateSchema(CreateSchema),
    CreateTable(CreateTable),
}
