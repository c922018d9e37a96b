//! Generates PostgreSQL DDL and Rust data access code from one schema
//! description.
//!
//! ```
//! use schemagen::schema::{Column, Table, Type};
//! use schemagen::{Config, Schema};
//!
//! let mut schema = Schema::new("app");
//! schema.add_table(
//!     Table::new("user")
//!         .with_column(Column::new("id", Type::BigSerial).primary_key())
//!         .with_column(Column::new("email", Type::Text).not_null()),
//! );
//!
//! let output = schemagen::generate(&schema, &Config::default()).unwrap();
//! assert!(output.sql.contains("CREATE TABLE app.user ("));
//! assert!(output.source.contains("pub struct UserEntity"));
//! ```

pub use schemagen_codegen::{Generator, Plugin};
pub use schemagen_core::{classify, resolve, schema, Components, Config, Error, Result, Schema};
pub use schemagen_sql::Serializer;

/// The result of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// DDL script creating the schema.
    pub sql: String,

    /// Formatted Rust module.
    pub source: String,
}

/// Generates both outputs for `schema` without plugins.
pub fn generate(schema: &Schema, config: &Config) -> Result<Output> {
    generate_with(schema, &Generator::new(config.clone()))
}

/// Generates both outputs, rendering source with `generator`.
///
/// Fails without output if either emitter fails.
pub fn generate_with(schema: &Schema, generator: &Generator) -> Result<Output> {
    let sql = Serializer::postgresql(schema)
        .version(generator.config().version)
        .serialize()?;
    let source = generator.generate(schema)?;

    tracing::debug!(
        schema = %schema.name,
        tables = schema.tables.len(),
        "generated schema"
    );

    Ok(Output { sql, source })
}
