#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod ident;
use ident::Ident;

// Fragment serializers
mod column_def;
mod statement;
mod table_constraint;

use crate::stmt::Statement;

use schemagen_core::{classify, schema::TableId, Config, Result, Schema};

/// Tool name written in the banner of every generated script.
const GENERATED_BY: &str = "schemagen";

/// Serializes a schema to a PostgreSQL script
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Schema to serialize
    schema: &'a Schema,

    /// Version of PostgreSQL the script targets
    version: f64,
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn postgresql(schema: &'a Schema) -> Serializer<'a> {
        Serializer {
            schema,
            version: Config::default().version,
        }
    }

    /// Sets the targeted PostgreSQL version.
    pub fn version(mut self, version: f64) -> Self {
        self.version = version;
        self
    }

    /// Serializes the whole schema.
    ///
    /// Either the complete script is returned or nothing is.
    pub fn serialize(&self) -> Result<String> {
        let schema = self.schema;
        schema.verify()?;

        let mut ret = format!("-- do not modify, generated by {GENERATED_BY}\n\n");
        let f = &mut Formatter { dst: &mut ret };

        if let Some(stmt) = Statement::create_schema(schema) {
            fmt!(f, &stmt "\n\n");
        }

        for function in &schema.functions {
            let stmt = Statement::create_function(function)
                .map_err(|err| err.context(format!("function `{}`", function.name)))?;

            tracing::debug!(function = %function.name, "serializing function");
            fmt!(f, &stmt "\n\n");
        }

        for table in &schema.tables {
            let statements = self
                .table_statements(table.id)
                .map_err(|err| err.context(format!("table `{}`", table.name)))?;

            tracing::debug!(
                table = %table.name,
                indices = statements.len() - 1,
                "serializing table"
            );

            for stmt in &statements {
                fmt!(f, stmt "\n");
            }
            fmt!(f, "\n");
        }

        Ok(ret)
    }

    /// Serializes a single statement, without a trailing newline.
    pub fn serialize_statement(&self, stmt: &Statement) -> String {
        let mut ret = String::new();
        stmt.to_sql(&mut Formatter { dst: &mut ret });
        ret
    }

    /// The `CREATE TABLE` statement of a table followed by its indices.
    pub fn table_statements(&self, table: TableId) -> Result<Vec<Statement>> {
        let schema = self.schema;
        let t = schema.table(table)?;

        let constraints = classify::table_constraints(schema, table)?;
        let (inline, standalone) = classify::partition(&constraints);

        let mut statements = vec![Statement::create_table(schema, t, &inline)?];

        for constraint in standalone {
            statements.push(Statement::create_index(
                schema,
                constraint,
                self.index_if_not_exists(),
            )?);
        }

        Ok(statements)
    }

    fn index_if_not_exists(&self) -> bool {
        self.version >= 9.5
    }
}
