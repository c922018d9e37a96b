//! Generates Rust data access code for a [`Schema`].
//!
//! For every table the generated module holds constants, an entity and,
//! depending on the configured [`Components`](schemagen_core::Components),
//! criteria, join and find descriptors, a patch, a row iterator and a
//! repository running queries through `schemagen_runtime::Executor`.

#[macro_use]
mod util;

mod expand;
use expand::Expand;

mod names;
use names::Names;

mod output;

mod plugin;
pub use plugin::Plugin;

mod ty;

use schemagen_core::{Config, Result, Schema};

/// Generates data access source code.
pub struct Generator {
    config: Config,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Generator {
    pub fn new(config: Config) -> Generator {
        Generator {
            config,
            plugins: vec![],
        }
    }

    /// Registers a plugin. Plugins are consulted in registration order.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Generator {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the formatted source of the generated module.
    pub fn generate(&self, schema: &Schema) -> Result<String> {
        schema.verify()?;

        let names = Names::from_schema(schema)?;
        let mut tables = vec![];

        for table in &schema.tables {
            let tokens = Expand::new(self, schema, table, &names)
                .and_then(|expand| expand.expand())
                .map_err(|err| err.context(format!("table `{}`", table.name)))?;

            tracing::debug!(table = %table.name, "generated table source");
            tables.push(tokens);
        }

        self.assemble(schema, tables)
    }
}

/// Generates source for `schema` with `config` and no plugins.
pub fn generate(schema: &Schema, config: &Config) -> Result<String> {
    Generator::new(config.clone()).generate(schema)
}
