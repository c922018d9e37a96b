use core::ops::{BitAnd, BitOr};

/// Configuration for a generation run
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL version the generated code will run against.
    pub version: f64,

    /// Name of the module the generated source is wrapped in. When empty,
    /// `db` is used.
    pub module: String,

    /// Additional `use` paths added to the generated source.
    pub imports: Vec<String>,

    /// Components that should be generated.
    pub components: Components,

    /// Path of the runtime support crate referenced by generated code.
    pub runtime: String,
}

/// Selects which constructs are generated for each table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Components(u64);

impl Components {
    /// Insert method of a repository.
    pub const INSERT: Components = Components(1 << 63);

    /// Find methods of a repository.
    pub const FIND: Components = Components(1 << 62);

    /// Update methods of a repository.
    pub const UPDATE: Components = Components(1 << 61);

    /// Upsert method of a repository.
    pub const UPSERT: Components = Components(1 << 60);

    /// Count method of a repository.
    pub const COUNT: Components = Components(1 << 59);

    /// Delete method of a repository.
    pub const DELETE: Components = Components(1 << 58);

    /// Helper functions.
    pub const HELPERS: Components = Components(1 << 57);

    /// Every repository method.
    pub const REPOSITORY: Components = Components(
        Self::INSERT.0 | Self::FIND.0 | Self::UPDATE.0 | Self::UPSERT.0 | Self::COUNT.0 | Self::DELETE.0,
    );

    /// Everything.
    pub const ALL: Components = Components(Self::REPOSITORY.0 | Self::HELPERS.0);

    pub const NONE: Components = Components(0);

    /// Returns `true` if any of the bits in `other` are set.
    pub fn intersects(self, other: Components) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns `true` if all of the bits in `other` are set.
    pub fn contains(self, other: Components) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Components {
    type Output = Components;

    fn bitor(self, rhs: Components) -> Components {
        Components(self.0 | rhs.0)
    }
}

impl BitAnd for Components {
    type Output = Components;

    fn bitand(self, rhs: Components) -> Components {
        Components(self.0 & rhs.0)
    }
}

impl Default for Components {
    fn default() -> Self {
        Components::ALL
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 9.5,
            module: String::new(),
            imports: vec![],
            components: Components::ALL,
            runtime: "schemagen_runtime".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target PostgreSQL version
    pub fn version(mut self, version: f64) -> Self {
        self.version = version;
        self
    }

    /// Set the module the generated source is wrapped in
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    /// Add an extra `use` path to the generated source
    pub fn import(mut self, path: impl Into<String>) -> Self {
        self.imports.push(path.into());
        self
    }

    /// Set the generated components
    pub fn components(mut self, components: Components) -> Self {
        self.components = components;
        self
    }

    /// Set the path of the runtime support crate
    pub fn runtime(mut self, path: impl Into<String>) -> Self {
        self.runtime = path.into();
        self
    }

    /// The module name, falling back to `db` when none is configured.
    pub fn module_name(&self) -> &str {
        if self.module.is_empty() {
            "db"
        } else {
            &self.module
        }
    }
}
