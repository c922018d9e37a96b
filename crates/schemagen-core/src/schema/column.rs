use super::{Mode, Type};

/// A table column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The column type.
    pub ty: Type,

    /// When `true`, the column is rendered with `NOT NULL`.
    pub not_null: bool,

    /// Optional collation, rendered verbatim after the type.
    pub collate: Option<String>,

    /// Default expressions, keyed by the event that applies them.
    pub defaults: Vec<(Event, String)>,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,

    /// Computed columns are never physically stored. They are skipped in
    /// `CREATE TABLE`, `INSERT` and `UPDATE` but can still be read.
    pub dynamic: bool,

    /// Read-only columns are excluded from `INSERT` and `UPDATE`.
    pub read_only: bool,
}

/// Events a column default can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Insert,
    Update,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            not_null: false,
            collate: None,
            defaults: vec![],
            primary_key: false,
            dynamic: false,
            read_only: false,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Marks the column as part of the primary key.
    ///
    /// Primary key columns are always `NOT NULL`.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.not_null = true;
        self
    }

    pub fn collate(mut self, collation: impl Into<String>) -> Self {
        self.collate = Some(collation.into());
        self
    }

    /// Sets the default expression applied on `event`, replacing any existing
    /// one for the same event.
    pub fn default_on(mut self, event: Event, expr: impl Into<String>) -> Self {
        self.defaults.retain(|(e, _)| *e != event);
        self.defaults.push((event, expr.into()));
        self
    }

    pub fn dynamic(mut self) -> Self {
        self.dynamic = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Returns the default expression for `event`, if any.
    pub fn default_for(&self, event: Event) -> Option<&str> {
        self.defaults
            .iter()
            .find(|(e, _)| *e == event)
            .map(|(_, expr)| expr.as_str())
    }

    /// True if the column is written by `INSERT` and `UPDATE` statements.
    pub fn is_writable(&self) -> bool {
        !self.dynamic && !self.read_only
    }

    /// The mode used for the column's entity field.
    pub fn mode(&self) -> Mode {
        if self.not_null || self.primary_key {
            Mode::Mandatory
        } else {
            Mode::Optional
        }
    }
}
