use super::TableId;

/// A table constraint or index.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub kind: ConstraintKind,

    /// The table the constraint belongs to. Assigned when the table is added
    /// to a schema.
    pub table: TableId,

    /// Local column names, in order.
    pub columns: Vec<String>,

    /// Table referenced by a foreign key.
    pub referenced_table: Option<TableId>,

    /// Referenced column names, in order.
    pub referenced_columns: Vec<String>,

    /// Expression of a check constraint.
    pub check: Option<String>,

    /// Predicate of a partial unique index.
    pub predicate: Option<String>,

    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    PrimaryKey,
    Unique,
    ForeignKey,
    Check,
    Index,
    UniqueIndex,
    Exclusion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferentialAction {
    Cascade,
    Restrict,
    SetNull,
    SetDefault,
}

impl Constraint {
    fn new(kind: ConstraintKind, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            kind,
            table: TableId::placeholder(),
            columns: columns.into_iter().map(Into::into).collect(),
            referenced_table: None,
            referenced_columns: vec![],
            check: None,
            predicate: None,
            on_delete: None,
            on_update: None,
        }
    }

    pub fn primary_key(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(ConstraintKind::PrimaryKey, columns)
    }

    pub fn unique(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(ConstraintKind::Unique, columns)
    }

    pub fn foreign_key(
        columns: impl IntoIterator<Item = impl Into<String>>,
        referenced_table: TableId,
        referenced_columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut constraint = Self::new(ConstraintKind::ForeignKey, columns);
        constraint.referenced_table = Some(referenced_table);
        constraint.referenced_columns = referenced_columns.into_iter().map(Into::into).collect();
        constraint
    }

    pub fn check(
        expr: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut constraint = Self::new(ConstraintKind::Check, columns);
        constraint.check = Some(expr.into());
        constraint
    }

    pub fn index(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(ConstraintKind::Index, columns)
    }

    pub fn unique_index(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(ConstraintKind::UniqueIndex, columns)
    }

    pub fn exclusion(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(ConstraintKind::Exclusion, columns)
    }

    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = Some(action);
        self
    }

    /// Restricts a unique index to rows matching `predicate`.
    pub fn predicate(mut self, predicate: impl Into<String>) -> Self {
        self.predicate = Some(predicate.into());
        self
    }

    pub fn is_primary_key(&self) -> bool {
        self.kind == ConstraintKind::PrimaryKey
    }

    pub fn is_unique(&self) -> bool {
        self.kind == ConstraintKind::Unique
    }
}

impl ConstraintKind {
    /// Suffix used when naming constraints of this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ConstraintKind::PrimaryKey => "pkey",
            ConstraintKind::Unique => "key",
            ConstraintKind::ForeignKey => "fkey",
            ConstraintKind::Check => "check",
            ConstraintKind::Index => "idx",
            ConstraintKind::UniqueIndex => "uidx",
            ConstraintKind::Exclusion => "excl",
        }
    }

    /// Indexes are created by their own statement after the table.
    pub fn is_standalone(self) -> bool {
        matches!(self, ConstraintKind::Index | ConstraintKind::UniqueIndex)
    }
}

impl ReferentialAction {
    pub fn as_sql(self) -> &'static str {
        match self {
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::SetDefault => "SET DEFAULT",
        }
    }
}
