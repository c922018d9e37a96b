use super::{Column, Constraint, ConstraintKind};

/// A database table
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Uniquely identifies a table
    pub id: TableId,

    /// Name of the table
    pub name: String,

    /// The table's columns
    pub columns: Vec<Column>,

    /// Declared constraints, in declaration order.
    pub constraints: Vec<Constraint>,

    pub temporary: bool,
    pub if_not_exists: bool,
}

/// Uniquely identifies a table
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct TableId(pub usize);

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TableId::placeholder(),
            name: name.into(),
            columns: vec![],
            constraints: vec![],
            temporary: false,
            if_not_exists: false,
        }
    }

    /// Appends a column.
    ///
    /// A primary key column is added to the table's primary key constraint,
    /// which is created on first use.
    pub fn with_column(mut self, column: Column) -> Self {
        if column.primary_key {
            match self.constraints.iter_mut().find(|c| c.is_primary_key()) {
                Some(pk) => pk.columns.push(column.name.clone()),
                None => self
                    .constraints
                    .push(Constraint::primary_key([column.name.clone()])),
            }
        }

        self.columns.push(column);
        self
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn temporary(mut self) -> Self {
        self.temporary = true;
        self
    }

    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Columns that are stored in the table.
    pub fn physical_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| !column.dynamic)
    }

    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| column.primary_key)
    }

    /// Declared constraints of the given kind.
    pub fn constraints_of(&self, kind: ConstraintKind) -> impl Iterator<Item = &Constraint> + '_ {
        self.constraints.iter().filter(move |c| c.kind == kind)
    }

    pub(crate) fn assign_id(&mut self, id: TableId) {
        self.id = id;

        for constraint in &mut self.constraints {
            constraint.table = id;
        }
    }
}

impl TableId {
    pub(crate) fn placeholder() -> Self {
        Self(usize::MAX)
    }
}
