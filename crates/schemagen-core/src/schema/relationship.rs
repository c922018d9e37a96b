use super::{ReferentialAction, TableId};

/// Uniquely identifies a relationship within a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelationshipId(pub usize);

/// A relationship between two tables.
///
/// The owner side holds the referencing columns.
#[derive(Debug, Clone, PartialEq)]
pub enum Relationship {
    OneToOne(ForeignRelationship),
    OneToMany(ForeignRelationship),
    ManyToOne(ForeignRelationship),
    ManyToMany(ManyToMany),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignRelationship {
    pub owner: RelationshipSide,
    pub inversed: RelationshipSide,

    /// Actions used when a foreign key is synthesized for the relationship.
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManyToMany {
    pub owner: RelationshipSide,
    pub inversed: RelationshipSide,

    /// Junction table
    pub through: Option<TableId>,
}

/// One end of a relationship.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipSide {
    pub table: TableId,
    pub columns: Vec<String>,

    /// Overrides the field name generated for the other end.
    pub name: Option<String>,
}

impl Relationship {
    pub fn one_to_one(owner: RelationshipSide, inversed: RelationshipSide) -> Self {
        Relationship::OneToOne(ForeignRelationship::new(owner, inversed))
    }

    pub fn one_to_many(owner: RelationshipSide, inversed: RelationshipSide) -> Self {
        Relationship::OneToMany(ForeignRelationship::new(owner, inversed))
    }

    pub fn many_to_one(owner: RelationshipSide, inversed: RelationshipSide) -> Self {
        Relationship::ManyToOne(ForeignRelationship::new(owner, inversed))
    }

    pub fn many_to_many(owner: RelationshipSide, inversed: RelationshipSide) -> Self {
        Relationship::ManyToMany(ManyToMany {
            owner,
            inversed,
            through: None,
        })
    }

    /// Sets the referential actions of a synthesized foreign key. Has no
    /// effect on many-to-many relationships.
    pub fn actions(
        mut self,
        on_delete: Option<ReferentialAction>,
        on_update: Option<ReferentialAction>,
    ) -> Self {
        if let Some(foreign) = self.as_foreign_mut() {
            foreign.on_delete = on_delete;
            foreign.on_update = on_update;
        }
        self
    }

    /// Sets the junction table of a many-to-many relationship.
    pub fn through(mut self, table: TableId) -> Self {
        if let Relationship::ManyToMany(many) = &mut self {
            many.through = Some(table);
        }
        self
    }

    pub fn owner(&self) -> &RelationshipSide {
        match self {
            Relationship::OneToOne(rel)
            | Relationship::OneToMany(rel)
            | Relationship::ManyToOne(rel) => &rel.owner,
            Relationship::ManyToMany(rel) => &rel.owner,
        }
    }

    pub fn inversed(&self) -> &RelationshipSide {
        match self {
            Relationship::OneToOne(rel)
            | Relationship::OneToMany(rel)
            | Relationship::ManyToOne(rel) => &rel.inversed,
            Relationship::ManyToMany(rel) => &rel.inversed,
        }
    }

    pub fn as_foreign(&self) -> Option<&ForeignRelationship> {
        match self {
            Relationship::OneToOne(rel)
            | Relationship::OneToMany(rel)
            | Relationship::ManyToOne(rel) => Some(rel),
            Relationship::ManyToMany(_) => None,
        }
    }

    fn as_foreign_mut(&mut self) -> Option<&mut ForeignRelationship> {
        match self {
            Relationship::OneToOne(rel)
            | Relationship::OneToMany(rel)
            | Relationship::ManyToOne(rel) => Some(rel),
            Relationship::ManyToMany(_) => None,
        }
    }

    pub fn is_many_to_many(&self) -> bool {
        matches!(self, Relationship::ManyToMany(_))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Relationship::OneToOne(_) => "one-to-one",
            Relationship::OneToMany(_) => "one-to-many",
            Relationship::ManyToOne(_) => "many-to-one",
            Relationship::ManyToMany(_) => "many-to-many",
        }
    }
}

impl ForeignRelationship {
    fn new(owner: RelationshipSide, inversed: RelationshipSide) -> Self {
        Self {
            owner,
            inversed,
            on_delete: None,
            on_update: None,
        }
    }
}

impl RelationshipSide {
    pub fn new(table: TableId) -> Self {
        Self {
            table,
            columns: vec![],
            name: None,
        }
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
