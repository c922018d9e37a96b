//! Resolution of the fields an entity exposes for its table.
//!
//! Relationships are declared once on the schema but surface as a field on
//! both tables involved. The functions here decide the field name and
//! cardinality of each end.

use crate::schema::{
    Column, Name, Relationship, RelationshipId, RelationshipSide, Schema, TableId, Type,
};
use crate::{Error, Result};

use std::collections::HashSet;

/// The end of a relationship a field is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Perspective {
    Owner,
    Inverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    Single,
    Collection,
}

/// A relationship as seen from one of its tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipField {
    /// Field name, in snake case.
    pub name: String,

    pub relationship: RelationshipId,

    pub cardinality: Cardinality,

    pub perspective: Perspective,

    /// The table on the other end.
    pub target: TableId,
}

/// A field of a generated entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityField {
    Column {
        name: String,

        /// Index into the table's columns.
        index: usize,

        /// Set for dynamic columns, which are read but never written.
        read_only: bool,
    },
    Relationship(RelationshipField),
}

impl EntityField {
    pub fn name(&self) -> &str {
        match self {
            EntityField::Column { name, .. } => name,
            EntityField::Relationship(field) => &field.name,
        }
    }
}

impl RelationshipField {
    pub fn is_single(&self) -> bool {
        self.cardinality == Cardinality::Single
    }
}

/// Resolves the field `relationship` contributes to `table` when seen from
/// `perspective`.
pub fn relationship_field(
    schema: &Schema,
    table: TableId,
    id: RelationshipId,
    perspective: Perspective,
) -> Result<RelationshipField> {
    let rel = schema.relationship(id)?;
    let owner = rel.owner();
    let inversed = rel.inversed();

    let (this, other) = match perspective {
        Perspective::Owner => (owner, inversed),
        Perspective::Inverse => (inversed, owner),
    };

    if this.table != table {
        let side = match perspective {
            Perspective::Owner => "owner",
            Perspective::Inverse => "inverse",
        };
        return Err(Error::unsupported_kind(format!(
            "table `{}` is not the {side} of {} relationship #{}",
            table_name(schema, table),
            rel.kind_name(),
            id.0,
        )));
    }

    if let Relationship::ManyToMany(many) = rel {
        if owner.table == inversed.table && (owner.name.is_none() || inversed.name.is_none()) {
            return Err(Error::invalid_schema(format!(
                "self-referencing many-to-many relationship #{} on `{}` requires names on both sides",
                id.0,
                table_name(schema, table),
            )));
        }

        if let Some(through) = many.through {
            schema.table(through)?;
        }
    }

    let cardinality = match (rel, perspective) {
        (Relationship::OneToOne(_), _) => Cardinality::Single,
        (Relationship::ManyToOne(_), Perspective::Owner) => Cardinality::Single,
        (Relationship::OneToMany(_), Perspective::Inverse) => Cardinality::Single,
        (Relationship::ManyToOne(_), Perspective::Inverse) => Cardinality::Collection,
        (Relationship::OneToMany(_), Perspective::Owner) => Cardinality::Collection,
        (Relationship::ManyToMany(_), _) => Cardinality::Collection,
    };

    let name = field_name(schema, other, cardinality)?;

    tracing::trace!(
        table = %table_name(schema, table),
        field = %name,
        kind = rel.kind_name(),
        "resolved relationship field"
    );

    Ok(RelationshipField {
        name,
        relationship: id,
        cardinality,
        perspective,
        target: other.table,
    })
}

/// The ordered fields of `table`'s entity: columns, then owned, inversed and
/// many-to-many relationships.
///
/// Only columns with a Rust representation in their default mode are
/// included. Use [`entity_fields_with`] to decide that with extra type
/// sources.
pub fn entity_fields(schema: &Schema, table: TableId) -> Result<Vec<EntityField>> {
    entity_fields_with(schema, table, column_has_type)
}

/// Like [`entity_fields`], with `has_type` deciding which columns get a
/// field.
pub fn entity_fields_with(
    schema: &Schema,
    table: TableId,
    has_type: impl Fn(&Column) -> bool,
) -> Result<Vec<EntityField>> {
    let t = schema.table(table)?;
    let mut fields = vec![];

    for (index, column) in t.columns.iter().enumerate() {
        if !has_type(column) {
            continue;
        }

        fields.push(EntityField::Column {
            name: Name::new(&column.name).snake_case(),
            index,
            read_only: column.dynamic,
        });
    }

    for (id, _) in schema.owned_relationships(table) {
        let field = relationship_field(schema, table, id, Perspective::Owner)?;
        fields.push(EntityField::Relationship(field));
    }

    for (id, _) in schema.inversed_relationships(table) {
        let field = relationship_field(schema, table, id, Perspective::Inverse)?;
        fields.push(EntityField::Relationship(field));
    }

    for (id, rel) in schema.many_to_many_relationships(table) {
        if rel.owner().table == table {
            let field = relationship_field(schema, table, id, Perspective::Owner)?;
            fields.push(EntityField::Relationship(field));
        }

        if rel.inversed().table == table {
            let field = relationship_field(schema, table, id, Perspective::Inverse)?;
            fields.push(EntityField::Relationship(field));
        }
    }

    let mut seen = HashSet::new();
    for field in &fields {
        if !seen.insert(field.name()) {
            return Err(Error::invalid_schema(format!(
                "entity of table `{}` has more than one field named `{}`",
                t.name,
                field.name(),
            )));
        }
    }

    Ok(fields)
}

/// Owned relationships that can be joined from `table`, in schema order.
pub fn joinable_relationships(schema: &Schema, table: TableId) -> Result<Vec<RelationshipField>> {
    schema
        .owned_relationships(table)
        .map(|(id, _)| relationship_field(schema, table, id, Perspective::Owner))
        .collect()
}

/// True if `column` has a Rust type in its default mode without outside help.
pub fn column_has_type(column: &Column) -> bool {
    match &column.ty {
        Type::Custom(custom) => custom.type_for(column.mode()).is_some(),
        _ => true,
    }
}

fn field_name(schema: &Schema, other: &RelationshipSide, cardinality: Cardinality) -> Result<String> {
    if let Some(name) = &other.name {
        return Ok(Name::new(name).snake_case());
    }

    let name = Name::new(&schema.table(other.table)?.name);

    Ok(match cardinality {
        Cardinality::Single => name.snake_case(),
        Cardinality::Collection => name.plural().snake_case(),
    })
}

fn table_name(schema: &Schema, table: TableId) -> &str {
    schema
        .tables
        .get(table.0)
        .map(|t| t.name.as_str())
        .unwrap_or("<unknown>")
}
