use super::{Function, Relationship, RelationshipId, Table, TableId};
use crate::{Error, Result};

/// The root of the schema model
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Schema {
    /// Schema name. When empty no `CREATE SCHEMA` is emitted and table
    /// names are left unqualified.
    pub name: String,

    pub if_not_exists: bool,

    /// Tables, in generation order. A table's position is its `TableId`.
    pub tables: Vec<Table>,

    pub functions: Vec<Function>,

    /// Relationships, in declaration order.
    pub relationships: Vec<Relationship>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a table and returns its identifier.
    pub fn add_table(&mut self, mut table: Table) -> TableId {
        let id = TableId(self.tables.len());
        table.assign_id(id);
        self.tables.push(table);
        id
    }

    pub fn add_function(&mut self, function: Function) {
        self.functions.push(function);
    }

    pub fn add_relationship(&mut self, relationship: Relationship) -> RelationshipId {
        let id = RelationshipId(self.relationships.len());
        self.relationships.push(relationship);
        id
    }

    pub fn table(&self, id: TableId) -> Result<&Table> {
        self.tables
            .get(id.0)
            .ok_or_else(|| Error::invalid_reference(format!("no table with id {}", id.0)))
    }

    pub fn relationship(&self, id: RelationshipId) -> Result<&Relationship> {
        self.relationships
            .get(id.0)
            .ok_or_else(|| Error::invalid_reference(format!("no relationship with id {}", id.0)))
    }

    /// The schema-qualified name of `table`.
    pub fn full_name(&self, table: &Table) -> String {
        if self.name.is_empty() {
            table.name.clone()
        } else {
            format!("{}.{}", self.name, table.name)
        }
    }

    /// Non many-to-many relationships owned by `table`.
    pub fn owned_relationships(
        &self,
        table: TableId,
    ) -> impl Iterator<Item = (RelationshipId, &Relationship)> + '_ {
        self.relationships_where(move |rel| !rel.is_many_to_many() && rel.owner().table == table)
    }

    /// Non many-to-many relationships pointing at `table`.
    pub fn inversed_relationships(
        &self,
        table: TableId,
    ) -> impl Iterator<Item = (RelationshipId, &Relationship)> + '_ {
        self.relationships_where(move |rel| {
            !rel.is_many_to_many() && rel.inversed().table == table
        })
    }

    /// Many-to-many relationships with `table` on either side.
    pub fn many_to_many_relationships(
        &self,
        table: TableId,
    ) -> impl Iterator<Item = (RelationshipId, &Relationship)> + '_ {
        self.relationships_where(move |rel| {
            rel.is_many_to_many() && (rel.owner().table == table || rel.inversed().table == table)
        })
    }

    fn relationships_where(
        &self,
        f: impl Fn(&Relationship) -> bool + 'static,
    ) -> impl Iterator<Item = (RelationshipId, &Relationship)> + '_ {
        self.relationships
            .iter()
            .enumerate()
            .filter(move |(_, rel)| f(rel))
            .map(|(index, rel)| (RelationshipId(index), rel))
    }
}
