mod column;
pub use column::{Column, Event};

mod constraint;
pub use constraint::{Constraint, ConstraintKind, ReferentialAction};

mod function;
pub use function::{Function, FunctionArg, FunctionBehaviour};

mod name;
pub use name::Name;

mod relationship;
pub use relationship::{ForeignRelationship, ManyToMany, Relationship, RelationshipId, RelationshipSide};

#[allow(clippy::module_inception)]
mod schema;
pub use schema::Schema;

mod table;
pub use table::{Table, TableId};

mod ty;
pub use ty::{CustomType, Mode, Type, TypeRef};

mod verify;
