//! Support library for data access code generated by `schemagen`.
//!
//! Generated modules only import [`prelude`]. The items here are also usable
//! directly, e.g. to implement [`Executor`] for a database driver.

mod composer;
pub use composer::{Checkpoint, Clause, Composer};

mod criteria;
pub use criteria::{Criteria, FilterSet, Operator};

mod error;
pub use error::{Error, Result};

mod filter;
pub use filter::Filter;

mod join;
pub use join::JoinKind;

mod order;
pub use order::RowOrder;

mod rows;
pub use rows::{Executor, Rows};

mod scan;
pub use scan::{scan_all, scan_joined, scan_one, Entity, ScanTarget};

mod trace;
pub use trace::trace_query;

mod value;
pub use value::Value;

pub mod prelude {
    pub use crate::{
        scan_all, scan_joined, scan_one, trace_query, Clause, Composer, Criteria, Entity, Error,
        Executor, Filter, FilterSet, JoinKind, Operator, RowOrder, Rows, ScanTarget, Value,
    };
}
