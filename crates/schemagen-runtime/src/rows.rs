use crate::{Result, ScanTarget, Value};

/// A result set, consumed one row at a time.
pub trait Rows {
    /// Moves to the next row. Returns `false` when there are no more rows or
    /// an error stopped iteration.
    fn advance(&mut self) -> bool;

    fn close(&mut self) -> Result<()>;

    /// Takes the error that stopped iteration, if any.
    fn err(&mut self) -> Option<crate::Error>;

    /// Names of the returned columns.
    fn columns(&self) -> Result<Vec<String>>;

    /// Copies the current row into `targets`, one per column.
    fn scan(&mut self, targets: &mut [&mut dyn ScanTarget]) -> Result<()>;
}

/// Runs SQL against a database.
pub trait Executor {
    fn query(&self, sql: &str, args: &[Value]) -> Result<Box<dyn Rows>>;

    /// Runs a statement and returns the number of affected rows.
    fn execute(&self, sql: &str, args: &[Value]) -> Result<u64>;
}
