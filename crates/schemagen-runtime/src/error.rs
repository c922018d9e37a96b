use thiserror::Error;

/// Errors returned by generated data access code.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown column `{0}`")]
    UnknownColumn(String),

    #[error("column `{0}` requested more than once")]
    DuplicateColumn(String),

    #[error("cannot scan {found} value into {expected}")]
    Scan {
        expected: &'static str,
        found: &'static str,
    },

    #[error("expected {expected} scan targets, got {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("no rows in result set")]
    NoRows,

    #[error("patch does not change any column")]
    EmptyPatch,

    /// Errors reported by the database driver.
    #[error(transparent)]
    Driver(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
