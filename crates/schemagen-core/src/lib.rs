pub mod classify;

mod config;
pub use config::{Components, Config};

mod error;
pub use error::Error;

pub mod resolve;

pub mod schema;
pub use schema::Schema;

pub type Result<T, E = Error> = core::result::Result<T, E>;
