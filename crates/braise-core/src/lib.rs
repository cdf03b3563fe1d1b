#[macro_use]
mod macros;

pub mod driver;
pub use driver::{Command, Cursor, Row};

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Column, Table};

pub mod stmt;

/// A Result type alias that uses Braise's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
