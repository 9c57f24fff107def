pub mod driver;
pub use driver::{Connection, Driver, Row};

mod error;
pub use error::{Error, IntoError};

pub mod schema;

pub mod stmt;

/// A Result type alias that uses rowbind's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
