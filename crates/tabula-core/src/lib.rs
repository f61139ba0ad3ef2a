mod error;
pub use error::{Error, IntoError};

pub mod driver;
pub use driver::Executor;

mod model;
pub use model::Model;

pub mod schema;
pub use schema::ModelSchema;

pub mod stmt;

/// A Result type alias that uses Tabula's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
