mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Field, FieldAttr, FieldKind};

mod model;
pub(crate) use model::Model;
