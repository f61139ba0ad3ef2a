use super::Kind;
use crate::{stmt::Value, Result};

/// One struct field as seen by `#[derive(Model)]`.
///
/// The derive emits a `FieldDef` for every named field of the struct, tagged
/// or not; registration decides which ones become columns.
pub struct FieldDef<M> {
    /// Position of the field in the struct declaration
    pub index: usize,

    /// The Rust identifier of the field
    pub name: &'static str,

    /// Contents of the `#[db("...")]` attribute
    pub db: Option<&'static str>,

    /// Contents of the `#[option("...")]` attribute
    pub option: Option<&'static str>,

    pub kind: Kind,

    /// `None` for fields of an unsupported kind
    pub accessor: Option<Accessor<M>>,
}

/// Reads and writes one field of a model instance.
pub struct Accessor<M> {
    pub get: fn(&M) -> Value,
    pub set: fn(&mut M, Value) -> Result<()>,
}

impl<M> Clone for Accessor<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Accessor<M> {}

impl<M> core::fmt::Debug for Accessor<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Accessor")
    }
}

impl<M> core::fmt::Debug for FieldDef<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldDef")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("db", &self.db)
            .field("option", &self.option)
            .field("kind", &self.kind)
            .finish()
    }
}
