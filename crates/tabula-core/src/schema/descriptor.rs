use super::{Accessor, FieldDef, Kind};
use crate::{stmt::Value, Result};

use std::collections::BTreeMap;

/// Column metadata for one registered field.
///
/// Built once per model type at registration and shared read-only after
/// that.
pub struct FieldDescriptor<M> {
    /// Position of the field in the struct declaration
    pub index: usize,

    /// Database column the field maps to
    pub column: String,

    /// Rust field name
    pub name: &'static str,

    pub kind: Kind,

    /// Parsed `option` attribute
    pub options: BTreeMap<String, String>,

    accessor: Accessor<M>,
}

impl<M> FieldDescriptor<M> {
    /// Builds the descriptor for `def`, or returns `None` if the field is not
    /// mapped to a column.
    ///
    /// A field is mapped when it has a `db` attribute other than `"-"`, or no
    /// `db` attribute and a non-empty `option` attribute (the column is then
    /// the field name). Fields of an unsupported kind are never mapped.
    pub fn from_def(def: &FieldDef<M>) -> Option<Self> {
        let accessor = def.accessor?;
        if !def.kind.is_supported() {
            return None;
        }

        let column = match (def.db.filter(|db| !db.is_empty()), def.option) {
            (Some("-"), _) => return None,
            (Some(db), _) => db.to_string(),
            (None, Some(option)) if !option.is_empty() && option != "-" => def.name.to_string(),
            _ => return None,
        };

        Some(Self {
            index: def.index,
            column,
            name: def.name,
            kind: def.kind,
            options: def.option.map(parse_options).unwrap_or_default(),
            accessor,
        })
    }

    /// `true` when the column is generated by the database.
    pub fn is_auto_increment(&self) -> bool {
        self.option("autoIncrement") == Some("-")
    }

    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Reads the field's current value from `model`.
    pub fn get(&self, model: &M) -> Value {
        (self.accessor.get)(model)
    }

    /// Writes `value` into the field of `model`.
    ///
    /// The value is coerced to the field's kind; `NULL` leaves the field
    /// unchanged.
    pub fn set(&self, model: &mut M, value: Value) -> Result<()> {
        if value.is_null() {
            return Ok(());
        }
        (self.accessor.set)(model, value)
    }
}

/// Parses an `option` attribute: `;`-separated `key=value` pairs, where a
/// bare `key` stores `"-"`.
pub fn parse_options(src: &str) -> BTreeMap<String, String> {
    src.split(';')
        .filter_map(|token| {
            let token = token.trim();
            let (key, value) = match token.split_once('=') {
                Some((key, value)) => (key.trim(), value.trim()),
                None => (token, "-"),
            };
            (!key.is_empty()).then(|| (key.to_string(), value.to_string()))
        })
        .collect()
}

impl<M> Clone for FieldDescriptor<M> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            column: self.column.clone(),
            name: self.name,
            kind: self.kind,
            options: self.options.clone(),
            accessor: self.accessor,
        }
    }
}

impl<M> PartialEq for FieldDescriptor<M> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.column == other.column
            && self.name == other.name
            && self.kind == other.kind
            && self.options == other.options
    }
}

impl<M> core::fmt::Debug for FieldDescriptor<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("index", &self.index)
            .field("column", &self.column)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("options", &self.options)
            .finish()
    }
}
