#[macro_use]
mod fmt;
use fmt::ToSql;

mod condition;

mod delim;
use delim::Comma;

mod flavor;
pub use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};
use params::Param;

mod raw;

// Statement serializers
mod statement;

use crate::Filter;

use tabula_core::{stmt::Value, Result};

/// Looks up the current value of a bound field by column name.
///
/// Column operands inside AND, OR and NOT render as `column = <value>`
/// through this lookup.
pub trait Resolve {
    fn resolve(&self, column: &str) -> Option<Value>;
}

impl<F> Resolve for F
where
    F: Fn(&str) -> Option<Value>,
{
    fn resolve(&self, column: &str) -> Option<Value> {
        self(column)
    }
}

/// Rendered SQL text with its positional arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compiled {
    pub sql: String,
    pub args: Vec<Value>,
}

/// Renders conditions and statements for one SQL dialect.
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: String,

    /// Arguments, in placeholder order
    params: Params,

    /// Field values for column operands
    resolve: Option<&'a dyn Resolve>,
}

impl Serializer {
    pub fn new(flavor: Flavor) -> Self {
        Self { flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Compiles a filter on its own: the predicate followed by any LIMIT,
    /// without the `WHERE` keyword.
    pub fn compile(&self, filter: &Filter, resolve: &dyn Resolve) -> Result<Compiled> {
        let mut f = self.formatter(Some(resolve), filter.value_num());
        f.filter(filter, false)?;
        Ok(f.finish())
    }

    fn formatter<'a>(&'a self, resolve: Option<&'a dyn Resolve>, capacity: usize) -> Formatter<'a> {
        Formatter {
            serializer: self,
            dst: String::new(),
            params: Params::with_capacity(capacity),
            resolve,
        }
    }
}

impl Formatter<'_> {
    fn flavor(&self) -> Flavor {
        self.serializer.flavor
    }

    fn finish(self) -> Compiled {
        Compiled {
            sql: self.dst,
            args: self.params.into_values(),
        }
    }
}
