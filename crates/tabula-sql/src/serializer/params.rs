use super::{Flavor, Formatter, ToSql};

use tabula_core::stmt::Value;

/// Statement arguments, in the order their placeholders appear.
#[derive(Debug, Default)]
pub struct Params {
    values: Vec<Value>,
}

/// 1-based position of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: Value) -> Placeholder {
        self.values.push(value);
        Placeholder(self.values.len())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match f.flavor() {
            Flavor::Mysql | Flavor::Sqlite => f.dst.push('?'),
            Flavor::Postgresql => {
                f.dst.push('$');
                f.dst.push_str(&self.0.to_string());
            }
        }
    }
}

/// Binds a value and writes its placeholder.
pub(super) struct Param<'a>(pub(super) &'a Value);

impl ToSql for Param<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let placeholder = f.params.push(self.0.clone());
        placeholder.to_sql(f);
    }
}
