use crate::{stmt::Value, Result};

/// Outcome of [`Executor::exec`](super::Executor::exec).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExecResponse {
    /// Number of rows impacted by the statement
    pub rows_affected: u64,

    /// Id generated by the last insert, if the database reports one
    pub last_insert_id: Option<i64>,
}

impl ExecResponse {
    pub fn count(rows_affected: u64) -> Self {
        Self {
            rows_affected,
            last_insert_id: None,
        }
    }

    pub fn with_last_insert_id(mut self, id: i64) -> Self {
        self.last_insert_id = Some(id);
        self
    }
}

/// Result rows of a query, yielded one at a time.
pub struct Rows {
    inner: Box<dyn Iterator<Item = Result<Row>> + Send>,
}

impl Rows {
    pub fn new(iter: impl Iterator<Item = Result<Row>> + Send + 'static) -> Self {
        Self {
            inner: Box::new(iter),
        }
    }

    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }
}

impl From<Vec<Row>> for Rows {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows.into_iter().map(Ok))
    }
}

impl Iterator for Rows {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl core::fmt::Debug for Rows {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Rows { .. }")
    }
}

/// One scanned row, columns in select-list order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Moves the value at `index` out of the row, leaving `Null` behind.
    pub fn take(&mut self, index: usize) -> Value {
        self.values
            .get_mut(index)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<Value> for Row {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
