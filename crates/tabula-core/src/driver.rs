mod response;
pub use response::{ExecResponse, Row, Rows};

use crate::{stmt::Value, Result};

/// The database connection the engine runs compiled statements against.
///
/// Every call blocks until the database responds. Implementations map their
/// native errors to [`Error::driver`](crate::Error::driver).
pub trait Executor: Send + Sync {
    /// Runs a statement that returns no rows.
    fn exec(&self, sql: &str, args: &[Value]) -> Result<ExecResponse>;

    /// Runs a query and returns its rows.
    fn query(&self, sql: &str, args: &[Value]) -> Result<Rows>;

    /// Runs a query expected to return at most one row.
    fn query_row(&self, sql: &str, args: &[Value]) -> Result<Option<Row>> {
        self.query(sql, args)?.next().transpose()
    }
}

impl<T: Executor + ?Sized> Executor for std::sync::Arc<T> {
    fn exec(&self, sql: &str, args: &[Value]) -> Result<ExecResponse> {
        (**self).exec(sql, args)
    }

    fn query(&self, sql: &str, args: &[Value]) -> Result<Rows> {
        (**self).query(sql, args)
    }

    fn query_row(&self, sql: &str, args: &[Value]) -> Result<Option<Row>> {
        (**self).query_row(sql, args)
    }
}
