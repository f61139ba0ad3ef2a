#[macro_use]
mod macros;

pub mod db;
mod db_test;
mod exec_log;
mod isolation;
mod logging_executor;

pub use db_test::DbTest;
pub use exec_log::{ExecLog, ExecOp, OpKind};
pub use logging_executor::LoggingExecutor;

use tabula::{Executor, Flavor};

use std::sync::Arc;

pub trait Setup: 'static {
    /// Opens a fresh connection to the database under test.
    fn connect(&self) -> tabula::Result<Arc<dyn Executor>>;

    fn flavor(&self) -> Flavor;

    /// Column definition for an auto-increment `id` primary key.
    fn id_column(&self) -> &'static str;

    /// Column type that stores a `Timestamp` field.
    fn timestamp_type(&self) -> &'static str;
}

/// Installs a test-writer `tracing` subscriber so `RUST_LOG=tabula=debug`
/// shows every statement a test runs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
