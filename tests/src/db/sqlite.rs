use tabula::{Executor, Flavor};
use tabula_driver_sqlite::Sqlite;

use crate::Setup;

use std::sync::Arc;

/// Every test gets its own in-memory database.
pub struct SetupSqlite;

impl SetupSqlite {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SetupSqlite {
    fn default() -> Self {
        Self::new()
    }
}

impl Setup for SetupSqlite {
    fn connect(&self) -> tabula::Result<Arc<dyn Executor>> {
        Ok(Arc::new(Sqlite::in_memory()?))
    }

    fn flavor(&self) -> Flavor {
        Flavor::Sqlite
    }

    fn id_column(&self) -> &'static str {
        "id INTEGER PRIMARY KEY AUTOINCREMENT"
    }

    fn timestamp_type(&self) -> &'static str {
        "TEXT"
    }
}
