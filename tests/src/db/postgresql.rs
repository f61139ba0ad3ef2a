use tabula::{Executor, Flavor};
use tabula_driver_postgresql::PostgreSQL;

use crate::Setup;

use std::sync::Arc;

pub struct SetupPostgreSQL {
    url: String,
}

impl SetupPostgreSQL {
    pub fn new() -> Self {
        let url = std::env::var("TABULA_TEST_POSTGRES_URL")
            .unwrap_or_else(|_| "postgresql://localhost:5432/tabula_test".to_string());

        Self { url }
    }
}

impl Default for SetupPostgreSQL {
    fn default() -> Self {
        Self::new()
    }
}

impl Setup for SetupPostgreSQL {
    fn connect(&self) -> tabula::Result<Arc<dyn Executor>> {
        Ok(Arc::new(PostgreSQL::connect(&self.url)?))
    }

    fn flavor(&self) -> Flavor {
        Flavor::Postgresql
    }

    fn id_column(&self) -> &'static str {
        "id BIGSERIAL PRIMARY KEY"
    }

    fn timestamp_type(&self) -> &'static str {
        "TIMESTAMPTZ"
    }
}
