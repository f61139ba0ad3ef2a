use super::Db;
use crate::{Error, Executor, Model, Result};

use tabula_sql::Flavor;

use std::sync::Arc;

type Register = fn(&Db, &str) -> Result<()>;

#[derive(Default)]
pub struct Builder {
    /// Dialect set with [`Builder::flavor`]
    flavor: Option<Flavor>,

    /// Dialect name set with [`Builder::dialect`], parsed at build time
    dialect: Option<String>,

    /// Models to register, with their unprefixed table names
    models: Vec<(String, Register)>,

    table_name_prefix: String,
}

impl Builder {
    /// Selects the dialect by name: `mysql`, `postgresql` (or `postgres`,
    /// `pg`, `pgsql`), `sqlite` (or `sqlite3`).
    pub fn dialect(&mut self, name: &str) -> &mut Self {
        self.dialect = Some(name.to_string());
        self.flavor = None;
        self
    }

    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.flavor = Some(flavor);
        self.dialect = None;
        self
    }

    pub fn register<M: Model>(&mut self, table: &str) -> &mut Self {
        let register: Register = register::<M>;
        self.models.push((table.to_string(), register));
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = prefix.to_string();
        self
    }

    pub fn build(&mut self, executor: impl Executor + 'static) -> Result<Db> {
        let flavor = self.resolve_flavor(None)?;
        self.build_with(flavor, Arc::new(executor))
    }

    pub(super) fn build_with(&mut self, flavor: Flavor, executor: Arc<dyn Executor>) -> Result<Db> {
        let db = Db::from_parts(flavor, executor, self.table_name_prefix.clone());

        for (table, register) in &self.models {
            register(&db, table)?;
        }

        Ok(db)
    }

    /// An unset dialect falls back to `default`, the flavor of a connected
    /// driver.
    pub(super) fn resolve_flavor(&self, default: Option<Flavor>) -> Result<Flavor> {
        match (&self.dialect, self.flavor, default) {
            (Some(name), _, _) => name.parse(),
            (None, Some(flavor), _) | (None, None, Some(flavor)) => Ok(flavor),
            (None, None, None) => Err(Error::invalid_argument(
                "no SQL dialect configured; call `dialect` or `flavor` on the builder",
            )),
        }
    }
}

fn register<M: Model>(db: &Db, table: &str) -> Result<()> {
    db.register::<M>(table)
}
