use super::Builder;
use crate::{Db, Error, Executor, Result};

use tabula_sql::Flavor;

use url::Url;

use std::sync::Arc;

impl Db {
    /// Connects a bundled driver with default settings. See
    /// [`Builder::connect`].
    pub fn connect(url: &str) -> Result<Db> {
        Db::builder().connect(url)
    }
}

impl Builder {
    /// Connects one of the bundled drivers, chosen by the URL scheme, and
    /// builds the database. The driver's dialect is used unless one was set
    /// explicitly.
    pub fn connect(&mut self, url: &str) -> Result<Db> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_argument(format!("invalid database url `{url}`: {err}")))?;

        let (flavor, executor) = match parsed.scheme() {
            "postgres" | "postgresql" => connect_postgresql(url)?,
            "sqlite" => connect_sqlite(url)?,
            "mysql" => {
                return Err(Error::invalid_argument(
                    "no bundled MySQL driver; pass an executor to `build`",
                ))
            }
            scheme => {
                return Err(Error::invalid_argument(format!(
                    "unsupported database; scheme={scheme}; url={url}"
                )))
            }
        };

        let flavor = self.resolve_flavor(Some(flavor))?;
        self.build_with(flavor, executor)
    }
}

#[cfg(feature = "postgresql")]
fn connect_postgresql(url: &str) -> Result<(Flavor, Arc<dyn Executor>)> {
    let driver = tabula_driver_postgresql::PostgreSQL::connect(url)?;
    Ok((driver.flavor(), Arc::new(driver)))
}

#[cfg(not(feature = "postgresql"))]
fn connect_postgresql(_url: &str) -> Result<(Flavor, Arc<dyn Executor>)> {
    Err(Error::invalid_argument("`postgresql` feature not enabled"))
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<(Flavor, Arc<dyn Executor>)> {
    let driver = tabula_driver_sqlite::Sqlite::new(url)?;
    Ok((driver.flavor(), Arc::new(driver)))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<(Flavor, Arc<dyn Executor>)> {
    Err(Error::invalid_argument("`sqlite` feature not enabled"))
}
