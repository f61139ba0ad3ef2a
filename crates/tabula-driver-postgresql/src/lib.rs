mod value;
pub(crate) use value::Value;

use parking_lot::Mutex;
use postgres::{types::ToSql, Client, Config, NoTls, Row};
use tabula_core::{
    driver::{self, ExecResponse, Executor, Rows},
    stmt, Error, Result,
};
use tabula_sql::Flavor;
use url::Url;

pub struct PostgreSQL {
    /// The PostgreSQL client.
    client: Mutex<Client>,
}

impl PostgreSQL {
    /// Initialize a Tabula PostgreSQL driver using an initialized connection.
    pub fn new(client: Client) -> Self {
        Self {
            client: Mutex::new(client),
        }
    }

    /// Connects to a PostgreSQL database using a connection string.
    ///
    /// See [`postgres::Client::connect`] for more information.
    pub fn connect(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(Error::driver)?;

        if !matches!(url.scheme(), "postgresql" | "postgres") {
            return Err(Error::invalid_argument(format!(
                "connection URL does not have a `postgresql` scheme; url={}",
                url
            )));
        }

        let host = url.host_str().ok_or_else(|| {
            Error::invalid_argument(format!("missing host in connection URL; url={}", url))
        })?;

        if url.path().is_empty() {
            return Err(Error::invalid_argument(format!(
                "no database specified - missing path in connection URL; url={}",
                url
            )));
        }

        let mut config = Config::new();
        config.host(host);
        config.dbname(url.path().trim_start_matches('/'));

        if let Some(port) = url.port() {
            config.port(port);
        }

        if !url.username().is_empty() {
            config.user(url.username());
        }

        if let Some(password) = url.password() {
            config.password(password);
        }

        Self::connect_with_config(&config)
    }

    /// Connects to a PostgreSQL database using a [`postgres::Config`].
    pub fn connect_with_config(config: &Config) -> Result<Self> {
        let client = config.connect(NoTls).map_err(Error::driver)?;
        Ok(Self::new(client))
    }

    pub fn flavor(&self) -> Flavor {
        Flavor::Postgresql
    }

    /// Runs one or more `;`-separated statements without arguments.
    pub fn batch_execute(&self, sql: &str) -> Result<()> {
        self.client.lock().batch_execute(sql).map_err(Error::driver)
    }
}

impl From<Client> for PostgreSQL {
    fn from(client: Client) -> Self {
        Self::new(client)
    }
}

impl core::fmt::Debug for PostgreSQL {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PostgreSQL").finish_non_exhaustive()
    }
}

impl Executor for PostgreSQL {
    fn exec(&self, sql: &str, args: &[stmt::Value]) -> Result<ExecResponse> {
        let params = args.iter().map(Value::from).collect::<Vec<_>>();
        let args = params
            .iter()
            .map(|param| param as &(dyn ToSql + Sync))
            .collect::<Vec<_>>();

        let count = self
            .client
            .lock()
            .execute(sql, &args)
            .map_err(Error::driver)?;

        Ok(ExecResponse::count(count))
    }

    fn query(&self, sql: &str, args: &[stmt::Value]) -> Result<Rows> {
        let params = args.iter().map(Value::from).collect::<Vec<_>>();
        let args = params
            .iter()
            .map(|param| param as &(dyn ToSql + Sync))
            .collect::<Vec<_>>();

        let rows = self
            .client
            .lock()
            .query(sql, &args)
            .map_err(Error::driver)?;

        Ok(Rows::new(rows.into_iter().map(|row| postgres_to_tabula(&row))))
    }
}

/// Converts a PostgreSQL row to a [`driver::Row`].
fn postgres_to_tabula(row: &Row) -> Result<driver::Row> {
    (0..row.len())
        .map(|index| value::load(row, index))
        .collect::<Result<Vec<_>>>()
        .map(driver::Row::new)
}
