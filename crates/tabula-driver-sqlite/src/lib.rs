mod value;
pub(crate) use value::Value;

use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::Path;
use tabula_core::{
    driver::{ExecResponse, Executor, Row, Rows},
    stmt, Error, Result,
};
use tabula_sql::Flavor;
use url::Url;

/// An executor backed by a single SQLite connection.
#[derive(Debug)]
pub struct Sqlite {
    connection: Mutex<Connection>,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_argument(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(url.path())
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(Error::driver)?;
        Ok(Self::from(connection))
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).map_err(Error::driver)?;
        Ok(Self::from(connection))
    }

    pub fn flavor(&self) -> Flavor {
        Flavor::Sqlite
    }

    /// Runs one or more `;`-separated statements without arguments.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.connection
            .lock()
            .execute_batch(sql)
            .map_err(Error::driver)
    }
}

impl From<Connection> for Sqlite {
    fn from(connection: Connection) -> Self {
        Self {
            connection: Mutex::new(connection),
        }
    }
}

impl Executor for Sqlite {
    fn exec(&self, sql: &str, args: &[stmt::Value]) -> Result<ExecResponse> {
        let connection = self.connection.lock();
        let mut stmt = connection.prepare_cached(sql).map_err(Error::driver)?;

        let count = stmt
            .execute(rusqlite::params_from_iter(args.iter().map(Value::from)))
            .map_err(Error::driver)?;

        let response = ExecResponse::count(count as u64);

        if is_insert(sql) {
            Ok(response.with_last_insert_id(connection.last_insert_rowid()))
        } else {
            Ok(response)
        }
    }

    fn query(&self, sql: &str, args: &[stmt::Value]) -> Result<Rows> {
        let connection = self.connection.lock();
        let mut stmt = connection.prepare_cached(sql).map_err(Error::driver)?;
        let width = stmt.column_count();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(args.iter().map(Value::from)))
            .map_err(Error::driver)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::driver)? {
            let mut items = Vec::with_capacity(width);

            for index in 0..width {
                let value = row.get_ref(index).map_err(Error::driver)?;
                items.push(Value::load(value));
            }

            ret.push(Row::new(items));
        }

        Ok(Rows::from(ret))
    }
}

fn is_insert(sql: &str) -> bool {
    sql.trim_start()
        .get(..6)
        .is_some_and(|keyword| keyword.eq_ignore_ascii_case("insert"))
}
