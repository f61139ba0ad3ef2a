use crate::{isolation::TestIsolation, ExecLog, LoggingExecutor, Setup};

use tabula::{db::Builder, Db, Executor};

use std::sync::Arc;

/// Per-test database state: a fresh connection, a unique table prefix and the
/// log of every statement the test ran through [`Db`].
pub struct DbTest {
    setup: Box<dyn Setup>,
    isolation: TestIsolation,
    executor: Option<Arc<dyn Executor>>,
    log: ExecLog,
    tables: Vec<String>,
}

impl DbTest {
    pub fn new(setup: impl Setup) -> Self {
        crate::init_tracing();

        Self {
            setup: Box::new(setup),
            isolation: TestIsolation::new(),
            executor: None,
            log: ExecLog::default(),
            tables: vec![],
        }
    }

    /// Builds a database over a logging executor, with this test's table
    /// prefix applied.
    pub fn try_setup_db(&mut self, builder: &mut Builder) -> tabula::Result<Db> {
        let executor = self.setup.connect()?;
        let logging = LoggingExecutor::new(executor.clone());

        self.log = logging.log_handle();
        self.executor = Some(executor);

        builder
            .flavor(self.setup.flavor())
            .table_name_prefix(&self.isolation.table_prefix())
            .build(logging)
    }

    #[track_caller]
    pub fn setup_db(&mut self, mut builder: Builder) -> Db {
        self.try_setup_db(&mut builder).unwrap()
    }

    /// The prefixed name `Db` uses for `table`.
    pub fn table(&self, table: &str) -> String {
        format!("{}{}", self.isolation.table_prefix(), table)
    }

    /// Creates `table` directly on the connection, bypassing the log.
    ///
    /// `{id}` and `{timestamp}` in `columns` expand to the dialect's
    /// auto-increment key and timestamp type.
    #[track_caller]
    pub fn create_table(&mut self, table: &str, columns: &str) {
        let table = self.table(table);
        let columns = columns
            .replace("{id}", self.setup.id_column())
            .replace("{timestamp}", self.setup.timestamp_type());

        self.raw_exec(&format!("CREATE TABLE \"{table}\" ({columns})"));
        self.tables.push(table);
    }

    /// Runs a statement directly on the connection, bypassing the log.
    #[track_caller]
    pub fn raw_exec(&self, sql: &str) {
        let executor = self
            .executor
            .as_ref()
            .expect("call `setup_db` before running raw statements");
        executor.exec(sql, &[]).unwrap();
    }

    pub fn log(&self) -> &ExecLog {
        &self.log
    }

    pub fn flavor(&self) -> tabula::Flavor {
        self.setup.flavor()
    }
}

impl Drop for DbTest {
    fn drop(&mut self) {
        let Some(executor) = &self.executor else {
            return;
        };

        for table in &self.tables {
            let _ = executor.exec(&format!("DROP TABLE IF EXISTS \"{table}\""), &[]);
        }
    }
}
