use tabula::{ExecResponse, Executor, Result, Rows, Value};

use crate::{ExecLog, ExecOp, OpKind};

use std::sync::Arc;

/// An executor wrapper that logs every statement before forwarding it.
pub struct LoggingExecutor {
    inner: Arc<dyn Executor>,
    log: ExecLog,
}

impl LoggingExecutor {
    pub fn new(inner: Arc<dyn Executor>) -> Self {
        Self {
            inner,
            log: ExecLog::default(),
        }
    }

    /// Get a handle to access the operations log
    pub fn log_handle(&self) -> ExecLog {
        self.log.clone()
    }

    fn record(&self, kind: OpKind, sql: &str, args: &[Value]) {
        self.log.push(ExecOp {
            kind,
            sql: sql.to_string(),
            args: args.to_vec(),
        });
    }
}

impl Executor for LoggingExecutor {
    fn exec(&self, sql: &str, args: &[Value]) -> Result<ExecResponse> {
        self.record(OpKind::Exec, sql, args);
        self.inner.exec(sql, args)
    }

    fn query(&self, sql: &str, args: &[Value]) -> Result<Rows> {
        self.record(OpKind::Query, sql, args);
        self.inner.query(sql, args)
    }
}
