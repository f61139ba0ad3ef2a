use parking_lot::Mutex;
use tabula::Value;

use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Exec,
    Query,
}

/// One executor call.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecOp {
    pub kind: OpKind,
    pub sql: String,
    pub args: Vec<Value>,
}

/// A handle to the statements a [`LoggingExecutor`](crate::LoggingExecutor)
/// has run.
#[derive(Debug, Clone, Default)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<ExecOp>>>,
}

impl ExecLog {
    pub(crate) fn push(&self, op: ExecOp) {
        self.ops.lock().push(op);
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().is_empty()
    }

    /// Removes and returns the oldest logged operation.
    #[track_caller]
    pub fn pop(&self) -> ExecOp {
        let mut ops = self.ops.lock();
        assert!(!ops.is_empty(), "no operations logged");
        ops.remove(0)
    }

    pub fn last(&self) -> Option<ExecOp> {
        self.ops.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.ops.lock().clear();
    }
}
