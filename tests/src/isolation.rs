use std::sync::atomic::{AtomicU32, Ordering};

/// Generates unique table prefixes for test isolation.
///
/// Each test gets a prefix in the format `test_{process_id}_{test_counter}_`,
/// so tests sharing one database never see each other's tables.
#[derive(Clone)]
pub(crate) struct TestIsolation {
    process_id: u32,
    test_counter: u32,
}

// Global counter shared across all tests in this process
static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

impl TestIsolation {
    pub(crate) fn new() -> Self {
        Self {
            process_id: std::process::id(),
            test_counter: TEST_COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub(crate) fn table_prefix(&self) -> String {
        format!("test_{}_{}_", self.process_id, self.test_counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_unique() {
        let a = TestIsolation::new();
        let b = TestIsolation::new();

        assert_ne!(a.table_prefix(), b.table_prefix());
        assert!(a.table_prefix().starts_with("test_"));
    }
}
