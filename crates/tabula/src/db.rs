mod builder;
pub use builder::Builder;

mod connect;

use crate::{Executor, Handle, Model, Registry, Result};

use tabula_sql::{Flavor, Serializer};

use std::sync::Arc;

/// Shared state between all `Db` clones.
struct Shared {
    executor: Arc<dyn Executor>,
    serializer: Serializer,
    registry: Registry,

    /// Prepended to every registered table name
    table_name_prefix: String,
}

/// A database handle: an executor, the dialect its statements are rendered
/// for, and the models registered against it.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// A database with no registered models and no table name prefix.
    pub fn new(flavor: Flavor, executor: impl Executor + 'static) -> Db {
        Db::from_parts(flavor, Arc::new(executor), String::new())
    }

    fn from_parts(flavor: Flavor, executor: Arc<dyn Executor>, table_name_prefix: String) -> Db {
        Db {
            shared: Arc::new(Shared {
                executor,
                serializer: Serializer::new(flavor),
                registry: Registry::new(),
                table_name_prefix,
            }),
        }
    }

    /// Registers `M` as stored in `table`, after the table name prefix.
    pub fn register<M: Model>(&self, table: &str) -> Result<()> {
        // An empty name stays empty so the registry rejects it
        let table = if table.is_empty() {
            String::new()
        } else {
            format!("{}{}", self.shared.table_name_prefix, table)
        };
        self.shared.registry.register::<M>(table)?;
        Ok(())
    }

    /// Binds `model` for one or more operations.
    ///
    /// Binding never fails here: if `M` is not registered, the returned handle
    /// carries the error and every operation on it returns that error.
    pub fn load<'a, M: Model>(&self, model: &'a mut M) -> Handle<'a, M> {
        Handle::new(self.clone(), self.shared.registry.get::<M>(), model)
    }

    pub fn flavor(&self) -> Flavor {
        self.shared.serializer.flavor()
    }

    pub fn registry(&self) -> &Registry {
        &self.shared.registry
    }

    pub(crate) fn serializer(&self) -> &Serializer {
        &self.shared.serializer
    }

    pub(crate) fn executor(&self) -> &dyn Executor {
        &*self.shared.executor
    }
}

impl core::fmt::Debug for Db {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Db")
            .field("flavor", &self.flavor())
            .field("registry", &self.shared.registry)
            .finish()
    }
}
