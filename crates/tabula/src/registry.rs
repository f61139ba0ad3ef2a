use crate::{Error, Model, ModelSchema, Result};

use parking_lot::RwLock;

use std::{
    any::{type_name, Any, TypeId},
    collections::HashMap,
    sync::Arc,
};

/// Maps model types to their registered schema.
///
/// Lookups share a read lock; registration takes the write lock. The lock is
/// never held while a statement runs.
#[derive(Default)]
pub struct Registry {
    models: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `M` as stored in `table`, replacing any earlier entry.
    pub fn register<M: Model>(&self, table: impl Into<String>) -> Result<Arc<ModelSchema<M>>> {
        let table = table.into();
        if table.trim().is_empty() {
            return Err(Error::invalid_argument(format!(
                "table name for `{}` must not be empty",
                type_name::<M>()
            )));
        }

        let schema = Arc::new(ModelSchema::from_fields(table, &M::fields()));

        tracing::trace!(
            model = type_name::<M>(),
            table = %schema.table,
            columns = schema.descriptors.len(),
            "registered model"
        );

        self.models
            .write()
            .insert(TypeId::of::<M>(), schema.clone());

        Ok(schema)
    }

    /// The schema of `M`, or `NotRegistered`.
    pub fn get<M: Model>(&self) -> Result<Arc<ModelSchema<M>>> {
        let entry = self
            .models
            .read()
            .get(&TypeId::of::<M>())
            .cloned()
            .ok_or_else(|| Error::not_registered(type_name::<M>()))?;

        entry
            .downcast::<ModelSchema<M>>()
            .map_err(|_| Error::not_registered(type_name::<M>()))
    }

    pub fn is_registered<M: Model>(&self) -> bool {
        self.models.read().contains_key(&TypeId::of::<M>())
    }

    pub fn len(&self) -> usize {
        self.models.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.read().is_empty()
    }
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("models", &self.len())
            .finish()
    }
}
