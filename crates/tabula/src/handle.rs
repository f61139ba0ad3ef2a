use crate::{Db, Error, FieldDescriptor, Model, ModelSchema, Result, Value};

use tabula_core::stmt::{coerce, Primitive};
use tabula_sql::{Compiled, Filter};

use std::sync::Arc;

/// A model instance bound to a [`Db`], ready for CRUD operations.
///
/// Created by [`Db::load`]. When binding failed, every operation returns the
/// captured error without running a statement.
pub struct Handle<'a, M> {
    db: Db,
    schema: Result<Arc<ModelSchema<M>>>,
    model: &'a mut M,
}

/// One registered field of a bound instance.
pub struct FieldBinding<'a, M> {
    descriptor: &'a FieldDescriptor<M>,
    model: &'a M,
}

impl<M> FieldBinding<'_, M> {
    pub fn descriptor(&self) -> &FieldDescriptor<M> {
        self.descriptor
    }

    pub fn column(&self) -> &str {
        &self.descriptor.column
    }

    /// The field's current value.
    pub fn value(&self) -> Value {
        self.descriptor.get(self.model)
    }
}

impl<M> core::fmt::Debug for FieldBinding<'_, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldBinding")
            .field("column", &self.descriptor.column)
            .field("value", &self.value())
            .finish()
    }
}

impl<'a, M: Model> Handle<'a, M> {
    pub(crate) fn new(db: Db, schema: Result<Arc<ModelSchema<M>>>, model: &'a mut M) -> Self {
        if let Ok(schema) = &schema {
            tracing::trace!(
                table = %schema.table,
                fields = schema.descriptors.len(),
                "bound model"
            );
        }

        Self { db, schema, model }
    }

    /// The error captured at binding time, if any.
    pub fn error(&self) -> Option<&Error> {
        self.schema.as_ref().err()
    }

    pub fn schema(&self) -> Result<&ModelSchema<M>> {
        match &self.schema {
            Ok(schema) => Ok(&**schema),
            Err(err) => Err(err.clone()),
        }
    }

    /// One binding per registered field, in declaration order.
    pub fn bindings(&self) -> Result<Vec<FieldBinding<'_, M>>> {
        let schema = self.schema()?;
        Ok(schema
            .descriptors
            .iter()
            .map(|descriptor| FieldBinding {
                descriptor,
                model: &*self.model,
            })
            .collect())
    }

    /// Inserts the instance. Auto-increment fields are left to the database,
    /// and the generated id is written back into the first of them.
    pub fn create(&mut self) -> Result<()> {
        let schema = self.schema_arc()?;
        let auto_increment = schema.auto_increment();

        let values: Vec<(&str, Value)> = schema
            .descriptors
            .iter()
            .filter(|descriptor| !descriptor.is_auto_increment())
            .map(|descriptor| (descriptor.column.as_str(), descriptor.get(self.model)))
            .collect();

        // Postgres does not report a last-insert id; ask for the column back.
        let returning = auto_increment
            .filter(|_| self.db.flavor().is_postgresql())
            .map(|descriptor| descriptor.column.as_str());

        let stmt = self
            .db
            .serializer()
            .insert(&schema.table, &values, returning);
        log_statement(&stmt);

        let id = if returning.is_some() {
            self.db
                .executor()
                .query_row(&stmt.sql, &stmt.args)?
                .map(|mut row| row.take(0))
        } else {
            self.db
                .executor()
                .exec(&stmt.sql, &stmt.args)?
                .last_insert_id
                .map(Value::I64)
        };

        if let (Some(descriptor), Some(id)) = (auto_increment, id) {
            descriptor.set(self.model, id)?;
        }

        Ok(())
    }

    /// Loads the first matching row into the instance.
    ///
    /// Returns a [`record_not_found`](Error::is_record_not_found) error when
    /// nothing matches. The instance is only written once every column has
    /// been converted, so a failed `find` leaves it as it was.
    pub fn find(&mut self, filter: impl Into<Filter>) -> Result<()> {
        let schema = self.schema_arc()?;
        let stmt = self.select(&schema, &filter.into())?;
        log_statement(&stmt);

        let Some(mut row) = self.db.executor().query_row(&stmt.sql, &stmt.args)? else {
            return Err(Error::record_not_found(format!("table={}", schema.table)));
        };

        let values = schema
            .descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| coerce(row.take(index), descriptor.kind))
            .collect::<Result<Vec<_>>>()?;

        for (descriptor, value) in schema.descriptors.iter().zip(values) {
            if let Some(value) = value {
                descriptor.set(self.model, value)?;
            }
        }

        Ok(())
    }

    /// Loads every matching row into a fresh `M::default()` each.
    pub fn find_all(&self, filter: impl Into<Filter>) -> Result<Vec<M>> {
        let schema = self.schema_arc()?;
        let stmt = self.select(&schema, &filter.into())?;
        log_statement(&stmt);

        let mut ret = vec![];

        for row in self.db.executor().query(&stmt.sql, &stmt.args)? {
            let mut row = row?;
            let mut model = M::default();

            for (index, descriptor) in schema.descriptors.iter().enumerate() {
                descriptor.set(&mut model, row.take(index))?;
            }

            ret.push(model);
        }

        Ok(ret)
    }

    /// Writes the instance's non-zero fields to matching rows and returns the
    /// number of rows affected.
    ///
    /// When every field is zero, nothing is executed and `0` is returned.
    pub fn update(&mut self, filter: impl Into<Filter>) -> Result<u64> {
        self.write(filter.into(), true)
    }

    /// Writes every field of the instance, zero or not, to matching rows.
    pub fn save(&mut self, filter: impl Into<Filter>) -> Result<u64> {
        self.write(filter.into(), false)
    }

    /// Deletes matching rows and returns how many were removed.
    pub fn delete(&mut self, filter: impl Into<Filter>) -> Result<u64> {
        let schema = self.schema_arc()?;
        let filter = filter.into();
        let model: &M = self.model;
        let resolve = |column: &str| schema.column(column).map(|d| d.get(model));

        let stmt = self.db.serializer().delete(&schema.table, &filter, &resolve)?;
        log_statement(&stmt);

        Ok(self.db.executor().exec(&stmt.sql, &stmt.args)?.rows_affected)
    }

    pub fn count(&self, filter: impl Into<Filter>) -> Result<i64> {
        let schema = self.schema_arc()?;
        let filter = filter.into();
        let model: &M = self.model;
        let resolve = |column: &str| schema.column(column).map(|d| d.get(model));

        let stmt = self.db.serializer().count(&schema.table, &filter, &resolve)?;
        log_statement(&stmt);

        match self.db.executor().query_row(&stmt.sql, &stmt.args)? {
            Some(mut row) => i64::load(row.take(0)),
            None => Ok(0),
        }
    }

    fn write(&mut self, filter: Filter, sparse: bool) -> Result<u64> {
        let schema = self.schema_arc()?;
        let model: &M = self.model;

        let assignments: Vec<(&str, Value)> = schema
            .descriptors
            .iter()
            .filter(|descriptor| !descriptor.is_auto_increment())
            .map(|descriptor| (descriptor.column.as_str(), descriptor.get(model)))
            .filter(|(_, value)| !sparse || !value.is_zero())
            .collect();

        if assignments.is_empty() {
            tracing::trace!(table = %schema.table, "no fields to write; skipping update");
            return Ok(0);
        }

        let resolve = |column: &str| schema.column(column).map(|d| d.get(model));
        let stmt = self
            .db
            .serializer()
            .update(&schema.table, &assignments, &filter, &resolve)?;
        log_statement(&stmt);

        Ok(self.db.executor().exec(&stmt.sql, &stmt.args)?.rows_affected)
    }

    fn select(&self, schema: &ModelSchema<M>, filter: &Filter) -> Result<Compiled> {
        let model: &M = self.model;
        let resolve = |column: &str| schema.column(column).map(|d| d.get(model));
        let columns: Vec<&str> = schema.columns().collect();

        self.db
            .serializer()
            .select(&schema.table, &columns, filter, &resolve)
    }

    fn schema_arc(&self) -> Result<Arc<ModelSchema<M>>> {
        self.schema.clone()
    }
}

fn log_statement(stmt: &Compiled) {
    tracing::debug!(sql = %stmt.sql, args = stmt.args.len(), "executing statement");
}

impl<M> core::fmt::Debug for Handle<'_, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("Handle");
        match &self.schema {
            Ok(schema) => s.field("table", &schema.table),
            Err(err) => s.field("error", err),
        };
        s.finish()
    }
}
