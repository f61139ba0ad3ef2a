use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};
use tabula_core::stmt::Value as CoreValue;

/// Binds a [`CoreValue`] as a SQLite argument.
#[derive(Debug)]
pub struct Value<'a>(&'a CoreValue);

impl<'a> From<&'a CoreValue> for Value<'a> {
    fn from(value: &'a CoreValue) -> Self {
        Self(value)
    }
}

impl Value<'_> {
    /// Converts a SQLite column value to a core value. Narrowing to the
    /// field's type happens later, in coercion.
    pub fn load(value: ValueRef<'_>) -> CoreValue {
        match value {
            ValueRef::Null => CoreValue::Null,
            ValueRef::Integer(value) => CoreValue::I64(value),
            ValueRef::Real(value) => CoreValue::F64(value),
            ValueRef::Text(value) => match std::str::from_utf8(value) {
                Ok(value) => CoreValue::String(value.to_string()),
                Err(_) => CoreValue::Bytes(value.to_vec()),
            },
            ValueRef::Blob(value) => CoreValue::Bytes(value.to_vec()),
        }
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use CoreValue as Value;

        match self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I8(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I16(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::U8(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::U16(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::U32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::U64(v) => match i64::try_from(*v) {
                Ok(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(v))),
                Err(err) => Err(rusqlite::Error::ToSqlConversionFailure(Box::new(err))),
            },
            Value::F32(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v as f64))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::Timestamp(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_string()))),
            Value::List(_) => Err(rusqlite::Error::ToSqlConversionFailure(
                anyhow::anyhow!("SQLite cannot bind a list as a single argument").into(),
            )),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
