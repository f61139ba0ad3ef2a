use jiff::Timestamp;
use postgres::{
    types::{accepts, private::BytesMut, to_sql_checked, FromSql, IsNull, ToSql, Type},
    Row,
};
use tabula_core::{err, stmt::Value as CoreValue, Error, Result};

type BoxError = Box<dyn std::error::Error + Sync + Send>;

/// Microseconds between the Unix epoch and the PostgreSQL epoch, 2000-01-01.
const POSTGRES_EPOCH_MICROS: i64 = 946_684_800_000_000;

/// Binds a [`CoreValue`] as a PostgreSQL argument, widening or narrowing
/// integers to the parameter type the server inferred.
#[derive(Debug)]
pub struct Value<'a>(&'a CoreValue);

impl<'a> From<&'a CoreValue> for Value<'a> {
    fn from(value: &'a CoreValue) -> Self {
        Self(value)
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> std::result::Result<IsNull, BoxError>
    where
        Self: Sized,
    {
        match self.0 {
            CoreValue::Bool(value) => match *ty {
                Type::BOOL => value.to_sql(ty, out),
                Type::INT2 => i16::from(*value).to_sql(ty, out),
                Type::INT4 => i32::from(*value).to_sql(ty, out),
                Type::INT8 => i64::from(*value).to_sql(ty, out),
                Type::TEXT | Type::VARCHAR => value.to_string().to_sql(ty, out),
                _ => Err(anyhow::anyhow!("cannot bind {value} as {ty}").into()),
            },
            CoreValue::String(value) => value.to_sql(ty, out),
            CoreValue::Bytes(value) => value.to_sql(ty, out),
            CoreValue::F32(value) => match *ty {
                Type::FLOAT8 => f64::from(*value).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            CoreValue::F64(value) => match *ty {
                Type::FLOAT4 => (*value as f32).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            CoreValue::Timestamp(value) => match *ty {
                Type::TEXT | Type::VARCHAR => value.to_string().to_sql(ty, out),
                _ => (value.as_microsecond() - POSTGRES_EPOCH_MICROS).to_sql(&Type::INT8, out),
            },
            CoreValue::List(_) => Err(anyhow::anyhow!(
                "lists must be expanded before binding; ty={ty}"
            )
            .into()),
            CoreValue::Null => Ok(IsNull::Yes),
            value => {
                let Some(wide) = wide_int(value) else {
                    return Err(anyhow::anyhow!("cannot bind {value:?} as {ty}").into());
                };

                match *ty {
                    Type::INT2 => i16::try_from(wide)?.to_sql(ty, out),
                    Type::INT4 => i32::try_from(wide)?.to_sql(ty, out),
                    Type::INT8 => i64::try_from(wide)?.to_sql(ty, out),
                    Type::TEXT | Type::VARCHAR => wide.to_string().to_sql(ty, out),
                    _ => Err(anyhow::anyhow!("cannot bind {value:?} as {ty}").into()),
                }
            }
        }
    }

    accepts!(
        BOOL,
        INT2,
        INT4,
        INT8,
        FLOAT4,
        FLOAT8,
        TEXT,
        VARCHAR,
        BPCHAR,
        BYTEA,
        TIMESTAMP,
        TIMESTAMPTZ
    );
    to_sql_checked!();
}

fn wide_int(value: &CoreValue) -> Option<i128> {
    match *value {
        CoreValue::I8(v) => Some(v.into()),
        CoreValue::I16(v) => Some(v.into()),
        CoreValue::I32(v) => Some(v.into()),
        CoreValue::I64(v) => Some(v.into()),
        CoreValue::U8(v) => Some(v.into()),
        CoreValue::U16(v) => Some(v.into()),
        CoreValue::U32(v) => Some(v.into()),
        CoreValue::U64(v) => Some(v.into()),
        _ => None,
    }
}

/// Reads a `TIMESTAMP` or `TIMESTAMPTZ` column.
struct PgTimestamp(Timestamp);

impl<'a> FromSql<'a> for PgTimestamp {
    fn from_sql(ty: &Type, raw: &'a [u8]) -> std::result::Result<Self, BoxError> {
        let micros = i64::from_sql(ty, raw)?;
        // `infinity` and `-infinity` arrive as i64::MAX and i64::MIN.
        micros
            .checked_add(POSTGRES_EPOCH_MICROS)
            .and_then(|unix| Timestamp::from_microsecond(unix).ok())
            .map(Self)
            .ok_or_else(|| err!("timestamp out of range; micros={micros}").into())
    }

    accepts!(TIMESTAMP, TIMESTAMPTZ);
}

/// Converts the PostgreSQL value at `index` to a core value.
///
/// The inner representation of the PostgreSQL type enum is not accessible,
/// so each type is matched by hand.
pub(crate) fn load(row: &Row, index: usize) -> Result<CoreValue> {
    let ty = row.columns()[index].type_();

    let value = match *ty {
        Type::BOOL => get::<bool>(row, index)?.map(CoreValue::Bool),
        Type::INT2 => get::<i16>(row, index)?.map(CoreValue::I16),
        Type::INT4 => get::<i32>(row, index)?.map(CoreValue::I32),
        Type::INT8 => get::<i64>(row, index)?.map(CoreValue::I64),
        Type::FLOAT4 => get::<f32>(row, index)?.map(CoreValue::F32),
        Type::FLOAT8 => get::<f64>(row, index)?.map(CoreValue::F64),
        Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME => {
            get::<String>(row, index)?.map(CoreValue::String)
        }
        Type::BYTEA => get::<Vec<u8>>(row, index)?.map(CoreValue::Bytes),
        Type::TIMESTAMP | Type::TIMESTAMPTZ => {
            get::<PgTimestamp>(row, index)?.map(|ts| CoreValue::Timestamp(ts.0))
        }
        _ => {
            return Err(Error::from(anyhow::anyhow!(
                "unsupported PostgreSQL column type; ty={ty}; column={}",
                row.columns()[index].name()
            )))
        }
    };

    Ok(value.unwrap_or(CoreValue::Null))
}

fn get<'a, T: FromSql<'a>>(row: &'a Row, index: usize) -> Result<Option<T>> {
    row.try_get::<usize, Option<T>>(index).map_err(Error::driver)
}
