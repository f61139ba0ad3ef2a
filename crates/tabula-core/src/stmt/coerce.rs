use super::Value;
use crate::{schema::Kind, Error, Result};

use jiff::{civil, tz::TimeZone, Timestamp};

/// Converts a scanned driver value into the representation of `kind`.
///
/// Returns `Ok(None)` for SQL `NULL`; the caller leaves the target field as
/// it is. On success the returned value is always the [`Value`] variant that
/// the field's [`Primitive`](super::Primitive) impl loads from (`isize` and
/// `usize` use `I64` and `U64`).
pub fn coerce(value: Value, kind: Kind) -> Result<Option<Value>> {
    if value.is_null() {
        return Ok(None);
    }

    let ret = match kind {
        Kind::String => to_string(value)?,
        Kind::Bytes => to_bytes(value)?,
        Kind::Bool => to_bool(value)?,
        Kind::I8 => Value::I8(to_int(value, kind)?),
        Kind::I16 => Value::I16(to_int(value, kind)?),
        Kind::I32 => Value::I32(to_int(value, kind)?),
        Kind::I64 | Kind::Isize => {
            let v: i64 = to_int(value, kind)?;
            if kind == Kind::Isize && isize::try_from(v).is_err() {
                return Err(Error::type_conversion(Value::I64(v), kind.type_name()));
            }
            Value::I64(v)
        }
        Kind::U8 => Value::U8(to_int(value, kind)?),
        Kind::U16 => Value::U16(to_int(value, kind)?),
        Kind::U32 => Value::U32(to_int(value, kind)?),
        Kind::U64 | Kind::Usize => {
            let v: u64 = to_int(value, kind)?;
            if kind == Kind::Usize && usize::try_from(v).is_err() {
                return Err(Error::type_conversion(Value::U64(v), kind.type_name()));
            }
            Value::U64(v)
        }
        Kind::F32 => Value::F32(to_f64(value, kind)? as f32),
        Kind::F64 => Value::F64(to_f64(value, kind)?),
        Kind::Timestamp => Value::Timestamp(to_timestamp(value)?),
        Kind::Unsupported => return Err(Error::type_conversion(value, kind.type_name())),
    };

    Ok(Some(ret))
}

fn to_string(value: Value) -> Result<Value> {
    Ok(Value::String(match value {
        Value::String(v) => v,
        Value::Bytes(v) => match String::from_utf8(v) {
            Ok(v) => v,
            Err(err) => return Err(Error::type_conversion(Value::Bytes(err.into_bytes()), "String")),
        },
        Value::Bool(v) => v.to_string(),
        Value::F32(v) => v.to_string(),
        Value::F64(v) => v.to_string(),
        Value::Timestamp(v) => v.to_string(),
        value => match wide_int(&value) {
            Some(v) => v.to_string(),
            None => return Err(Error::type_conversion(value, "String")),
        },
    }))
}

fn to_bytes(value: Value) -> Result<Value> {
    match value {
        Value::Bytes(v) => Ok(Value::Bytes(v)),
        Value::String(v) => Ok(Value::Bytes(v.into_bytes())),
        value => Err(Error::type_conversion(value, "Vec<u8>")),
    }
}

fn to_bool(value: Value) -> Result<Value> {
    let parsed = match &value {
        Value::Bool(v) => Some(*v),
        Value::String(v) => parse_bool(v),
        Value::Bytes(v) => core::str::from_utf8(v).ok().and_then(parse_bool),
        other => match wide_int(other) {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
    };

    match parsed {
        Some(v) => Ok(Value::Bool(v)),
        None => Err(Error::type_conversion(value, "bool")),
    }
}

/// Accepts the same spellings as the common database driver boolean rule.
fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Every integer variant fits in an `i128`.
fn wide_int(value: &Value) -> Option<i128> {
    match *value {
        Value::I8(v) => Some(v.into()),
        Value::I16(v) => Some(v.into()),
        Value::I32(v) => Some(v.into()),
        Value::I64(v) => Some(v.into()),
        Value::U8(v) => Some(v.into()),
        Value::U16(v) => Some(v.into()),
        Value::U32(v) => Some(v.into()),
        Value::U64(v) => Some(v.into()),
        _ => None,
    }
}

fn to_int<T>(value: Value, kind: Kind) -> Result<T>
where
    T: TryFrom<i128> + core::str::FromStr,
{
    let wide = match &value {
        Value::Bool(v) => Some(i128::from(*v)),
        Value::String(s) => {
            return s
                .trim()
                .parse::<T>()
                .map_err(|_| Error::type_conversion(value.clone(), kind.type_name()))
        }
        other => wide_int(other),
    };

    wide.and_then(|v| T::try_from(v).ok())
        .ok_or_else(|| Error::type_conversion(value, kind.type_name()))
}

fn to_f64(value: Value, kind: Kind) -> Result<f64> {
    match value {
        Value::F32(v) => Ok(v.into()),
        Value::F64(v) => Ok(v),
        Value::String(ref s) => match s.trim().parse::<f64>() {
            Ok(v) => Ok(v),
            Err(_) => Err(Error::type_conversion(value, kind.type_name())),
        },
        value => match wide_int(&value) {
            Some(v) => Ok(v as f64),
            None => Err(Error::type_conversion(value, kind.type_name())),
        },
    }
}

fn to_timestamp(value: Value) -> Result<Timestamp> {
    match value {
        Value::Timestamp(v) => Ok(v),
        Value::String(ref s) => match parse_timestamp(s) {
            Some(v) => Ok(v),
            None => Err(Error::type_conversion(value, "Timestamp")),
        },
        value => match value.as_i64() {
            Some(secs) => Ok(Timestamp::from_second(secs)?),
            None => Err(Error::type_conversion(value, "Timestamp")),
        },
    }
}

/// RFC 3339 first, then a civil `YYYY-MM-DD HH:MM:SS[.f]` read as UTC.
fn parse_timestamp(s: &str) -> Option<Timestamp> {
    let s = s.trim();
    if let Ok(ts) = s.parse::<Timestamp>() {
        return Some(ts);
    }
    let dt = s.parse::<civil::DateTime>().ok()?;
    dt.to_zoned(TimeZone::UTC).ok().map(|zoned| zoned.timestamp())
}
