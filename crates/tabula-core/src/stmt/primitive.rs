use super::{coerce, Value};
use crate::{schema::Kind, Error, Result};

use jiff::Timestamp;

/// A Rust type that a model field can be declared as.
///
/// The derive macro routes field reads through [`Primitive::to_value`] and
/// writes through [`Primitive::load`].
pub trait Primitive: Sized {
    const KIND: Kind;

    fn to_value(&self) -> Value;

    /// Loads a scanned value, coercing it to `Self` first.
    ///
    /// `NULL` is not accepted here; callers check for it before loading so
    /// that the field keeps its current contents.
    fn load(value: Value) -> Result<Self>;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $kind:ident ( $variant:ident ) ),* $(,)? ) => {
        $(
            impl Primitive for $ty {
                const KIND: Kind = Kind::$kind;

                fn to_value(&self) -> Value {
                    Value::from(self.clone())
                }

                fn load(value: Value) -> Result<Self> {
                    match coerce(value.clone(), Self::KIND)? {
                        Some(Value::$variant(v)) => v
                            .try_into()
                            .map_err(|_| Error::type_conversion(value, Self::KIND.type_name())),
                        _ => Err(Error::type_conversion(value, Self::KIND.type_name())),
                    }
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool(Bool),
    i8 => I8(I8),
    i16 => I16(I16),
    i32 => I32(I32),
    i64 => I64(I64),
    isize => Isize(I64),
    u8 => U8(U8),
    u16 => U16(U16),
    u32 => U32(U32),
    u64 => U64(U64),
    usize => Usize(U64),
    f32 => F32(F32),
    f64 => F64(F64),
    String => String(String),
    Vec<u8> => Bytes(Bytes),
    Timestamp => Timestamp(Timestamp),
}
