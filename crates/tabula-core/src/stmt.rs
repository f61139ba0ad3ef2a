mod coerce;
pub use coerce::coerce;

mod primitive;
pub use primitive::Primitive;

mod value;
pub use value::Value;

pub use jiff::Timestamp;
