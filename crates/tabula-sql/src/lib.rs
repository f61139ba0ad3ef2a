pub mod condition;
pub use condition::{Condition, ConditionKind, Operand};

mod filter;
pub use filter::Filter;

pub mod serializer;
pub use serializer::{Compiled, Flavor, Params, Resolve, Serializer};
