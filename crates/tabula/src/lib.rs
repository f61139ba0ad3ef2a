pub mod db;
pub use db::Db;

mod handle;
pub use handle::{FieldBinding, Handle};

mod registry;
pub use registry::Registry;

pub use tabula_core::{
    driver::{self, ExecResponse, Executor, Row, Rows},
    schema::{self, FieldDescriptor, Kind, ModelSchema},
    stmt::{self, Timestamp, Value},
    Error, Model, Result,
};

pub use tabula_sql::{
    condition::{
        and, between, custom, eq, exists, gt, gte, in_list, in_subquery, in_values, like, limit,
        limit_offset, lt, lte, ne, not, not_between, not_exists, not_in, not_in_subquery,
        not_in_values, not_like, or,
    },
    Compiled, Condition, ConditionKind, Filter, Flavor, Operand, Serializer,
};

pub use tabula_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use tabula_core::{
        schema::{Accessor, FieldDef, Kind},
        stmt::{Primitive, Value},
        Model, Result,
    };
}
