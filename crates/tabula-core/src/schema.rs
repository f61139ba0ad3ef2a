mod descriptor;
pub use descriptor::{parse_options, FieldDescriptor};

mod field;
pub use field::{Accessor, FieldDef};

mod kind;
pub use kind::Kind;

mod model_schema;
pub use model_schema::ModelSchema;
