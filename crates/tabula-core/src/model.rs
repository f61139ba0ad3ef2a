use crate::schema::FieldDef;

/// A struct that maps to rows of a database table.
///
/// Implement with `#[derive(Model)]`. `Default` provides the fresh instance
/// each row of a multi-row query is scanned into.
pub trait Model: Default + 'static {
    /// Every named field of the struct, in declaration order.
    fn fields() -> Vec<FieldDef<Self>>;
}
