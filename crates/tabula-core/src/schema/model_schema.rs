use super::{FieldDef, FieldDescriptor};

/// The registered shape of one model type: its table and mapped columns.
pub struct ModelSchema<M> {
    pub table: String,
    pub descriptors: Vec<FieldDescriptor<M>>,
}

impl<M> ModelSchema<M> {
    /// Builds the schema from the field table `#[derive(Model)]` emits,
    /// dropping fields that do not map to a column.
    pub fn from_fields(table: impl Into<String>, fields: &[FieldDef<M>]) -> Self {
        Self {
            table: table.into(),
            descriptors: fields
                .iter()
                .filter_map(FieldDescriptor::from_def)
                .collect(),
        }
    }

    /// The first auto-increment field, if any.
    pub fn auto_increment(&self) -> Option<&FieldDescriptor<M>> {
        self.descriptors.iter().find(|d| d.is_auto_increment())
    }

    pub fn column(&self, name: &str) -> Option<&FieldDescriptor<M>> {
        self.descriptors.iter().find(|d| d.column == name)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.descriptors.iter().map(|d| d.column.as_str())
    }
}

impl<M> PartialEq for ModelSchema<M> {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table && self.descriptors == other.descriptors
    }
}

impl<M> core::fmt::Debug for ModelSchema<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModelSchema")
            .field("table", &self.table)
            .field("descriptors", &self.descriptors)
            .finish()
    }
}
