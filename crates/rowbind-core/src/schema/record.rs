use super::Field;

/// The statically declared shape of a record: its name and the descriptors
/// of its constructor parameters, in constructor order.
#[derive(Debug, Clone, Copy)]
pub struct RecordSchema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl RecordSchema {
    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}
