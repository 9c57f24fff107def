use super::Value;

use std::ops;

/// Positional values for the parameters of a record constructor.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRecord {
    pub fields: Vec<Value>,
}

impl ValueRecord {
    pub fn from_vec(fields: Vec<Value>) -> Self {
        Self { fields }
    }

    /// A record of `len` null values.
    pub fn nulls(len: usize) -> Self {
        Self {
            fields: vec![Value::Null; len],
        }
    }

    /// Moves the value at `index` out of the record, leaving `Null` behind.
    ///
    /// Out of range indices yield `Null`, matching a parameter that no column
    /// was bound to.
    pub fn take(&mut self, index: usize) -> Value {
        self.fields
            .get_mut(index)
            .map(std::mem::take)
            .unwrap_or_default()
    }
}

impl ops::Deref for ValueRecord {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.fields[..]
    }
}

impl ops::DerefMut for ValueRecord {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.fields[..]
    }
}
