mod mapper;
pub use mapper::RecordMapper;

use crate::{stmt::Primitive, Result};

use rowbind_core::{schema::RecordSchema, stmt::ValueRecord};

/// An immutable value object that can be built from a result row.
///
/// Usually implemented with `#[derive(Record)]`, which declares one
/// [`Field`](crate::Field) per struct field, in declaration order, and a
/// `load` that reads them back positionally.
pub trait Record: Sized {
    /// The record's name and constructor parameters.
    const SCHEMA: RecordSchema;

    /// Constructs the record from one value per entry of `SCHEMA.fields`, in
    /// the same order. Parameters no column was bound to are `Null`.
    fn load(record: ValueRecord) -> Result<Self>;
}

/// Loads the constructor parameter at `index`, naming the field in the error
/// if the value does not fit.
pub fn load_field<T: Primitive>(
    record: &mut ValueRecord,
    index: usize,
    name: &'static str,
) -> Result<T> {
    T::load(record.take(index)).map_err(|err| err.context(crate::err!("field `{name}`")))
}
