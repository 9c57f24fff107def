use super::Record;
use crate::{MapRow, Result};

use indexmap::IndexMap;
use rowbind_core::{driver::Row, schema::Name, stmt::ValueRecord, Error};

use std::{fmt, marker::PhantomData};

/// Maps result rows onto a [`Record`] by matching column names to field
/// names.
///
/// Names are compared after [`Name`] normalization, so the column
/// `EMOTIONAL_STATE` binds to the field `emotional_state`. Columns with no
/// matching field are skipped; fields with no matching column load from
/// `Null`, which only succeeds for nullable fields. Two columns binding the
/// same field fail the row.
///
/// The lookup table is built once by [`RecordMapper::new`] and never changes,
/// so a single mapper can be shared by any number of queries and threads.
pub struct RecordMapper<T> {
    /// Normalized column name -> position in the record's constructor.
    fields: IndexMap<Name, usize>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> RecordMapper<T> {
    /// Builds the lookup table for `T`.
    ///
    /// Fails if two fields of `T` normalize to the same name.
    pub fn new() -> Result<Self> {
        let schema = T::SCHEMA;
        let mut fields = IndexMap::with_capacity(schema.fields.len());

        for (position, field) in schema.fields.iter().enumerate() {
            if let Some(previous) = fields.insert(field.key(), position) {
                return Err(Error::invalid_record_shape(
                    schema.name,
                    format!(
                        "fields `{}` and `{}` both match columns named `{}`",
                        schema.fields[previous].name,
                        field.name,
                        field.key()
                    ),
                ));
            }
        }

        Ok(Self {
            fields,
            _record: PhantomData,
        })
    }

    /// Maps the row the cursor is positioned on. `row_num` is the zero-based
    /// index of the row within its result set.
    pub fn map_row(&self, row: &dyn Row, row_num: usize) -> Result<T> {
        self.map_row_inner(row, row_num)
            .map_err(|err| err.context(Error::mapping_failed(T::SCHEMA.name, row_num)))
    }

    fn map_row_inner(&self, row: &dyn Row, row_num: usize) -> Result<T> {
        let schema = T::SCHEMA;
        let mut values = ValueRecord::nulls(schema.fields.len());
        // Column index each position was bound from.
        let mut bound: Vec<Option<usize>> = vec![None; schema.fields.len()];

        for index in 0..row.column_count() {
            let column = row.column_name(index)?;

            let Some(&position) = self.fields.get(Name::new(column).as_str()) else {
                continue;
            };

            let field = &schema.fields[position];

            if let Some(previous) = bound[position] {
                return Err(Error::invalid_record_shape(
                    schema.name,
                    format!(
                        "columns `{}` and `{}` both bind field `{}`",
                        row.column_name(previous)?,
                        column,
                        field.name
                    ),
                ));
            }
            bound[position] = Some(index);

            if row_num == 0 {
                tracing::debug!(
                    column,
                    field = field.name,
                    ty = ?field.ty,
                    record = schema.name,
                    "mapping column to field"
                );
            }

            values[position] = row.get(index, &field.ty)?;
        }

        T::load(values)
    }

    /// Returns the position of the constructor parameter a column named
    /// `column` binds to.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.fields.get(Name::new(column).as_str()).copied()
    }
}

impl<T: Record> MapRow<T> for RecordMapper<T> {
    fn map_row(&self, row: &dyn Row, row_num: usize) -> Result<T> {
        RecordMapper::map_row(self, row, row_num)
    }
}

impl<T> Clone for RecordMapper<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            _record: PhantomData,
        }
    }
}

impl<T> fmt::Debug for RecordMapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordMapper")
            .field("record", &std::any::type_name::<T>())
            .field("fields", &self.fields)
            .finish()
    }
}
