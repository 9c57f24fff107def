use crate::{stmt::Primitive, Result};

use rowbind_core::{driver::Row, err, Error};

/// Turns one result row into a value.
///
/// Implemented by [`RecordMapper`](crate::RecordMapper) and by any closure
/// `Fn(&dyn Row, usize) -> Result<T>`, for mappings written by hand.
pub trait MapRow<T> {
    /// Maps the row at zero-based position `row_num` of its result set.
    fn map_row(&self, row: &dyn Row, row_num: usize) -> Result<T>;
}

impl<T, F> MapRow<T> for F
where
    F: Fn(&dyn Row, usize) -> Result<T>,
{
    fn map_row(&self, row: &dyn Row, row_num: usize) -> Result<T> {
        self(row, row_num)
    }
}

/// Column access by name, for hand-written mappers.
pub trait RowExt: Row {
    /// Returns the index of the first column whose name equals `column`,
    /// ignoring ASCII case.
    fn column_index(&self, column: &str) -> Result<usize> {
        for index in 0..self.column_count() {
            if self.column_name(index)?.eq_ignore_ascii_case(column) {
                return Ok(index);
            }
        }

        Err(err!("no column named `{column}` in result set"))
    }

    /// Reads the column named `column` as `T`.
    fn get_as<T: Primitive>(&self, column: &str) -> Result<T> {
        let index = self.column_index(column)?;
        T::load(self.get(index, &T::TYPE)?)
            .map_err(|err: Error| err.context(err!("column `{column}`")))
    }
}

impl<R: Row + ?Sized> RowExt for R {}
