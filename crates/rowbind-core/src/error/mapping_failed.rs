use super::Error;

/// Error when a result row cannot be turned into a record.
///
/// Used as context on top of the underlying cause (a failed column read, a
/// type conversion, a missing non-nullable value).
#[derive(Debug)]
pub(super) struct MappingFailedError {
    record: &'static str,
    row: usize,
}

impl std::error::Error for MappingFailedError {}

impl core::fmt::Display for MappingFailedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "mapping failed: row {} of {}", self.row, self.record)
    }
}

impl Error {
    /// Creates a mapping failure for row `row` of the named record type.
    pub fn mapping_failed(record: &'static str, row: usize) -> Error {
        Error::from(super::ErrorKind::MappingFailed(MappingFailedError {
            record,
            row,
        }))
    }

    /// Returns `true` if this error is a mapping failure.
    pub fn is_mapping_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MappingFailed(_))
    }
}
