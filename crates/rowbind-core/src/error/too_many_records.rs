use super::Error;

/// A lookup that must match exactly one row matched several.
#[derive(Debug)]
pub(super) struct TooManyRecordsError {
    detail: Box<str>,
}

impl std::error::Error for TooManyRecordsError {}

impl core::fmt::Display for TooManyRecordsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "too many records: {}", self.detail)
    }
}

impl Error {
    /// Reports that an exactly-one-row query such as `Db::query_one` saw more
    /// than one row. `detail` usually states the expected and actual counts.
    pub fn too_many_records(detail: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TooManyRecords(TooManyRecordsError {
            detail: detail.into().into(),
        }))
    }

    pub fn is_too_many_records(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TooManyRecords(_))
    }
}
