use super::Error;

/// Error when a record's field descriptors cannot be turned into a column
/// lookup table.
///
/// This occurs when two fields normalize to the same column key (for example
/// `user_id` and `userId`), making it impossible to tell which one a column
/// belongs to. It is raised when the mapper is built, before any row is read.
#[derive(Debug)]
pub(super) struct InvalidRecordShape {
    record: &'static str,
    message: Box<str>,
}

impl std::error::Error for InvalidRecordShape {}

impl core::fmt::Display for InvalidRecordShape {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid record shape `{}`: {}", self.record, self.message)
    }
}

impl Error {
    /// Creates an invalid record shape error.
    pub fn invalid_record_shape(record: &'static str, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRecordShape(InvalidRecordShape {
            record,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid record shape error.
    pub fn is_invalid_record_shape(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidRecordShape(_))
    }
}
