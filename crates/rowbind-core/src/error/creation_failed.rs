use super::Error;

/// Error when an insert completed but the store did not hand back the
/// generated key needed to load the new record.
#[derive(Debug)]
pub(super) struct CreationFailedError {
    record: &'static str,
    reason: Box<str>,
}

impl std::error::Error for CreationFailedError {}

impl core::fmt::Display for CreationFailedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "could not create {}: {}", self.record, self.reason)
    }
}

impl Error {
    /// Creates a creation failure for the named record type.
    pub fn creation_failed(record: &'static str, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::CreationFailed(CreationFailedError {
            record,
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is a creation failure.
    pub fn is_creation_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::CreationFailed(_))
    }
}
