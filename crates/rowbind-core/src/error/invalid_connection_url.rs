use super::Error;

/// A connection URL rowbind cannot open: unparsable, an unsupported scheme,
/// or a scheme whose driver feature is disabled.
#[derive(Debug)]
pub(super) struct InvalidConnectionUrl {
    reason: Box<str>,
}

impl std::error::Error for InvalidConnectionUrl {}

impl core::fmt::Display for InvalidConnectionUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid connection URL: {}", self.reason)
    }
}

impl Error {
    pub fn invalid_connection_url(reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConnectionUrl(
            InvalidConnectionUrl {
                reason: reason.into().into(),
            },
        ))
    }

    /// Returns `true` if the URL given to `Db::builder().connect` or
    /// `Sqlite::new` was rejected.
    pub fn is_invalid_connection_url(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConnectionUrl(_))
    }
}
