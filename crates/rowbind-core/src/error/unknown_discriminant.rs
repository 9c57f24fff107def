use super::Error;

/// Error when a stored integer code does not name any variant of an enum.
#[derive(Debug)]
pub(super) struct UnknownDiscriminantError {
    ty: &'static str,
    discriminant: i64,
}

impl std::error::Error for UnknownDiscriminantError {}

impl core::fmt::Display for UnknownDiscriminantError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown discriminant {} for {}", self.discriminant, self.ty)
    }
}

impl Error {
    pub fn unknown_discriminant(ty: &'static str, discriminant: impl Into<i64>) -> Error {
        Error::from(super::ErrorKind::UnknownDiscriminant(
            UnknownDiscriminantError {
                ty,
                discriminant: discriminant.into(),
            },
        ))
    }

    pub fn is_unknown_discriminant(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownDiscriminant(_))
    }
}
