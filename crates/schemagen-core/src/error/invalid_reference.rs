use super::Error;

/// Error when a schema item points at something that is not there.
///
/// Foreign keys without a referenced table or referenced columns, and
/// constraints or relationships naming unknown columns or tables fall in this
/// category.
#[derive(Debug)]
pub(super) struct InvalidReference {
    message: Box<str>,
}

impl std::error::Error for InvalidReference {}

impl core::fmt::Display for InvalidReference {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid reference: {}", self.message)
    }
}

impl Error {
    /// Creates a referential error.
    pub fn invalid_reference(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidReference(InvalidReference {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a referential error.
    pub fn is_invalid_reference(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidReference(_))
    }
}
