use super::Error;

/// Error when a constraint or relationship cannot be classified.
///
/// Raised for constraint kinds the SQL emitter cannot render inline and for
/// relationships that cannot be resolved from the requested side.
#[derive(Debug)]
pub(super) struct UnsupportedKind {
    message: Box<str>,
}

impl std::error::Error for UnsupportedKind {}

impl core::fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported kind: {}", self.message)
    }
}

impl Error {
    /// Creates a classification error.
    pub fn unsupported_kind(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedKind(UnsupportedKind {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a classification error.
    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedKind(_))
    }
}
