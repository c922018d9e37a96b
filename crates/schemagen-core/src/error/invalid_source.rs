use super::Error;

/// Error when the generated source text is not valid Rust.
#[derive(Debug)]
pub(super) struct InvalidSource {
    message: Box<str>,
}

impl std::error::Error for InvalidSource {}

impl core::fmt::Display for InvalidSource {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "generated source does not parse: {}", self.message)
    }
}

impl Error {
    pub fn invalid_source(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSource(InvalidSource {
            message: message.into().into(),
        }))
    }

    pub fn is_invalid_source(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSource(_))
    }
}
