mod invalid_reference;
mod invalid_schema;
mod invalid_source;
mod unsupported_kind;

use invalid_reference::InvalidReference;
use invalid_schema::InvalidSchema;
use invalid_source::InvalidSource;
use unsupported_kind::UnsupportedKind;

use std::sync::Arc;

/// An error raised while generating code from a schema.
///
/// Every error is fatal to the generation run that produced it. Context added
/// with [`Error::context`] is displayed before the root cause, separated by
/// `": "`.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    Context(Box<str>),
    InvalidSchema(InvalidSchema),
    InvalidReference(InvalidReference),
    UnsupportedKind(UnsupportedKind),
    InvalidSource(InvalidSource),
}

impl Error {
    /// Wraps this error with a message describing what was being generated.
    pub fn context(self, message: impl Into<String>) -> Error {
        Error {
            inner: Arc::new(ErrorInner {
                kind: ErrorKind::Context(message.into().into()),
                cause: Some(self),
            }),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    /// The innermost error, skipping any added context.
    fn root(&self) -> &Error {
        let mut root = self;
        for err in self.chain() {
            root = err;
        }
        root
    }

    fn kind(&self) -> &ErrorKind {
        &self.root().inner.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .cause
            .as_ref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            ErrorKind::Context(message) => f.write_str(message),
            ErrorKind::InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::InvalidReference(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::UnsupportedKind(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::InvalidSource(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(&err.inner.kind, f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}
