//! Structured error type shared by the entity and collection layers.
//!
//! Every failure carries a stable [`ErrorKind`] so callers can branch on the
//! kind instead of parsing messages. The rendered form is
//! `[<marker>] <message>`, e.g. `[properties-invalid] Component 'src' is missing`.

use std::fmt;

/// Machine-readable classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Raw input could not be normalized into a valid entity.
    PropertiesInvalid,
    /// A glob pattern could not be parsed.
    PatternInvalid,
    /// A lookup that requires a result found nothing.
    NotFound,
}

impl ErrorKind {
    /// The fixed marker embedded in the rendered error.
    pub fn marker(self) -> &'static str {
        match self {
            ErrorKind::PropertiesInvalid => "properties-invalid",
            ErrorKind::PatternInvalid => "pattern-invalid",
            ErrorKind::NotFound => "not-found",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("[{kind}] {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn properties_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PropertiesInvalid, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type Result<T> = std::result::Result<T, Error>;
