//! Errors raised by the encoding adapters

use semver32_core::{ErrorKind, ParseError};
use thiserror::Error;

/// Failure to decode a version number from an encoded document
///
/// Parse failures keep their [`ParseError`] so callers can branch on the
/// kind instead of the message.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("semver: {0}")]
    Parse(#[from] ParseError),

    #[cfg(feature = "json")]
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "yaml")]
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("text is not valid UTF-8: {0}")]
    Utf8(#[from] core::str::Utf8Error),
}

impl CodecError {
    /// The parse failure kind, when the document itself was well formed
    pub fn kind(&self) -> Option<ErrorKind> {
        self.parse_error().map(ParseError::kind)
    }

    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            CodecError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
