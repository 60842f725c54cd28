//! Encoding adapters
//!
//! Each adapter frames the shortest-form rendering the way its format
//! expects and hands decoded text back to the core parser. Adapters never
//! repair input: a document that decodes but does not parse fails with
//! [`CodecError::Parse`].

#[cfg(feature = "json")]
pub mod json;
pub mod text;
#[cfg(feature = "yaml")]
pub mod yaml;

use semver32_core::{ParseError, VersionNumber};

use crate::error::Result;

/// Run `parse` over text extracted from a `format` document, logging the outcome
pub(crate) fn decode_with<F>(format: &str, text: &str, parse: F) -> Result<VersionNumber>
where
    F: FnOnce(&str) -> std::result::Result<VersionNumber, ParseError>,
{
    match parse(text) {
        Ok(version) => {
            log::trace!("decoded {format} version {version:?} from {text:?}");
            Ok(version)
        }
        Err(e) => {
            log::debug!("rejected {format} version {text:?}: {e}");
            Err(e.into())
        }
    }
}

/// Parse text extracted from a `format` document with the lenient grammar
pub(crate) fn decode(format: &str, text: &str) -> Result<VersionNumber> {
    decode_with(format, text, semver32_core::parse)
}
