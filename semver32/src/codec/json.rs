//! JSON encoding: a version number is a JSON string

use std::borrow::Cow;

use semver32_core::{parse_framed, FormatBuffer, VersionNumber};

use super::{decode, decode_with};
use crate::error::Result;

/// Encode as a quoted JSON string, e.g. `"1.2"`
pub fn to_string(version: VersionNumber) -> String {
    let text = FormatBuffer::shortest(version);
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    out.push_str(text.as_str());
    out.push('"');
    log::trace!("encoded json version {out}");
    out
}

pub fn to_vec(version: VersionNumber) -> Vec<u8> {
    to_string(version).into_bytes()
}

/// Decode a single JSON string value
pub fn from_str(json: &str) -> Result<VersionNumber> {
    let text: Cow<'_, str> = serde_json::from_str(json)?;
    decode("json", &text)
}

pub fn from_slice(json: &[u8]) -> Result<VersionNumber> {
    let text: Cow<'_, str> = serde_json::from_slice(json)?;
    decode("json", &text)
}

/// Decode a raw quoted token by dropping its first and last character
///
/// No JSON unescaping is done. Tokens of two characters or fewer are empty.
pub fn from_quoted(token: &str) -> Result<VersionNumber> {
    decode_with("json", token, parse_framed)
}
