//! Plain text encoding: the shortest-form with no quoting

use semver32_core::{parse_with, FormatBuffer, Grammar, VersionNumber};

use super::{decode, decode_with};
use crate::error::Result;

pub fn to_string(version: VersionNumber) -> String {
    version.to_string()
}

pub fn to_bytes(version: VersionNumber) -> Vec<u8> {
    FormatBuffer::shortest(version).as_bytes().to_vec()
}

pub fn from_str(text: &str) -> Result<VersionNumber> {
    decode("text", text)
}

/// Decode with an explicit grammar
pub fn from_str_with(text: &str, grammar: Grammar) -> Result<VersionNumber> {
    decode_with("text", text, |s| parse_with(s, grammar))
}

/// Decode UTF-8 bytes
pub fn from_bytes(bytes: &[u8]) -> Result<VersionNumber> {
    from_str(std::str::from_utf8(bytes)?)
}
