//! serde support: version numbers travel as shortest-form strings

use core::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::{FormatBuffer, VersionNumber};

impl Serialize for VersionNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(FormatBuffer::shortest(*self).as_str())
    }
}

struct VersionNumberVisitor;

impl Visitor<'_> for VersionNumberVisitor {
    type Value = VersionNumber;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a version number string such as \"1.2.3\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        crate::parse(v).map_err(E::custom)
    }
}

/// Deserializes from a string through the lenient [`crate::parse`]
///
/// The parse error reaches the format only as a message. Use
/// [`ErrorKind::from_message`](crate::ErrorKind::from_message) on the
/// format's error to get the kind back, or decode through a direct adapter
/// when the typed [`ParseError`](crate::ParseError) is needed.
impl<'de> Deserialize<'de> for VersionNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(VersionNumberVisitor)
    }
}
