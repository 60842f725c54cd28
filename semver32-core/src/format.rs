//! Textual rendering of version numbers
//!
//! Two renderings exist, both accepted back by [`crate::parse`]:
//!
//! - shortest-form (`Display`): trailing zero segments are dropped, except
//!   that a zero minor is kept when the patch is non-zero (`0.0.1`)
//! - full-form ([`VersionNumber::full`], `{:#}`): always `major.minor.patch`

use alloc::string::String;
use core::fmt::{self, Write};

use crate::VersionNumber;

/// Write `version` into `out`, in full-form or shortest-form
fn render<W: Write>(version: VersionNumber, full: bool, out: &mut W) -> fmt::Result {
    let (major, minor, patch) = version.to_parts();

    write!(out, "{major}")?;
    if full || minor > 0 || patch > 0 {
        write!(out, ".{minor}")?;
    }
    if full || patch > 0 {
        write!(out, ".{patch}")?;
    }

    Ok(())
}

/// Fixed-capacity, stack-allocated rendering of a version number
#[derive(Clone, Copy)]
pub struct FormatBuffer {
    bytes: [u8; Self::CAPACITY],
    len: usize,
}

impl FormatBuffer {
    /// Length of the longest rendering, `"65535.255.255"`
    pub const CAPACITY: usize = 13;

    const fn empty() -> Self {
        Self {
            bytes: [0; Self::CAPACITY],
            len: 0,
        }
    }

    fn render(version: VersionNumber, full: bool) -> Self {
        let mut buf = Self::empty();
        let result = render(version, full, &mut buf);
        debug_assert!(result.is_ok(), "every rendering fits in CAPACITY bytes");
        buf
    }

    /// Render the shortest-form
    pub fn shortest(version: VersionNumber) -> Self {
        Self::render(version, false)
    }

    /// Render the full-form
    pub fn full(version: VersionNumber) -> Self {
        Self::render(version, true)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII digits and '.' are ever written
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Write for FormatBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > Self::CAPACITY {
            return Err(fmt::Error);
        }

        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

impl AsRef<str> for FormatBuffer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for FormatBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for FormatBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FormatBuffer").field(&self.as_str()).finish()
    }
}

/// Display adapter that always renders all three segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full(VersionNumber);

impl fmt::Display for Full {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(FormatBuffer::full(self.0).as_str())
    }
}

impl VersionNumber {
    /// Display the full-form, `major.minor.patch`
    pub const fn full(self) -> Full {
        Full(self)
    }

    /// Render the full-form into a new string
    pub fn to_full_string(self) -> String {
        FormatBuffer::full(self).as_str().into()
    }
}

/// Shortest-form; the alternate flag (`{:#}`) selects the full-form
impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = FormatBuffer::render(*self, f.alternate());
        f.pad(buf.as_str())
    }
}

impl fmt::Debug for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VersionNumber({})", self.full())
    }
}
