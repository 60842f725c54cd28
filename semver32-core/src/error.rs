//! Error types for semver32 operations

use alloc::string::String;
use core::fmt;

use crate::Component;

/// The kind of failure, independent of its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input text had zero length
    Empty,
    /// A character was neither a digit nor `.`
    InvalidCharacter,
    /// Major component above 65535
    MajorTooBig,
    /// Minor component above 255
    MinorTooBig,
    /// Patch component above 255
    PatchTooBig,
    /// A segment without digits (strict grammar only)
    EmptySegment,
}

impl ErrorKind {
    /// The kind reported when `component` exceeds its range
    pub const fn too_big(component: Component) -> Self {
        match component {
            Component::Major => ErrorKind::MajorTooBig,
            Component::Minor => ErrorKind::MinorTooBig,
            Component::Patch => ErrorKind::PatchTooBig,
        }
    }

    /// Recover the kind from a rendered error message
    ///
    /// Formats that carry errors as text (serde's `de::Error::custom`) keep
    /// only the message, usually wrapped with their own position info. The
    /// earliest known fragment in `message` wins, so an input echoed later in
    /// the message cannot shadow the real kind.
    pub fn from_message(message: &str) -> Option<Self> {
        const FRAGMENTS: [(&str, ErrorKind); 6] = [
            ("number representation is empty", ErrorKind::Empty),
            ("invalid character '", ErrorKind::InvalidCharacter),
            ("major component is too big: \"", ErrorKind::MajorTooBig),
            ("minor component is too big: \"", ErrorKind::MinorTooBig),
            ("patch component is too big: \"", ErrorKind::PatchTooBig),
            ("empty segment in: \"", ErrorKind::EmptySegment),
        ];

        FRAGMENTS
            .iter()
            .filter_map(|(fragment, kind)| message.find(fragment).map(|at| (at, *kind)))
            .min_by_key(|(at, _)| *at)
            .map(|(_, kind)| kind)
    }
}

/// Errors produced while parsing textual version numbers
///
/// Every variant except [`ParseError::Empty`] carries the complete original
/// input, not only the offending segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input text had zero length
    Empty,
    /// A character was neither a digit nor `.`
    InvalidCharacter { input: String, character: char },
    /// Major component above 65535
    MajorTooBig(String),
    /// Minor component above 255
    MinorTooBig(String),
    /// Patch component above 255
    PatchTooBig(String),
    /// A segment without digits (strict grammar only)
    EmptySegment(String),
}

impl ParseError {
    pub(crate) fn too_big(component: Component, input: &str) -> Self {
        let input = String::from(input);
        match component {
            Component::Major => ParseError::MajorTooBig(input),
            Component::Minor => ParseError::MinorTooBig(input),
            Component::Patch => ParseError::PatchTooBig(input),
        }
    }

    /// Get the kind of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Empty => ErrorKind::Empty,
            ParseError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            ParseError::MajorTooBig(_) => ErrorKind::MajorTooBig,
            ParseError::MinorTooBig(_) => ErrorKind::MinorTooBig,
            ParseError::PatchTooBig(_) => ErrorKind::PatchTooBig,
            ParseError::EmptySegment(_) => ErrorKind::EmptySegment,
        }
    }

    /// The original input, if the error carries it
    pub fn input(&self) -> Option<&str> {
        match self {
            ParseError::Empty => None,
            ParseError::InvalidCharacter { input, .. }
            | ParseError::MajorTooBig(input)
            | ParseError::MinorTooBig(input)
            | ParseError::PatchTooBig(input)
            | ParseError::EmptySegment(input) => Some(input),
        }
    }

    /// The character that stopped the scan, for `InvalidCharacter`
    pub const fn character(&self) -> Option<char> {
        match self {
            ParseError::InvalidCharacter { character, .. } => Some(*character),
            _ => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => f.write_str("number representation is empty"),
            ParseError::InvalidCharacter { input, character } => {
                write!(f, "invalid character '{character}' in: \"{input}\"")
            }
            ParseError::MajorTooBig(input) => write!(f, "major component is too big: \"{input}\""),
            ParseError::MinorTooBig(input) => write!(f, "minor component is too big: \"{input}\""),
            ParseError::PatchTooBig(input) => write!(f, "patch component is too big: \"{input}\""),
            ParseError::EmptySegment(input) => write!(f, "empty segment in: \"{input}\""),
        }
    }
}

impl core::error::Error for ParseError {}

/// A bump would carry a component past its bit width
///
/// Only the component is recorded; the boundary follows from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Overflow {
    pub component: Component,
}

impl Overflow {
    pub const fn new(component: Component) -> Self {
        Self { component }
    }

    /// One past the largest representable value of the component
    pub const fn limit(&self) -> u32 {
        self.component.max() + 1
    }

    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::too_big(self.component)
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} component is too big: \"{}\"", self.component, self.limit())
    }
}

impl core::error::Error for Overflow {}

/// Any error produced by this crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Parse(ParseError),
    Overflow(Overflow),
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(e) => e.kind(),
            Error::Overflow(e) => e.kind(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "semver: {e}"),
            Error::Overflow(e) => write!(f, "semver: {e}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Overflow(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<Overflow> for Error {
    fn from(e: Overflow) -> Self {
        Error::Overflow(e)
    }
}
