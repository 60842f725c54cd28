//! Parsing of textual version numbers
//!
//! The scanner walks the input once, left to right, accumulating the
//! current segment and checking it against the segment bound after every
//! digit, so oversized input fails as soon as the bound is crossed.

use core::str::FromStr;

use crate::{Component, ParseError, VersionNumber};

/// Which textual forms the parser accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// Segments may be empty (`"1."` is `1.0.0`) and anything after the
    /// third `.` is ignored (`"1.2.3.4"` is `1.2.3`)
    #[default]
    Lenient,
    /// Exactly `digits ('.' digits ('.' digits)?)?`
    Strict,
}

impl Grammar {
    pub const fn is_strict(self) -> bool {
        matches!(self, Grammar::Strict)
    }
}

/// Parse a version number with the lenient grammar
///
/// Missing segments default to zero, so `"1"` and `"1.0.0"` are equal.
pub fn parse(input: &str) -> Result<VersionNumber, ParseError> {
    parse_with(input, Grammar::Lenient)
}

/// Parse a version number with the given grammar
pub fn parse_with(input: &str, grammar: Grammar) -> Result<VersionNumber, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let strict = grammar.is_strict();
    let mut segments = [0u32; 3];
    let mut index = 0;
    let mut digits = 0usize;

    for c in input.chars() {
        match c {
            '.' => {
                if strict && digits == 0 {
                    return Err(ParseError::EmptySegment(input.into()));
                }
                if strict && index == Component::Patch.index() {
                    return Err(ParseError::InvalidCharacter {
                        input: input.into(),
                        character: c,
                    });
                }

                index += 1;
                digits = 0;

                // Lenient: a fourth segment and everything after it is dropped
                if index == segments.len() {
                    break;
                }
            }
            '0'..='9' => {
                let component = Component::ALL[index];
                let value = segments[index] * 10 + (c as u32 - '0' as u32);

                if value > component.max() {
                    return Err(ParseError::too_big(component, input));
                }

                segments[index] = value;
                digits += 1;
            }
            _ => {
                return Err(ParseError::InvalidCharacter {
                    input: input.into(),
                    character: c,
                })
            }
        }
    }

    if strict && digits == 0 {
        return Err(ParseError::EmptySegment(input.into()));
    }

    Ok(VersionNumber::new(
        segments[0] as u16,
        segments[1] as u8,
        segments[2] as u8,
    ))
}

/// Parse a version number wrapped in one framing character on each side
///
/// Exactly one leading and one trailing character (typically quotes) are
/// removed without being inspected. Input too short to hold anything
/// between the frame is reported as empty.
pub fn parse_framed(framed: &str) -> Result<VersionNumber, ParseError> {
    let mut chars = framed.chars();

    match (chars.next(), chars.next_back()) {
        (Some(_), Some(_)) => parse(chars.as_str()),
        _ => Err(ParseError::Empty),
    }
}

impl VersionNumber {
    /// Parse with the lenient grammar, see [`parse`]
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse(input)
    }

    /// Parse with the strict grammar
    pub fn parse_strict(input: &str) -> Result<Self, ParseError> {
        parse_with(input, Grammar::Strict)
    }
}

impl FromStr for VersionNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for VersionNumber {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse(s)
    }
}
