//! semver32 - Compact Version Numbers
//!
//! Version numbers packed into a single `u32` (16 bits major, 8 bits minor,
//! 8 bits patch), with adapters for the encodings they usually travel in.
//!
//! ## Architecture
//!
//! - **semver32-core**: the packed value, grammar, formatting, bumping and
//!   ordering (`no_std`, no I/O)
//! - **semver32**: encoding adapters, logging and the `semver32` tool
//!
//! ## Quick Start
//!
//! ```rust
//! use semver32::{text, VersionNumber};
//!
//! fn example() -> Result<(), semver32::CodecError> {
//!     let v = text::from_str("1.4")?;
//!     let next = v.bump_minor().expect("minor below 255");
//!
//!     assert_eq!(next, VersionNumber::new(1, 5, 0));
//!     assert_eq!(text::to_string(next), "1.5");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **json** (default): `serde_json` adapter
//! - **yaml** (default): `serde_yaml` adapter
//! - **serde**: `Serialize`/`Deserialize` for `VersionNumber`, for any
//!   serde format
//! - **cli**: the `semver32` command-line tool

// Re-export the core value type and grammar
pub use semver32_core::{
    // Value type
    Component, VersionNumber, VersionNumbers, SortableSequence,
    // Rendering
    FormatBuffer, Full,
    // Grammar
    parse, parse_framed, parse_with, Grammar,
    // Error handling
    Error, ErrorKind, Overflow, ParseError,
};

pub mod codec;
pub mod error;

#[cfg(feature = "json")]
pub use codec::json;
pub use codec::text;
#[cfg(feature = "yaml")]
pub use codec::yaml;

pub use error::CodecError;
