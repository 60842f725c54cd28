#![no_std]

//! semver32 Core - Version Numbers Packed Into 32 Bits
//!
//! This crate provides the value type, textual grammar and ordering for
//! version numbers stored as a single `u32`:
//!
//! ```text
//! bits 31..16  major  (0..=65535)
//! bits 15..8   minor  (0..=255)
//! bits  7..0   patch  (0..=255)
//! ```
//!
//! Because the most significant field sits in the most significant bits,
//! comparing two packed values numerically is the same as comparing their
//! `(major, minor, patch)` tuples lexicographically.
//!
//! ```rust
//! use semver32_core::VersionNumber;
//!
//! let v: VersionNumber = "1.2".parse().unwrap();
//! assert_eq!(v.to_parts(), (1, 2, 0));
//! assert_eq!(v.bump_patch().unwrap().to_string(), "1.2.1");
//! assert_eq!(v.full().to_string(), "1.2.0");
//! ```
//!
//! No prerelease or build metadata is supported.

extern crate alloc;

pub mod error;
pub mod format;
pub mod number;
pub mod ordering;
pub mod parsing;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::*;
pub use format::{Full, FormatBuffer};
pub use number::{Component, VersionNumber};
pub use ordering::{SortableSequence, VersionNumbers};
pub use parsing::{parse, parse_framed, parse_with, Grammar};
