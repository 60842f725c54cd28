//! Ordering of version numbers
//!
//! `VersionNumber` already orders by its packed value, which matches the
//! lexicographic order of `(major, minor, patch)`. This module adds an owned
//! sequence type and the index-based sorting contract used by callers that
//! drive their own sort routines.

use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

use crate::{ParseError, VersionNumber};

/// Index-based access needed to sort a sequence in place
pub trait SortableSequence {
    /// Number of elements
    fn len(&self) -> usize;

    /// Exchange the elements at `i` and `j`
    fn swap(&mut self, i: usize, j: usize);

    /// Whether the element at `i` orders strictly before the one at `j`
    fn less(&self, i: usize, j: usize) -> bool;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that no element orders before its predecessor
    fn is_sorted_ascending(&self) -> bool {
        (1..self.len()).all(|i| !self.less(i, i - 1))
    }
}

/// An owned sequence of version numbers
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VersionNumbers(Vec<VersionNumber>);

impl VersionNumbers {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse every input, stopping at the first failure
    pub fn parse_all<I, S>(inputs: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|s| crate::parse(s.as_ref()))
            .collect()
    }

    pub fn push(&mut self, version: VersionNumber) {
        self.0.push(version);
    }

    /// Sort ascending, keeping equal elements in their original order
    pub fn sort(&mut self) {
        self.0.sort();
    }

    /// Sort ascending without preserving the order of equal elements
    pub fn sort_unstable(&mut self) {
        self.0.sort_unstable();
    }

    /// Greatest version number, if any
    pub fn max(&self) -> Option<VersionNumber> {
        self.0.iter().copied().max()
    }

    /// Least version number, if any
    pub fn min(&self) -> Option<VersionNumber> {
        self.0.iter().copied().min()
    }

    /// Greatest version number sharing the given major component
    pub fn latest_compatible(&self, major: u16) -> Option<VersionNumber> {
        self.0
            .iter()
            .copied()
            .filter(|v| v.major() == major)
            .max()
    }

    pub fn into_inner(self) -> Vec<VersionNumber> {
        self.0
    }
}

impl SortableSequence for VersionNumbers {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.0[i] < self.0[j]
    }
}

impl SortableSequence for [VersionNumber] {
    fn len(&self) -> usize {
        <[VersionNumber]>::len(self)
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[VersionNumber]>::swap(self, i, j);
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }
}

impl Deref for VersionNumbers {
    type Target = [VersionNumber];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for VersionNumbers {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<VersionNumber>> for VersionNumbers {
    fn from(versions: Vec<VersionNumber>) -> Self {
        Self(versions)
    }
}

impl From<VersionNumbers> for Vec<VersionNumber> {
    fn from(versions: VersionNumbers) -> Self {
        versions.0
    }
}

impl FromIterator<VersionNumber> for VersionNumbers {
    fn from_iter<I: IntoIterator<Item = VersionNumber>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<VersionNumber> for VersionNumbers {
    fn extend<I: IntoIterator<Item = VersionNumber>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for VersionNumbers {
    type Item = VersionNumber;
    type IntoIter = alloc::vec::IntoIter<VersionNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a VersionNumbers {
    type Item = &'a VersionNumber;
    type IntoIter = core::slice::Iter<'a, VersionNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
