//! Bit-packed version number value
//!
//! This module contains the `VersionNumber` type, its component accessors,
//! copy-on-write mutators and bump operations.

use core::fmt;

use bytemuck::{Pod, Zeroable};

use crate::Overflow;

const MAJOR_SHIFT: u32 = 16;
const MINOR_SHIFT: u32 = 8;

const MAJOR_MASK: u32 = 0xFFFF_0000;
const MINOR_MASK: u32 = 0x0000_FF00;
const PATCH_MASK: u32 = 0x0000_00FF;

/// One of the three fields of a version number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl Component {
    /// All components, most significant first
    pub const ALL: [Component; 3] = [Component::Major, Component::Minor, Component::Patch];

    /// Largest value the component can hold
    pub const fn max(self) -> u32 {
        match self {
            Component::Major => VersionNumber::MAJOR_MAX as u32,
            Component::Minor => VersionNumber::MINOR_MAX as u32,
            Component::Patch => VersionNumber::PATCH_MAX as u32,
        }
    }

    /// Position of the component in the textual form (0 = major)
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Component::Major),
            1 => Some(Component::Minor),
            2 => Some(Component::Patch),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `major.minor.patch` version number packed into a `u32`
///
/// Every `u32` is a valid version number. Comparison and hashing use the
/// packed value, which orders exactly like `(major, minor, patch)`.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
pub struct VersionNumber(u32);

impl VersionNumber {
    /// Largest major component
    pub const MAJOR_MAX: u16 = u16::MAX;

    /// Largest minor component
    pub const MINOR_MAX: u8 = u8::MAX;

    /// Largest patch component
    pub const PATCH_MAX: u8 = u8::MAX;

    /// `0.0.0`
    pub const ZERO: Self = Self(0);

    /// `65535.255.255`
    pub const MAX: Self = Self(u32::MAX);

    /// Pack three components into a version number
    pub const fn new(major: u16, minor: u8, patch: u8) -> Self {
        Self((major as u32) << MAJOR_SHIFT | (minor as u32) << MINOR_SHIFT | patch as u32)
    }

    /// Reinterpret a packed value
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Get the packed value
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    pub const fn major(self) -> u16 {
        (self.0 >> MAJOR_SHIFT) as u16
    }

    pub const fn minor(self) -> u8 {
        ((self.0 & MINOR_MASK) >> MINOR_SHIFT) as u8
    }

    pub const fn patch(self) -> u8 {
        (self.0 & PATCH_MASK) as u8
    }

    /// Get a component widened to `u32`
    pub const fn get(self, component: Component) -> u32 {
        match component {
            Component::Major => self.major() as u32,
            Component::Minor => self.minor() as u32,
            Component::Patch => self.patch() as u32,
        }
    }

    /// Get all three components as `(major, minor, patch)`
    pub const fn to_parts(self) -> (u16, u8, u8) {
        (self.major(), self.minor(), self.patch())
    }

    /// Return a copy with the major component replaced
    #[must_use]
    pub const fn with_major(self, major: u16) -> Self {
        Self(self.0 & !MAJOR_MASK | (major as u32) << MAJOR_SHIFT)
    }

    /// Return a copy with the minor component replaced
    #[must_use]
    pub const fn with_minor(self, minor: u8) -> Self {
        Self(self.0 & !MINOR_MASK | (minor as u32) << MINOR_SHIFT)
    }

    /// Return a copy with the patch component replaced
    #[must_use]
    pub const fn with_patch(self, patch: u8) -> Self {
        Self(self.0 & !PATCH_MASK | patch as u32)
    }

    /// Increase the major component by one, resetting minor and patch
    pub const fn bump_major(self) -> Result<Self, Overflow> {
        match self.major().checked_add(1) {
            Some(major) => Ok(Self::new(major, 0, 0)),
            None => Err(Overflow::new(Component::Major)),
        }
    }

    /// Increase the minor component by one, resetting patch
    pub const fn bump_minor(self) -> Result<Self, Overflow> {
        match self.minor().checked_add(1) {
            Some(minor) => Ok(Self::new(self.major(), minor, 0)),
            None => Err(Overflow::new(Component::Minor)),
        }
    }

    /// Increase the patch component by one
    pub const fn bump_patch(self) -> Result<Self, Overflow> {
        match self.patch().checked_add(1) {
            Some(patch) => Ok(self.with_patch(patch)),
            None => Err(Overflow::new(Component::Patch)),
        }
    }

    /// Bump the given component
    pub const fn bump(self, component: Component) -> Result<Self, Overflow> {
        match component {
            Component::Major => self.bump_major(),
            Component::Minor => self.bump_minor(),
            Component::Patch => self.bump_patch(),
        }
    }
}

impl From<u32> for VersionNumber {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<VersionNumber> for u32 {
    fn from(v: VersionNumber) -> Self {
        v.to_bits()
    }
}

impl From<(u16, u8, u8)> for VersionNumber {
    fn from((major, minor, patch): (u16, u8, u8)) -> Self {
        Self::new(major, minor, patch)
    }
}

impl From<VersionNumber> for (u16, u8, u8) {
    fn from(v: VersionNumber) -> Self {
        v.to_parts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_layout() {
        assert_eq!(VersionNumber::new(1, 2, 3).to_bits(), 0x0001_0203);
        assert_eq!(VersionNumber::new(0, 3, 0).to_bits(), 768);
        assert_eq!(VersionNumber::MAX.to_parts(), (65535, 255, 255));
        assert_eq!(VersionNumber::default(), VersionNumber::ZERO);
        assert_eq!(core::mem::size_of::<VersionNumber>(), 4);
    }

    #[test]
    fn test_accessors() {
        let v = VersionNumber::new(65535, 128, 7);
        assert_eq!(v.major(), 65535);
        assert_eq!(v.minor(), 128);
        assert_eq!(v.patch(), 7);
        assert_eq!(v.get(Component::Minor), 128);
        assert_eq!(VersionNumber::from((4, 5, 6)).to_parts(), (4, 5, 6));
        assert_eq!(u32::from(VersionNumber::from(0x00FF_0102)), 0x00FF_0102);
    }

    #[test]
    fn test_with_components() {
        let v = VersionNumber::new(1, 2, 3);
        assert_eq!(v.with_major(9), VersionNumber::new(9, 2, 3));
        assert_eq!(v.with_minor(9), VersionNumber::new(1, 9, 3));
        assert_eq!(v.with_patch(9), VersionNumber::new(1, 2, 9));

        // The original is untouched
        assert_eq!(v, VersionNumber::new(1, 2, 3));
    }

    #[test]
    fn test_with_components_independent() {
        let mut rng = StdRng::seed_from_u64(0x5e3_32);

        for _ in 0..10_000 {
            let v = VersionNumber::from_bits(rng.gen());
            let x: u16 = rng.gen();
            let y: u8 = rng.gen();

            let m = v.with_major(x);
            assert_eq!((m.major(), m.minor(), m.patch()), (x, v.minor(), v.patch()));

            let m = v.with_minor(y);
            assert_eq!((m.major(), m.minor(), m.patch()), (v.major(), y, v.patch()));

            let m = v.with_patch(y);
            assert_eq!((m.major(), m.minor(), m.patch()), (v.major(), v.minor(), y));
        }
    }

    #[test]
    fn test_bump_major() {
        assert_eq!(
            VersionNumber::new(0, 1, 1).bump_major(),
            Ok(VersionNumber::new(1, 0, 0))
        );
        assert_eq!(
            VersionNumber::new(65534, 255, 255).bump_major(),
            Ok(VersionNumber::new(65535, 0, 0))
        );
        assert_eq!(
            VersionNumber::new(65535, 0, 0).bump_major(),
            Err(Overflow::new(Component::Major))
        );
    }

    #[test]
    fn test_bump_minor() {
        assert_eq!(
            VersionNumber::new(3, 4, 5).bump_minor(),
            Ok(VersionNumber::new(3, 5, 0))
        );
        assert_eq!(
            VersionNumber::new(3, 255, 0).bump_minor(),
            Err(Overflow::new(Component::Minor))
        );
        // Overflow of minor must not spill into major
        assert_eq!(
            VersionNumber::new(65535, 255, 255).bump_minor().map_err(|e| e.limit()),
            Err(256)
        );
    }

    #[test]
    fn test_bump_patch() {
        for p in 0..255u8 {
            let v = VersionNumber::new(7, 8, p);
            assert_eq!(v.bump_patch(), Ok(VersionNumber::new(7, 8, p + 1)));
        }
        assert_eq!(
            VersionNumber::new(7, 8, 255).bump_patch(),
            Err(Overflow::new(Component::Patch))
        );
    }

    #[test]
    fn test_bump_dispatch() {
        let v = VersionNumber::new(1, 1, 1);
        for component in Component::ALL {
            let bumped = v.bump(component).unwrap();
            assert_eq!(bumped.get(component), 2);
            assert!(bumped > v);
        }
    }

    #[test]
    fn test_component_index() {
        for (i, component) in Component::ALL.into_iter().enumerate() {
            assert_eq!(component.index(), i);
            assert_eq!(Component::from_index(i), Some(component));
        }
        assert_eq!(Component::from_index(3), None);
    }

    #[test]
    fn test_pod_cast() {
        let versions = [VersionNumber::new(1, 0, 0), VersionNumber::new(0, 3, 0)];
        let raw: &[u32] = bytemuck::cast_slice(&versions);
        assert_eq!(raw, &[0x0001_0000, 0x0000_0300]);

        let back: &[VersionNumber] = bytemuck::cast_slice(raw);
        assert_eq!(back, &versions);
    }
}
