use crate::error::GeometryError;

use super::corner::{CornerIndex, CORNER_COUNT};
use super::edge::{edge_corners, EdgeIndex};

/// Which corners of a cube are solid, one bit per corner.
///
/// Bit `i` set means corner `i` is solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CornerPattern(u8);

impl CornerPattern {
    /// Number of distinct patterns.
    pub const COUNT: usize = 256;

    /// No corner solid.
    pub const EMPTY: Self = Self(0);

    /// Every corner solid.
    pub const FULL: Self = Self(u8::MAX);

    /// Creates a pattern from its bit representation.
    #[must_use]
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the bit representation.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns the pattern's position in a 256-entry table.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Builds a pattern from a set of solid corners.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CornerOutOfRange`] for any corner outside `0..8`.
    pub fn from_corners(
        corners: impl IntoIterator<Item = CornerIndex>,
    ) -> Result<Self, GeometryError> {
        corners.into_iter().try_fold(Self::EMPTY, |acc, corner| {
            if usize::from(corner) >= CORNER_COUNT {
                return Err(GeometryError::CornerOutOfRange { corner });
            }
            Ok(Self(acc.0 | (1 << corner)))
        })
    }

    /// Returns `true` if `corner` is solid. Out-of-range corners are never solid.
    #[must_use]
    pub fn is_solid(self, corner: CornerIndex) -> bool {
        usize::from(corner) < CORNER_COUNT && self.0 & (1 << corner) != 0
    }

    /// Iterates the solid corners in ascending order.
    pub fn corners(self) -> impl Iterator<Item = CornerIndex> {
        (0..8).filter(move |&corner| self.is_solid(corner))
    }

    /// Swaps solid and empty corners.
    #[must_use]
    pub fn complement(self) -> Self {
        Self(!self.0)
    }

    /// Returns `true` if exactly one endpoint of `edge` is solid.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EdgeOutOfRange`] if `edge` is not in `0..12`.
    pub fn crosses(self, edge: EdgeIndex) -> Result<bool, GeometryError> {
        let [a, b] = edge_corners(edge)?;
        Ok(self.is_solid(a) != self.is_solid(b))
    }

    /// Iterates all 256 patterns in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=u8::MAX).map(Self)
    }
}

impl From<u8> for CornerPattern {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<CornerPattern> for u8 {
    fn from(pattern: CornerPattern) -> Self {
        pattern.0
    }
}
