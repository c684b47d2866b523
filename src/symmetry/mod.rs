//! The symmetry operations used to derive new cases from the seeds.
//!
//! Each operation is a corner permutation built as
//! `ROTATE_1^r1, ROTATE_2^r2, ROTATE_3^r3, REFLECT^s` (applied in that order)
//! plus an optional solid/empty inversion. With `r* in 0..4` and `s in 0..2`
//! there are 128 permutation combinations per inversion state, 256 in total.
//! They cover all 48 symmetries of the cube, several of them more than once.
//!
//! Enumeration order is fixed: the whole non-inverted pass comes before the
//! inverted pass, and within a pass `r1` varies slowest and `s` fastest.

use itertools::iproduct;

use crate::cases::{CaseEntry, Triangle};
use crate::cube::CornerPattern;
use crate::error::GeometryError;
use crate::permutation::{self, Permutation};

/// Number of distinct powers of each rotation generator.
pub const ROTATION_ORDER: u32 = 4;

/// Number of operations in one inversion pass.
pub const OPS_PER_PASS: usize = 128;

/// A corner permutation optionally followed by solid/empty inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymmetryOp {
    rotations: [u32; 3],
    reflect: bool,
    invert: bool,
    permutation: Permutation,
}

impl SymmetryOp {
    /// Builds the operation for the given generator powers.
    #[must_use]
    pub fn new(rotations: [u32; 3], reflect: bool, invert: bool) -> Self {
        let [r1, r2, r3] = rotations;
        let permutation = Permutation::compose(&[
            Permutation::ROTATE_1.pow(r1),
            Permutation::ROTATE_2.pow(r2),
            Permutation::ROTATE_3.pow(r3),
            Permutation::REFLECT.pow(u32::from(reflect)),
        ]);
        Self {
            rotations,
            reflect,
            invert,
            permutation,
        }
    }

    /// The operation that changes nothing.
    #[must_use]
    pub fn identity() -> Self {
        Self::new([0; 3], false, false)
    }

    /// Powers of the three rotation generators.
    #[must_use]
    pub fn rotations(&self) -> [u32; 3] {
        self.rotations
    }

    /// Whether the reflection generator is applied.
    #[must_use]
    pub fn reflects(&self) -> bool {
        self.reflect
    }

    /// Whether solid and empty corners are swapped.
    #[must_use]
    pub fn inverts(&self) -> bool {
        self.invert
    }

    /// The composed corner permutation.
    #[must_use]
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// Whether triangles must be reversed to keep facing outward.
    ///
    /// Reflection and inversion each turn the surface inside out; together
    /// they cancel.
    #[must_use]
    pub fn flips_winding(&self) -> bool {
        self.invert ^ self.reflect
    }

    /// Maps a corner pattern: permute, then complement if inverting.
    #[must_use]
    pub fn apply_to_pattern(&self, pattern: CornerPattern) -> CornerPattern {
        let moved = permutation::apply_to_pattern(&self.permutation, pattern);
        if self.invert {
            moved.complement()
        } else {
            moved
        }
    }

    /// Maps a triangle list, flipping winding as [`Self::flips_winding`] says.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::MalformedEdge`] if the permutation does not
    /// preserve cube edges.
    pub fn apply_to_case(&self, triangles: &[Triangle]) -> Result<CaseEntry, GeometryError> {
        permutation::apply_to_case(&self.permutation, triangles, self.flips_winding())
    }
}

/// Enumerates the 128 operations sharing one inversion state.
pub fn pass(invert: bool) -> impl Iterator<Item = SymmetryOp> {
    iproduct!(
        0..ROTATION_ORDER,
        0..ROTATION_ORDER,
        0..ROTATION_ORDER,
        [false, true]
    )
    .map(move |(r1, r2, r3, reflect)| SymmetryOp::new([r1, r2, r3], reflect, invert))
}

/// Enumerates all 256 operations, non-inverted pass first.
pub fn all_ops() -> impl Iterator<Item = SymmetryOp> {
    pass(false).chain(pass(true))
}
