//! Corner relabelings of the cube and how they act on patterns and triangles.

mod action;

pub use action::{apply_to_case, apply_to_edge, apply_to_pattern, apply_to_triangle};

use crate::cube::{CornerIndex, CORNER_COUNT};
use crate::error::GeometryError;

/// A bijection on the eight corner indices.
///
/// Position `i` holds the image of corner `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permutation([CornerIndex; CORNER_COUNT]);

impl Permutation {
    /// Leaves every corner in place.
    pub const IDENTITY: Self = Self([0, 1, 2, 3, 4, 5, 6, 7]);

    /// Quarter turn about the `z` axis.
    pub const ROTATE_1: Self = Self([1, 2, 3, 0, 5, 6, 7, 4]);

    /// Quarter turn about the `x` axis.
    pub const ROTATE_2: Self = Self([3, 2, 6, 7, 0, 1, 5, 4]);

    /// Quarter turn about the `y` axis.
    pub const ROTATE_3: Self = Self([1, 5, 6, 2, 0, 4, 7, 3]);

    /// Mirror through the plane `x = 1/2`. Reverses orientation.
    pub const REFLECT: Self = Self([1, 0, 3, 2, 5, 4, 7, 6]);

    /// Creates a permutation from the images of corners `0..8`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidPermutation`] unless every corner
    /// appears exactly once.
    pub fn new(images: [CornerIndex; CORNER_COUNT]) -> Result<Self, GeometryError> {
        let mut seen = [false; CORNER_COUNT];
        for &image in &images {
            let slot = seen.get_mut(usize::from(image)).ok_or_else(|| {
                GeometryError::InvalidPermutation(format!("image {image} is not a corner"))
            })?;
            if *slot {
                return Err(GeometryError::InvalidPermutation(format!(
                    "corner {image} appears twice"
                )));
            }
            *slot = true;
        }
        Ok(Self(images))
    }

    /// Returns the image list.
    #[must_use]
    pub fn images(&self) -> &[CornerIndex; CORNER_COUNT] {
        &self.0
    }

    /// Returns the image of a single corner.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CornerOutOfRange`] if `corner` is not in `0..8`.
    pub fn image(&self, corner: CornerIndex) -> Result<CornerIndex, GeometryError> {
        self.0
            .get(usize::from(corner))
            .copied()
            .ok_or(GeometryError::CornerOutOfRange { corner })
    }

    /// Applies `self` first, then `next`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        Self(self.0.map(|corner| next.0[usize::from(corner)]))
    }

    /// Composes a sequence left to right: the first element acts first.
    ///
    /// An empty sequence yields [`Permutation::IDENTITY`].
    #[must_use]
    pub fn compose(perms: &[Self]) -> Self {
        perms
            .iter()
            .fold(Self::IDENTITY, |acc, perm| acc.then(perm))
    }

    /// Composes `self` with itself `n` times.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        (0..n).fold(Self::IDENTITY, |acc, _| acc.then(self))
    }
}

impl Default for Permutation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const GENERATORS: [Permutation; 4] = [
        Permutation::ROTATE_1,
        Permutation::ROTATE_2,
        Permutation::ROTATE_3,
        Permutation::REFLECT,
    ];

    #[test]
    fn generators_are_bijections() {
        for g in GENERATORS {
            assert_eq!(Permutation::new(*g.images()).unwrap(), g);
        }
    }

    #[test]
    fn new_rejects_duplicates_and_out_of_range() {
        assert!(matches!(
            Permutation::new([0, 0, 2, 3, 4, 5, 6, 7]),
            Err(GeometryError::InvalidPermutation(_))
        ));
        assert!(matches!(
            Permutation::new([0, 1, 2, 3, 4, 5, 6, 8]),
            Err(GeometryError::InvalidPermutation(_))
        ));
    }

    #[test]
    fn compose_empty_and_single() {
        assert_eq!(Permutation::compose(&[]), Permutation::IDENTITY);
        assert_eq!(
            Permutation::compose(&[Permutation::ROTATE_2]),
            Permutation::ROTATE_2
        );
    }

    #[test]
    fn compose_with_identity_is_neutral() {
        for g in GENERATORS {
            assert_eq!(Permutation::compose(&[Permutation::IDENTITY, g]), g);
            assert_eq!(Permutation::compose(&[g, Permutation::IDENTITY]), g);
        }
    }

    #[test]
    fn compose_applies_first_element_first() {
        let composed = Permutation::compose(&[Permutation::ROTATE_1, Permutation::REFLECT]);
        for corner in 0..8 {
            let expected = Permutation::REFLECT
                .image(Permutation::ROTATE_1.image(corner).unwrap())
                .unwrap();
            assert_eq!(composed.image(corner).unwrap(), expected);
        }
    }

    #[test]
    fn compose_is_associative() {
        for a in GENERATORS {
            for b in GENERATORS {
                for c in GENERATORS {
                    let left = Permutation::compose(&[Permutation::compose(&[a, b]), c]);
                    let right = Permutation::compose(&[a, Permutation::compose(&[b, c])]);
                    assert_eq!(left, right);
                    assert_eq!(left, Permutation::compose(&[a, b, c]));
                }
            }
        }
    }

    #[test]
    fn compose_is_not_commutative() {
        let ab = Permutation::compose(&[Permutation::ROTATE_1, Permutation::ROTATE_2]);
        let ba = Permutation::compose(&[Permutation::ROTATE_2, Permutation::ROTATE_1]);
        assert_ne!(ab, ba);
    }

    #[test]
    fn rotations_have_order_four() {
        for r in [
            Permutation::ROTATE_1,
            Permutation::ROTATE_2,
            Permutation::ROTATE_3,
        ] {
            assert_eq!(r.pow(4), Permutation::IDENTITY);
            assert_ne!(r.pow(2), Permutation::IDENTITY);
        }
    }

    #[test]
    fn reflection_is_an_involution() {
        assert_eq!(Permutation::REFLECT.pow(2), Permutation::IDENTITY);
        assert_ne!(Permutation::REFLECT, Permutation::IDENTITY);
    }

    #[test]
    fn pow_zero_and_one() {
        assert_eq!(Permutation::ROTATE_3.pow(0), Permutation::IDENTITY);
        assert_eq!(Permutation::ROTATE_3.pow(1), Permutation::ROTATE_3);
    }
}
