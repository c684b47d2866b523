use nalgebra::Point3;

use crate::error::GeometryError;

/// Index of a cube corner in `0..8`.
pub type CornerIndex = u8;

/// Number of corners of a cube.
pub const CORNER_COUNT: usize = 8;

/// Corner coordinates of the unit cube, indexed by [`CornerIndex`].
///
/// The numbering walks the bottom face (`z = 0`) counter-clockwise, then the
/// top face in the same order. Consumers of the generated table rely on it.
pub const CORNERS: [[i32; 3]; CORNER_COUNT] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

/// Returns the integer position of a corner.
///
/// # Errors
///
/// Returns [`GeometryError::CornerOutOfRange`] if `corner` is not in `0..8`.
pub fn corner_position(corner: CornerIndex) -> Result<Point3<i32>, GeometryError> {
    CORNERS
        .get(usize::from(corner))
        .map(|&coords| Point3::from(coords))
        .ok_or(GeometryError::CornerOutOfRange { corner })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_distinct_unit_cube_vertices() {
        for (i, a) in CORNERS.iter().enumerate() {
            assert!(a.iter().all(|&c| c == 0 || c == 1));
            for b in &CORNERS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn corner_position_matches_table() {
        assert_eq!(corner_position(6).unwrap(), Point3::new(1, 1, 1));
        assert_eq!(corner_position(3).unwrap(), Point3::new(0, 1, 0));
    }

    #[test]
    fn corner_position_out_of_range() {
        assert!(matches!(
            corner_position(8),
            Err(GeometryError::CornerOutOfRange { corner: 8 })
        ));
    }
}
