use nalgebra::Point3;

use crate::error::GeometryError;

use super::corner::{corner_position, CornerIndex, CORNER_COUNT};

/// Index of a cube edge in `0..12`.
pub type EdgeIndex = u8;

/// Number of edges of a cube.
pub const EDGE_COUNT: usize = 12;

/// Edges of the cube as pairs of corner indices.
pub const EDGES: [[CornerIndex; 2]; EDGE_COUNT] = [
    [0, 1], // Edge 0:  bottom face
    [1, 2], // Edge 1
    [2, 3], // Edge 2
    [3, 0], // Edge 3
    [4, 5], // Edge 4:  top face
    [5, 6], // Edge 5
    [6, 7], // Edge 6
    [7, 4], // Edge 7
    [0, 4], // Edge 8:  verticals
    [1, 5], // Edge 9
    [2, 6], // Edge 10
    [3, 7], // Edge 11
];

const NO_EDGE: u8 = u8::MAX;

/// Edge index keyed by both orderings of its corner pair, `NO_EDGE` elsewhere.
const EDGE_BY_CORNERS: [[u8; CORNER_COUNT]; CORNER_COUNT] = build_edge_lookup();

#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
const fn build_edge_lookup() -> [[u8; CORNER_COUNT]; CORNER_COUNT] {
    let mut table = [[NO_EDGE; CORNER_COUNT]; CORNER_COUNT];
    let mut edge = 0;

    while edge < EDGE_COUNT {
        let a = EDGES[edge][0] as usize;
        let b = EDGES[edge][1] as usize;
        table[a][b] = edge as u8;
        table[b][a] = edge as u8;
        edge += 1;
    }

    table
}

/// Looks up the edge joining two corners.
///
/// The pair is unordered. Only corners that differ in exactly one coordinate
/// share an edge; face diagonals, the space diagonal, and a corner paired with
/// itself have none.
///
/// # Errors
///
/// Returns [`GeometryError::CornerOutOfRange`] for an invalid corner and
/// [`GeometryError::NotAdjacent`] if the corners share no edge.
pub fn edge_between(a: CornerIndex, b: CornerIndex) -> Result<EdgeIndex, GeometryError> {
    for corner in [a, b] {
        if usize::from(corner) >= CORNER_COUNT {
            return Err(GeometryError::CornerOutOfRange { corner });
        }
    }

    match EDGE_BY_CORNERS[usize::from(a)][usize::from(b)] {
        NO_EDGE => Err(GeometryError::NotAdjacent { a, b }),
        edge => Ok(edge),
    }
}

/// Returns the two corners an edge connects.
///
/// # Errors
///
/// Returns [`GeometryError::EdgeOutOfRange`] if `edge` is not in `0..12`.
pub fn edge_corners(edge: EdgeIndex) -> Result<[CornerIndex; 2], GeometryError> {
    EDGES
        .get(usize::from(edge))
        .copied()
        .ok_or(GeometryError::EdgeOutOfRange { edge })
}

/// Returns the midpoint of an edge scaled by two, so it stays integral.
///
/// # Errors
///
/// Returns [`GeometryError::EdgeOutOfRange`] if `edge` is not in `0..12`.
pub fn edge_midpoint_doubled(edge: EdgeIndex) -> Result<Point3<i32>, GeometryError> {
    let [a, b] = edge_corners(edge)?;
    let sum = corner_position(a)?.coords + corner_position(b)?.coords;
    Ok(Point3::from(sum))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn every_edge_joins_neighbouring_corners() {
        for [a, b] in EDGES {
            let d = corner_position(a).unwrap() - corner_position(b).unwrap();
            assert_eq!(d.dot(&d), 1, "edge ({a}, {b}) is not unit length");
        }
    }

    #[test]
    fn lookup_is_unordered_and_total_over_edges() {
        for (i, [a, b]) in EDGES.into_iter().enumerate() {
            assert_eq!(usize::from(edge_between(a, b).unwrap()), i);
            assert_eq!(usize::from(edge_between(b, a).unwrap()), i);
        }
    }

    #[test]
    fn lookup_rejects_non_adjacent_pairs() {
        // face diagonal
        assert!(matches!(
            edge_between(0, 2),
            Err(GeometryError::NotAdjacent { a: 0, b: 2 })
        ));
        // space diagonal
        assert!(matches!(
            edge_between(0, 6),
            Err(GeometryError::NotAdjacent { .. })
        ));
        assert!(matches!(
            edge_between(5, 5),
            Err(GeometryError::NotAdjacent { .. })
        ));
    }

    #[test]
    fn lookup_rejects_invalid_corner() {
        assert!(matches!(
            edge_between(0, 9),
            Err(GeometryError::CornerOutOfRange { corner: 9 })
        ));
    }

    #[test]
    fn exactly_twelve_adjacent_pairs() {
        let mut adjacent = 0;
        for a in 0..8 {
            for b in (a + 1)..8 {
                if edge_between(a, b).is_ok() {
                    adjacent += 1;
                }
            }
        }
        assert_eq!(adjacent, EDGE_COUNT);
    }

    #[test]
    fn doubled_midpoints() {
        assert_eq!(edge_midpoint_doubled(0).unwrap(), Point3::new(1, 0, 0));
        assert_eq!(edge_midpoint_doubled(6).unwrap(), Point3::new(1, 2, 2));
        assert_eq!(edge_midpoint_doubled(11).unwrap(), Point3::new(0, 2, 1));
        assert!(edge_midpoint_doubled(12).is_err());
    }
}
