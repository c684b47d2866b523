use std::collections::BTreeMap;

use tracing::warn;

use crate::cases::Triangle;
use crate::cube::{edge_midpoint_doubled, CornerPattern, EdgeIndex};
use crate::error::{Result, ValidationError};

/// Squared distances between doubled edge midpoints for two edges on a
/// common cube face: 2 when the edges meet at a corner, 4 when they are
/// opposite sides of the face.
pub const BOUNDARY_DISTANCES_SQ: [i32; 2] = [2, 4];

/// Counts how many triangle sides join each unordered pair of edges.
#[must_use]
pub fn side_counts(triangles: &[Triangle]) -> BTreeMap<[EdgeIndex; 2], usize> {
    let mut counts = BTreeMap::new();
    for triangle in triangles {
        for i in 0..3 {
            let (a, b) = (triangle[i], triangle[(i + 1) % 3]);
            *counts.entry([a.min(b), a.max(b)]).or_insert(0) += 1;
        }
    }
    counts
}

/// Checks that a case forms a surface without gaps inside the cell.
///
/// A triangle side shared by exactly two triangles is an interior seam.
/// Any other side must lie on a face of the cube, where the neighbouring
/// cell continues the surface.
///
/// # Errors
///
/// Returns [`ValidationError::NonManifold`] for the first offending pair.
pub fn check_manifold(pattern: CornerPattern, triangles: &[Triangle]) -> Result<()> {
    for (edges, count) in side_counts(triangles) {
        if count == 2 {
            continue;
        }

        let offset = edge_midpoint_doubled(edges[0])? - edge_midpoint_doubled(edges[1])?;
        let distance_sq = offset.dot(&offset);
        if !BOUNDARY_DISTANCES_SQ.contains(&distance_sq) {
            warn!(
                pattern = pattern.bits(),
                ?edges,
                count,
                distance_sq,
                "unmatched triangle side inside the cell"
            );
            return Err(ValidationError::NonManifold {
                pattern: pattern.bits(),
                edges,
                count,
                distance_sq,
            }
            .into());
        }
    }
    Ok(())
}
