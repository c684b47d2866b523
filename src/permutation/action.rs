use crate::cases::{CaseEntry, Triangle};
use crate::cube::{edge_between, edge_corners, CornerPattern, EdgeIndex};
use crate::error::GeometryError;

use super::Permutation;

/// Moves every solid corner of `pattern` to its image under `perm`.
#[must_use]
pub fn apply_to_pattern(perm: &Permutation, pattern: CornerPattern) -> CornerPattern {
    let images = perm.images();
    let bits = pattern
        .corners()
        .fold(0u8, |acc, corner| acc | (1 << images[usize::from(corner)]));
    CornerPattern::new(bits)
}

/// Maps an edge to the edge joining the images of its two corners.
///
/// # Errors
///
/// Returns [`GeometryError::MalformedEdge`] if the images are not adjacent,
/// which means `perm` is not a symmetry of the cube.
pub fn apply_to_edge(perm: &Permutation, edge: EdgeIndex) -> Result<EdgeIndex, GeometryError> {
    let [a, b] = edge_corners(edge)?;
    let (a, b) = (perm.image(a)?, perm.image(b)?);
    edge_between(a, b).map_err(|_| GeometryError::MalformedEdge { edge, a, b })
}

/// Maps each edge of a triangle, reversing the vertex order if `flip_winding`.
///
/// # Errors
///
/// Returns an error if any edge fails to map, see [`apply_to_edge`].
pub fn apply_to_triangle(
    perm: &Permutation,
    triangle: Triangle,
    flip_winding: bool,
) -> Result<Triangle, GeometryError> {
    let mut mapped = [0; 3];
    for (slot, edge) in mapped.iter_mut().zip(triangle) {
        *slot = apply_to_edge(perm, edge)?;
    }
    if flip_winding {
        mapped.reverse();
    }
    Ok(mapped)
}

/// Maps every triangle of a case, keeping the list order.
///
/// # Errors
///
/// Returns an error if any edge fails to map, see [`apply_to_edge`].
pub fn apply_to_case(
    perm: &Permutation,
    triangles: &[Triangle],
    flip_winding: bool,
) -> Result<CaseEntry, GeometryError> {
    triangles
        .iter()
        .map(|&triangle| apply_to_triangle(perm, triangle, flip_winding))
        .collect()
}
