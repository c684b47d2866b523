use tracing::warn;

use crate::cases::Triangle;
use crate::cube::CornerPattern;
use crate::error::{Result, ValidationError};

/// Checks that every edge a case references has exactly one solid endpoint.
///
/// Only such edges carry a surface crossing, so any other edge would place a
/// vertex where the field does not change sign.
///
/// # Errors
///
/// Returns [`ValidationError::EdgeNotCrossing`] for the first offending edge,
/// or a geometry error for an edge index outside `0..12`.
pub fn check_edge_solid(pattern: CornerPattern, triangles: &[Triangle]) -> Result<()> {
    for &edge in triangles.iter().flatten() {
        if !pattern.crosses(edge)? {
            warn!(pattern = pattern.bits(), edge, "edge does not cross the surface");
            return Err(ValidationError::EdgeNotCrossing {
                pattern: pattern.bits(),
                edge,
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, IsocasesError};

    #[test]
    fn single_corner_case_passes() {
        check_edge_solid(CornerPattern::new(0b0000_0001), &[[8, 0, 3]]).unwrap();
    }

    #[test]
    fn empty_case_passes_for_any_pattern() {
        for p in CornerPattern::all() {
            check_edge_solid(p, &[]).unwrap();
        }
    }

    #[test]
    fn edge_between_two_empty_corners_fails() {
        let result = check_edge_solid(CornerPattern::new(0b0000_0001), &[[8, 0, 1]]);
        assert!(matches!(
            result,
            Err(IsocasesError::Validation(ValidationError::EdgeNotCrossing {
                pattern: 1,
                edge: 1
            }))
        ));
    }

    #[test]
    fn edge_between_two_solid_corners_fails() {
        let result = check_edge_solid(CornerPattern::new(0b0000_0011), &[[8, 0, 3]]);
        assert!(matches!(
            result,
            Err(IsocasesError::Validation(ValidationError::EdgeNotCrossing {
                edge: 0,
                ..
            }))
        ));
    }

    #[test]
    fn out_of_range_edge_is_a_geometry_error() {
        let result = check_edge_solid(CornerPattern::new(0b0000_0001), &[[8, 0, 12]]);
        assert!(matches!(
            result,
            Err(IsocasesError::Geometry(GeometryError::EdgeOutOfRange { edge: 12 }))
        ));
    }
}
