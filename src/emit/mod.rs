//! Output layouts for a validated case table.
//!
//! [`cases`] is the canonical form: 256 triangle lists in pattern order.
//! [`padded_table`] and [`edge_masks`] produce the fixed-size arrays most
//! marching cubes extractors embed as `TRI_TABLE` and `EDGE_TABLE`.

use crate::cases::CaseEntry;
use crate::closure::CaseTable;
use crate::cube::{CornerPattern, EDGE_COUNT};
use crate::error::{EmitError, Result};

/// Most triangles any case may hold in the padded layout.
pub const MAX_TRIANGLES: usize = 5;

/// Width of a padded row: every triangle plus a terminating `-1`.
pub const PADDED_WIDTH: usize = 3 * MAX_TRIANGLES + 1;

/// Returns the 256 triangle lists in ascending pattern order.
#[must_use]
pub fn cases(table: &CaseTable) -> Vec<CaseEntry> {
    table.iter().map(|(_, triangles)| triangles.to_vec()).collect()
}

/// Flattens each case into a row of edge indices terminated by `-1`.
///
/// # Errors
///
/// Returns [`EmitError::TooManyTriangles`] if a case exceeds
/// [`MAX_TRIANGLES`].
pub fn padded_table(table: &CaseTable) -> Result<[[i8; PADDED_WIDTH]; CornerPattern::COUNT]> {
    let mut rows = [[-1i8; PADDED_WIDTH]; CornerPattern::COUNT];
    for ((pattern, triangles), row) in table.iter().zip(rows.iter_mut()) {
        if triangles.len() > MAX_TRIANGLES {
            return Err(EmitError::TooManyTriangles {
                pattern: pattern.bits(),
                count: triangles.len(),
                max: MAX_TRIANGLES,
            }
            .into());
        }
        for (slot, &edge) in row.iter_mut().zip(triangles.iter().flatten()) {
            #[allow(clippy::cast_possible_wrap)]
            let edge = edge as i8;
            *slot = edge;
        }
    }
    Ok(rows)
}

/// For each pattern, sets bit `e` when some triangle uses edge `e`.
#[must_use]
pub fn edge_masks(table: &CaseTable) -> [u16; CornerPattern::COUNT] {
    let mut masks = [0u16; CornerPattern::COUNT];
    for ((_, triangles), mask) in table.iter().zip(masks.iter_mut()) {
        *mask = triangles
            .iter()
            .flatten()
            .filter(|&&edge| usize::from(edge) < EDGE_COUNT)
            .fold(0, |acc, &edge| acc | (1 << edge));
    }
    masks
}
