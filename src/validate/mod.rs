//! Topological checks a completed table must pass before it is emitted.

mod edge_solid;
mod manifold;

pub use edge_solid::check_edge_solid;
pub use manifold::{check_manifold, side_counts, BOUNDARY_DISTANCES_SQ};

use tracing::{debug, info};

use crate::closure::CaseTable;
use crate::error::Result;

/// Runs both invariant checks over every pattern of `table`.
///
/// All edge checks run before any manifold check, so a table with a bad
/// edge reports that first.
///
/// # Errors
///
/// Returns the first [`crate::error::ValidationError`] found.
pub fn validate_table(table: &CaseTable) -> Result<()> {
    for (pattern, triangles) in table.iter() {
        check_edge_solid(pattern, triangles)?;
    }
    debug!("edge-solid invariant holds");

    for (pattern, triangles) in table.iter() {
        check_manifold(pattern, triangles)?;
    }
    debug!("manifold invariant holds");

    info!(patterns = table.len(), "case table validated");
    Ok(())
}
