use tracing::{debug, info};

use crate::cases::{seed_cases, BaseCase};
use crate::error::{GeometryError, Result};
use crate::generate::GenerateParams;
use crate::symmetry::{self, SymmetryOp};

use super::builder::CaseTableBuilder;
use super::table::{CaseTable, Provenance};

/// Derives the full case table by applying every symmetry to every seed.
///
/// Precedence, highest first:
/// 1. seeds at their own pattern (canonical cases, then inverse corrections),
/// 2. rotations and reflections of seeds,
/// 3. inversions of those.
///
/// Within steps 2 and 3 operations run in [`symmetry::pass`] order and seeds
/// in their given order. Since a slot is never overwritten, an inverse
/// correction always beats the naive inversion targeting the same pattern.
pub struct BuildCaseTable {
    seeds: Vec<BaseCase>,
}

impl BuildCaseTable {
    /// Creates a new `BuildCaseTable` operation over the given seeds.
    #[must_use]
    pub fn new(seeds: Vec<BaseCase>) -> Self {
        Self { seeds }
    }

    /// Creates the operation over the seed set selected by `params`.
    #[must_use]
    pub fn from_params(params: &GenerateParams) -> Self {
        Self::new(seed_cases(params.inverse_corrections))
    }

    /// Executes the derivation.
    ///
    /// # Errors
    ///
    /// Returns an error if a symmetry fails to map an edge, or if some
    /// pattern is unreachable from the seeds.
    pub fn execute(&self) -> Result<CaseTable> {
        let mut builder = CaseTableBuilder::new();

        let mut added = 0;
        for seed in &self.seeds {
            let inserted = builder.insert_if_absent(seed.pattern, Provenance::Seed, || {
                Ok(seed.triangles.to_vec())
            })?;
            if inserted {
                added += 1;
            }
        }
        debug!(added, "seeded case table");

        let passes = [
            (false, Provenance::Orbit),
            (true, Provenance::InvertedOrbit),
        ];
        for (invert, provenance) in passes {
            let added = self.derive(&mut builder, symmetry::pass(invert), provenance)?;
            debug!(
                added,
                ?provenance,
                filled = builder.len(),
                "derivation pass complete"
            );
        }

        let table = builder.finish()?;
        info!(
            seeds = table.count_by(Provenance::Seed),
            orbit = table.count_by(Provenance::Orbit),
            inverted = table.count_by(Provenance::InvertedOrbit),
            "case table complete"
        );
        Ok(table)
    }

    fn derive(
        &self,
        builder: &mut CaseTableBuilder,
        ops: impl Iterator<Item = SymmetryOp>,
        provenance: Provenance,
    ) -> std::result::Result<usize, GeometryError> {
        let mut added = 0;
        for op in ops {
            for seed in &self.seeds {
                let pattern = op.apply_to_pattern(seed.pattern);
                let inserted = builder.insert_if_absent(pattern, provenance, || {
                    op.apply_to_case(seed.triangles)
                })?;
                if inserted {
                    added += 1;
                }
            }
        }
        Ok(added)
    }
}
