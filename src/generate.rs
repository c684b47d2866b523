use tracing::info_span;

use crate::closure::{BuildCaseTable, CaseTable};
use crate::error::Result;
use crate::validate::validate_table;

/// Parameters controlling table generation.
#[derive(Debug, Clone, Copy)]
pub struct GenerateParams {
    /// Seed the hand-picked inverse corrections alongside the canonical
    /// cases. Without them every inverted pattern uses naive complementation.
    pub inverse_corrections: bool,
    /// Run the edge-solid and manifold checks before returning the table.
    pub validate: bool,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            inverse_corrections: true,
            validate: true,
        }
    }
}

/// Derives the case table and, if requested, validates it.
///
/// # Errors
///
/// Returns an error if derivation fails or the table violates an invariant.
pub fn generate(params: &GenerateParams) -> Result<CaseTable> {
    let _span = info_span!("generate", ?params).entered();

    let table = BuildCaseTable::from_params(params).execute()?;
    if params.validate {
        validate_table(&table)?;
    }
    Ok(table)
}

/// Derives and validates the case table with default parameters.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_default() -> Result<CaseTable> {
    generate(&GenerateParams::default())
}
