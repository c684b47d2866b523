use crate::cases::{CaseEntry, Triangle};
use crate::cube::CornerPattern;

/// How a table entry was produced, in decreasing order of precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Copied verbatim from a canonical case or an inverse correction.
    Seed,
    /// Rotated and/or reflected from a seed.
    Orbit,
    /// Derived through solid/empty inversion.
    InvertedOrbit,
}

/// A single slot of the case table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    /// Triangles for this pattern, possibly none.
    pub triangles: CaseEntry,
    /// Which derivation step filled the slot.
    pub provenance: Provenance,
}

/// The complete triangulation table, one entry per corner pattern.
///
/// Only [`super::CaseTableBuilder::finish`] creates it, and only once every
/// pattern has an entry, so lookups never miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseTable {
    entries: Vec<TableEntry>,
}

impl CaseTable {
    pub(super) fn from_complete(entries: Vec<TableEntry>) -> Self {
        debug_assert_eq!(entries.len(), CornerPattern::COUNT);
        Self { entries }
    }

    /// Returns the triangles for a pattern.
    #[must_use]
    pub fn get(&self, pattern: CornerPattern) -> &[Triangle] {
        &self.entries[pattern.index()].triangles
    }

    /// Returns the full entry for a pattern.
    #[must_use]
    pub fn entry(&self, pattern: CornerPattern) -> &TableEntry {
        &self.entries[pattern.index()]
    }

    /// Iterates `(pattern, triangles)` in ascending pattern order.
    pub fn iter(&self) -> impl Iterator<Item = (CornerPattern, &[Triangle])> {
        CornerPattern::all().zip(self.entries.iter().map(|e| e.triangles.as_slice()))
    }

    /// Number of entries, always 256.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a finished table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts entries filled by the given derivation step.
    #[must_use]
    pub fn count_by(&self, provenance: Provenance) -> usize {
        self.entries
            .iter()
            .filter(|e| e.provenance == provenance)
            .count()
    }

    /// Consumes the table, returning the triangle lists in pattern order.
    #[must_use]
    pub fn into_cases(self) -> Vec<CaseEntry> {
        self.entries.into_iter().map(|e| e.triangles).collect()
    }
}
