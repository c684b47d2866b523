use crate::cases::CaseEntry;
use crate::cube::CornerPattern;
use crate::error::{ClosureError, GeometryError};

use super::table::{CaseTable, Provenance, TableEntry};

/// Accumulates a case table one pattern at a time.
///
/// The only mutation is [`Self::insert_if_absent`]: the first entry written
/// for a pattern is final. Callers encode precedence purely through the
/// order of their inserts.
#[derive(Debug, Clone)]
pub struct CaseTableBuilder {
    slots: Vec<Option<TableEntry>>,
}

impl CaseTableBuilder {
    /// Creates a builder with all 256 slots empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![None; CornerPattern::COUNT],
        }
    }

    /// Returns `true` if `pattern` already has an entry.
    #[must_use]
    pub fn contains(&self, pattern: CornerPattern) -> bool {
        self.slots[pattern.index()].is_some()
    }

    /// Number of filled slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns `true` if no slot is filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fills the slot for `pattern` unless it is already taken.
    ///
    /// `triangles` is only evaluated when the slot is free. Returns whether
    /// an insert happened.
    ///
    /// # Errors
    ///
    /// Propagates any error from `triangles`; the slot stays empty.
    pub fn insert_if_absent<F>(
        &mut self,
        pattern: CornerPattern,
        provenance: Provenance,
        triangles: F,
    ) -> Result<bool, GeometryError>
    where
        F: FnOnce() -> Result<CaseEntry, GeometryError>,
    {
        let slot = &mut self.slots[pattern.index()];
        if slot.is_some() {
            return Ok(false);
        }
        *slot = Some(TableEntry {
            triangles: triangles()?,
            provenance,
        });
        Ok(true)
    }

    /// Freezes the builder into a table.
    ///
    /// # Errors
    ///
    /// Returns [`ClosureError::IncompleteTable`] listing every empty slot.
    pub fn finish(self) -> Result<CaseTable, ClosureError> {
        let missing: Vec<u8> = CornerPattern::all()
            .filter(|p| !self.contains(*p))
            .map(CornerPattern::bits)
            .collect();
        if !missing.is_empty() {
            return Err(ClosureError::IncompleteTable { missing });
        }

        let entries = self.slots.into_iter().flatten().collect();
        Ok(CaseTable::from_complete(entries))
    }
}

impl Default for CaseTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
