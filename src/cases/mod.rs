//! Hand-curated seed triangulations the full table is derived from.

mod base;

use crate::cube::{CornerPattern, EdgeIndex};

/// Three cube edges, in winding order, whose crossings form one triangle.
pub type Triangle = [EdgeIndex; 3];

/// The triangles emitted for one corner pattern.
pub type CaseEntry = Vec<Triangle>;

/// Where a seed triangulation comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedKind {
    /// One of the 15 canonical configurations.
    Canonical,
    /// A hand-picked replacement for a naively inverted configuration.
    InverseCorrection,
}

/// A seed triangulation for a single corner pattern.
#[derive(Debug, Clone, Copy)]
pub struct BaseCase {
    /// The pattern this triangulation belongs to.
    pub pattern: CornerPattern,
    /// The triangles, as edge triples.
    pub triangles: &'static [Triangle],
    /// Canonical case or inverse correction.
    pub kind: SeedKind,
}

/// Returns the 15 canonical cases.
#[must_use]
pub fn canonical_cases() -> Vec<BaseCase> {
    from_table(&base::CANONICAL, SeedKind::Canonical)
}

/// Returns the inverse-case corrections.
#[must_use]
pub fn inverse_corrections() -> Vec<BaseCase> {
    from_table(&base::INVERSE_CORRECTIONS, SeedKind::InverseCorrection)
}

/// Returns the seeds derivation starts from: the canonical cases followed by
/// the inverse corrections when `with_corrections` is set.
///
/// The order is significant, earlier seeds win ties during derivation.
#[must_use]
pub fn seed_cases(with_corrections: bool) -> Vec<BaseCase> {
    let mut seeds = canonical_cases();
    if with_corrections {
        seeds.extend(inverse_corrections());
    }
    seeds
}

fn from_table(table: &[(u8, &'static [Triangle])], kind: SeedKind) -> Vec<BaseCase> {
    table
        .iter()
        .map(|&(bits, triangles)| BaseCase {
            pattern: CornerPattern::new(bits),
            triangles,
            kind,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn fifteen_canonical_cases_with_distinct_patterns() {
        let cases = canonical_cases();
        assert_eq!(cases.len(), 15);
        let patterns: HashSet<_> = cases.iter().map(|c| c.pattern).collect();
        assert_eq!(patterns.len(), 15);
    }

    #[test]
    fn corrections_do_not_shadow_canonical_cases() {
        let canonical: HashSet<_> = canonical_cases().iter().map(|c| c.pattern).collect();
        for correction in inverse_corrections() {
            assert!(!canonical.contains(&correction.pattern));
            assert_eq!(correction.kind, SeedKind::InverseCorrection);
        }
    }

    #[test]
    fn seeds_reference_only_crossing_edges() {
        for seed in seed_cases(true) {
            for edge in seed.triangles.iter().flatten() {
                assert!(
                    seed.pattern.crosses(*edge).unwrap(),
                    "seed {:#010b} uses edge {edge}",
                    seed.pattern.bits()
                );
            }
        }
    }

    #[test]
    fn seed_order_puts_corrections_last() {
        let seeds = seed_cases(true);
        assert_eq!(seeds.len(), 19);
        assert!(seeds[..15].iter().all(|s| s.kind == SeedKind::Canonical));
        assert_eq!(seeds[15].pattern.bits(), 255 - 0b0000_0101);
        assert_eq!(seed_cases(false).len(), 15);
    }

    #[test]
    fn empty_and_single_corner_seeds() {
        let seeds = canonical_cases();
        assert!(seeds[0].triangles.is_empty());
        assert_eq!(seeds[1].pattern.bits(), 0b0000_0001);
        assert_eq!(seeds[1].triangles.to_vec(), vec![[8, 0, 3]]);
    }
}
