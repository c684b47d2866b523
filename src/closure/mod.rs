//! Derivation of the complete 256-entry table from the seed cases.

mod build;
mod builder;
mod table;

pub use build::BuildCaseTable;
pub use builder::CaseTableBuilder;
pub use table::{CaseTable, Provenance, TableEntry};
