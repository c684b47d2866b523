//! Derives the 256-case Marching Cubes triangulation table.
//!
//! The table is generated from 15 canonical configurations plus a few
//! hand-picked inverse corrections by applying every rotation, reflection
//! and solid/empty inversion of the cube, then checked for topological
//! consistency before it is handed out.
//!
//! Inverted ambiguous configurations are only partially corrected; some can
//! still produce holes between adjacent cells.

pub mod cases;
pub mod closure;
pub mod cube;
pub mod emit;
pub mod error;
pub mod generate;
pub mod permutation;
pub mod symmetry;
pub mod validate;

pub use closure::CaseTable;
pub use error::{IsocasesError, Result};
pub use generate::{generate, generate_default, GenerateParams};
