use thiserror::Error;

/// Top-level error type for the case table generator.
#[derive(Debug, Error)]
pub enum IsocasesError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Closure(#[from] ClosureError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Errors related to cube geometry and corner permutations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("corner {corner} is out of range [0, 7]")]
    CornerOutOfRange { corner: u8 },

    #[error("edge {edge} is out of range [0, 11]")]
    EdgeOutOfRange { edge: u8 },

    #[error("corners {a} and {b} are not joined by a cube edge")]
    NotAdjacent { a: u8, b: u8 },

    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),

    #[error("permutation maps edge {edge} onto corners {a} and {b}, which share no edge")]
    MalformedEdge { edge: u8, a: u8, b: u8 },
}

/// Errors raised while deriving the full table from the base cases.
#[derive(Debug, Error)]
pub enum ClosureError {
    #[error("case table is incomplete, missing patterns {missing:?}")]
    IncompleteTable { missing: Vec<u8> },
}

/// Topological invariant violations found in a completed table.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("pattern {pattern:#010b} references edge {edge}, which does not cross the surface")]
    EdgeNotCrossing { pattern: u8, edge: u8 },

    #[error(
        "pattern {pattern:#010b} has edge pair {edges:?} used {count} times \
         at interior distance {distance_sq}"
    )]
    NonManifold {
        pattern: u8,
        edges: [u8; 2],
        count: usize,
        distance_sq: i32,
    },
}

/// Errors related to emitting the table in a fixed layout.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("pattern {pattern:#010b} has {count} triangles, layout holds at most {max}")]
    TooManyTriangles { pattern: u8, count: usize, max: usize },
}

/// Convenience type alias for results using [`IsocasesError`].
pub type Result<T> = std::result::Result<T, IsocasesError>;
