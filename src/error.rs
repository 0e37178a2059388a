//! Error types for the comgeom converter

use std::io;
use thiserror::Error;

/// Fatal error that stops a conversion run
#[derive(Debug, Error)]
pub enum ComGeomError {
    /// IO error occurred while reading the deck or writing the database
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input stream held no title card
    #[error("Empty input file: no title record")]
    EmptyInput,

    /// A dialect that requires a control card reached end of stream
    #[error("Missing control card after title")]
    MissingControlCard,

    /// End of stream while a record was still expecting lines
    #[error("Premature end of input at line {line} while reading {context}")]
    PrematureEof { context: String, line: usize },

    /// Fewer solids were read than the control card declared
    #[error("Only {actual} solids read, {expected} expected")]
    SolidCountMismatch { expected: usize, actual: usize },

    /// Region number does not fit the region table
    #[error("Region number {region} at line {line} is outside 1..={limit}")]
    RegionOutOfRange {
        region: i64,
        limit: usize,
        line: usize,
    },

    /// Structurally invalid record
    #[error("Invalid record at line {line}: {message}")]
    InvalidRecord { line: usize, message: String },

    /// The output database already holds an object of that name
    #[error("Duplicate object name: {0}")]
    DuplicateName(String),

    /// The output database refused an operation
    #[error("Database error: {0}")]
    Database(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for comgeom operations
pub type Result<T> = std::result::Result<T, ComGeomError>;

impl From<String> for ComGeomError {
    fn from(s: String) -> Self {
        ComGeomError::Custom(s)
    }
}

impl From<&str> for ComGeomError {
    fn from(s: &str) -> Self {
        ComGeomError::Custom(s.to_string())
    }
}

/// Failure to reconstruct a single solid.
///
/// These never stop a run: the solid is reported and skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolidError {
    /// The deck ran out of continuation cards before the payload was complete
    #[error("needs {needed} fields, only {found} present")]
    InsufficientFields { needed: usize, found: usize },

    /// The type tag names no supported primitive
    #[error("unknown solid type '{0}'")]
    UnknownType(String),

    /// A direction or axis vector has (near) zero magnitude
    #[error("degenerate {0}")]
    Degenerate(String),

    /// A count, radius or ratio is outside its legal range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A half-space plane contributes no face
    #[error("face {face} unused, solid is not convex")]
    NotConvex { face: usize },
}
