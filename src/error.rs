//! Error types for the state-space atlas

use thiserror::Error;

/// Main error type for the atlas crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    OccupiedCell { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("board string has {got} cells, expected {expected} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("legal state enumeration produced {actual} boards, expected {expected}")]
    LegalStateCount { expected: usize, actual: usize },

    #[error("canonicalization produced {actual} representatives, expected {expected}")]
    CanonicalStateCount { expected: usize, actual: usize },

    #[error("{space} transition graph has {actual} edges, expected {expected}")]
    EdgeCount {
        space: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("candidate board '{board}' is missing from the full-space id table")]
    UnknownFullTarget { board: String },

    #[error("no orbit variant of candidate board '{board}' is in the canonical id table")]
    UnresolvedCanonicalTarget { board: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
