//! Exhaustive Tic-Tac-Toe state-space atlas
//!
//! This crate provides:
//! - Enumeration of all 19683 board configurations and the 5478 that are
//!   legal under turn-alternation and win rules
//! - Symmetry reduction to the 765 equivalence classes under the D4 group
//! - Legal-move transition graphs over both the full and the canonical
//!   space, with dense enumeration-order state ids
//!
//! [`StateAtlas::build`] runs the whole pipeline and verifies the results
//! against the known closed-form counts, failing hard on any mismatch.

pub mod atlas;
pub mod board;
pub mod canonical;
pub mod enumeration;
pub mod error;
pub mod graph;
pub mod identifiers;
pub mod lines;
pub mod symmetry;
pub mod validation;

pub use atlas::{AtlasSummary, SpaceSummary, StateAtlas};
pub use board::{Board, Cell, Player, BOARD_CELLS};
pub use canonical::{canonicalize, CANONICAL_BOARD_COUNT};
pub use enumeration::{all_boards, legal_boards, LEGAL_BOARD_COUNT, TOTAL_BOARDS};
pub use error::{Error, Result};
pub use graph::{
    build_canonical_graph, build_full_graph, TransitionGraph, CANONICAL_EDGE_COUNT,
    FULL_EDGE_COUNT,
};
pub use identifiers::StateId;
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use symmetry::D4Transform;
