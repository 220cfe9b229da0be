//! The enumeration–canonicalization–transition pipeline

use serde::Serialize;

use crate::board::{Board, Player};
use crate::canonical::{canonicalize, CANONICAL_BOARD_COUNT};
use crate::enumeration::legal_boards;
use crate::error::{Error, Result};
use crate::graph::{
    build_canonical_graph, build_full_graph, TransitionGraph, CANONICAL_EDGE_COUNT,
    FULL_EDGE_COUNT,
};

/// The complete state-space atlas: both board tables and both transition
/// graphs, frozen at construction.
///
/// Ids are dense and 0-based in both spaces; a board's id is its position
/// in the corresponding table. The atlas is the hand-off format for
/// rendering or reporting consumers, which only ever read it.
///
/// # Examples
///
/// ```
/// use ttt_atlas::StateAtlas;
///
/// let atlas = StateAtlas::build()?;
/// assert_eq!(atlas.full_boards().len(), 5478);
/// assert_eq!(atlas.canonical_boards().len(), 765);
/// # Ok::<(), ttt_atlas::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateAtlas {
    full_boards: Vec<Board>,
    canonical_boards: Vec<Board>,
    full_graph: TransitionGraph,
    canonical_graph: TransitionGraph,
}

impl StateAtlas {
    /// Run the whole pipeline.
    ///
    /// Phase 1 builds the id tables: the legal boards in enumeration order,
    /// then their canonical representatives. Phase 2 derives both
    /// transition graphs against the finished tables (canonical ids depend
    /// on full-space enumeration order, and target resolution needs the
    /// tables complete, so the phases never interleave).
    ///
    /// # Errors
    ///
    /// Any count mismatch against the known closed-form values (5478 legal
    /// boards, 765 classes, 16167 full edges, 2096 canonical edges) or an
    /// unresolvable transition target aborts the build. A run that trips
    /// one of these has a defect in validation, enumeration order, or
    /// canonicalization, and none of its output can be trusted.
    pub fn build() -> Result<StateAtlas> {
        let full_boards = legal_boards()?;
        let canonical_boards = canonicalize(&full_boards);
        if canonical_boards.len() != CANONICAL_BOARD_COUNT {
            return Err(Error::CanonicalStateCount {
                expected: CANONICAL_BOARD_COUNT,
                actual: canonical_boards.len(),
            });
        }

        let full_graph = build_full_graph(&full_boards)?;
        let canonical_graph = build_canonical_graph(&canonical_boards)?;

        if full_graph.edge_count() != FULL_EDGE_COUNT {
            return Err(Error::EdgeCount {
                space: "full",
                expected: FULL_EDGE_COUNT,
                actual: full_graph.edge_count(),
            });
        }
        if canonical_graph.edge_count() != CANONICAL_EDGE_COUNT {
            return Err(Error::EdgeCount {
                space: "canonical",
                expected: CANONICAL_EDGE_COUNT,
                actual: canonical_graph.edge_count(),
            });
        }

        Ok(StateAtlas {
            full_boards,
            canonical_boards,
            full_graph,
            canonical_graph,
        })
    }

    /// All legal boards, indexed by full-space id.
    pub fn full_boards(&self) -> &[Board] {
        &self.full_boards
    }

    /// Canonical representatives, indexed by canonical-space id.
    pub fn canonical_boards(&self) -> &[Board] {
        &self.canonical_boards
    }

    /// Transition graph over the full space.
    pub fn full_graph(&self) -> &TransitionGraph {
        &self.full_graph
    }

    /// Transition graph over the canonical space.
    pub fn canonical_graph(&self) -> &TransitionGraph {
        &self.canonical_graph
    }

    /// Aggregate counts for both spaces.
    pub fn summary(&self) -> AtlasSummary {
        AtlasSummary {
            full: summarize(&self.full_boards, &self.full_graph),
            canonical: summarize(&self.canonical_boards, &self.canonical_graph),
        }
    }
}

/// Scalar counts for reporting, one block per space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AtlasSummary {
    pub full: SpaceSummary,
    pub canonical: SpaceSummary,
}

/// Counts describing one state space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpaceSummary {
    pub states: usize,
    pub edges: usize,
    pub terminal_states: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

fn summarize(boards: &[Board], graph: &TransitionGraph) -> SpaceSummary {
    let mut summary = SpaceSummary {
        states: boards.len(),
        edges: graph.edge_count(),
        terminal_states: 0,
        x_wins: 0,
        o_wins: 0,
        draws: 0,
    };

    for board in boards {
        if board.is_terminal() {
            summary.terminal_states += 1;
            match board.winner() {
                Some(Player::X) => summary.x_wins += 1,
                Some(Player::O) => summary.o_wins += 1,
                None => summary.draws += 1,
            }
        }
    }

    summary
}
