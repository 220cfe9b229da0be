//! Legal-move transition graphs over the full and canonical spaces

use std::collections::HashMap;

use serde::Serialize;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::identifiers::StateId;

/// Total edges of the full-space graph.
pub const FULL_EDGE_COUNT: usize = 16_167;

/// Total edges of the canonical-space graph.
pub const CANONICAL_EDGE_COUNT: usize = 2_096;

/// Outgoing legal-move edges for every state of one space.
///
/// Built once and never mutated afterwards. Each source id maps to an
/// ordered, duplicate-free target list; terminal states map to an empty
/// list. Target order is first-discovery order over the row-major cell
/// scan, which keeps independently-built graphs identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionGraph {
    targets: Vec<Vec<StateId>>,
    edge_count: usize,
}

impl TransitionGraph {
    /// Number of states covered by the graph.
    pub fn state_count(&self) -> usize {
        self.targets.len()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Outgoing targets of a source state.
    pub fn targets(&self, id: StateId) -> &[StateId] {
        &self.targets[id.index()]
    }

    /// Iterate over `(source, targets)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &[StateId])> {
        self.targets
            .iter()
            .enumerate()
            .map(|(i, t)| (StateId::new(i), t.as_slice()))
    }
}

/// Build the transition graph over the full state space.
///
/// A candidate board after a move must match a table entry by exact value.
///
/// # Errors
///
/// Returns [`Error::UnknownFullTarget`] when a legal candidate is missing
/// from the table, which means the supplied space is incomplete.
pub fn build_full_graph(boards: &[Board]) -> Result<TransitionGraph> {
    let ids = index_table(boards);
    build_graph(boards, |candidate| {
        ids.get(candidate)
            .copied()
            .ok_or_else(|| Error::UnknownFullTarget {
                board: candidate.encode(),
            })
    })
}

/// Build the transition graph over the canonical state space.
///
/// A candidate board is resolved by testing its orbit variants in group
/// order; the first variant present in the table names the target class.
///
/// # Errors
///
/// Returns [`Error::UnresolvedCanonicalTarget`] when no variant matches.
/// That is not a recoverable condition: it means the canonical space does
/// not cover the candidate's class, and any graph built past it would be
/// incomplete.
pub fn build_canonical_graph(boards: &[Board]) -> Result<TransitionGraph> {
    let ids = index_table(boards);
    build_graph(boards, |candidate| {
        candidate
            .variants()
            .iter()
            .find_map(|v| ids.get(v).copied())
            .ok_or_else(|| Error::UnresolvedCanonicalTarget {
                board: candidate.encode(),
            })
    })
}

fn index_table(boards: &[Board]) -> HashMap<Board, StateId> {
    boards
        .iter()
        .enumerate()
        .map(|(i, &b)| (b, StateId::new(i)))
        .collect()
}

/// Shared per-source edge discovery; the two spaces differ only in how a
/// candidate board resolves to a target id.
fn build_graph<F>(boards: &[Board], resolve: F) -> Result<TransitionGraph>
where
    F: Fn(&Board) -> Result<StateId>,
{
    let mut targets = Vec::with_capacity(boards.len());
    let mut edge_count = 0;

    for board in boards {
        let mut out: Vec<StateId> = Vec::new();

        if !board.is_terminal() {
            // make_move places the parity-derived mover's mark.
            for pos in board.empty_positions() {
                let candidate = board.make_move(pos)?;
                if !candidate.is_valid() {
                    // Cannot happen with correct turn alternation, but an
                    // invalid candidate is discarded, never an edge.
                    continue;
                }
                let target = resolve(&candidate)?;
                if !out.contains(&target) {
                    out.push(target);
                }
            }
        }

        edge_count += out.len();
        targets.push(out);
    }

    Ok(TransitionGraph { targets, edge_count })
}
