//! Symmetry reduction of the legal state space

use std::collections::HashSet;

use crate::board::Board;

/// Number of symmetry classes in the legal state space.
pub const CANONICAL_BOARD_COUNT: usize = 765;

/// Collapse an ordered sequence of boards into one representative per
/// symmetry class.
///
/// A single forward pass: the first board whose orbit has not been claimed
/// by an earlier class becomes the representative, and its whole orbit is
/// marked as seen. Later orbit members are skipped. A representative's
/// position in the output is its canonical-space id.
///
/// The representative is therefore determined purely by input order, not by
/// board content — re-running over the same sequence reproduces the same
/// ids, but the representative of a class is not in general its minimal
/// encoding.
pub fn canonicalize(boards: &[Board]) -> Vec<Board> {
    let mut seen: HashSet<Board> = HashSet::with_capacity(boards.len());
    let mut representatives = Vec::new();

    for board in boards {
        let variants = board.variants();
        if variants.iter().any(|v| seen.contains(v)) {
            continue;
        }
        representatives.push(*board);
        seen.extend(variants);
    }

    representatives
}
