//! Exhaustive enumeration of the configuration space

use crate::board::Board;
use crate::error::{Error, Result};

/// Total number of 3x3 configurations, 3^9.
pub const TOTAL_BOARDS: usize = 19_683;

/// Number of configurations that survive the legality rules.
pub const LEGAL_BOARD_COUNT: usize = 5_478;

/// Iterate over every configuration in base-3 index order.
///
/// Position 0 is the most significant digit and position 8 cycles fastest
/// (Empty, then X, then O). This order fixes every downstream state id, so
/// it must not change. The all-empty board is index 0.
pub fn all_boards() -> impl Iterator<Item = Board> {
    (0..TOTAL_BOARDS as u16).map(Board::from_index)
}

/// All legal boards in enumeration order — the full state space.
///
/// A board's position in the returned table is its full-space id.
///
/// # Errors
///
/// Returns [`Error::LegalStateCount`] if the filter does not produce
/// exactly [`LEGAL_BOARD_COUNT`] boards. That count is a known closed-form
/// property of the rules; missing it means the validator or the
/// enumeration order is defective, and the run must not continue on a
/// partial space.
pub fn legal_boards() -> Result<Vec<Board>> {
    let legal: Vec<Board> = all_boards().filter(Board::is_valid).collect();

    if legal.len() != LEGAL_BOARD_COUNT {
        return Err(Error::LegalStateCount {
            expected: LEGAL_BOARD_COUNT,
            actual: legal.len(),
        });
    }

    Ok(legal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_order_is_base3() {
        let mut boards = all_boards();
        assert_eq!(boards.next().unwrap().encode(), ".........");
        assert_eq!(boards.next().unwrap().encode(), "........X");
        assert_eq!(boards.next().unwrap().encode(), "........O");
        assert_eq!(boards.next().unwrap().encode(), ".......X.");
    }

    #[test]
    fn test_legal_boards_count_and_order() {
        let legal = legal_boards().unwrap();
        assert_eq!(legal.len(), LEGAL_BOARD_COUNT);
        // The all-empty board is index 0 of the enumeration and legal, so
        // it always gets full-space id 0.
        assert_eq!(legal[0], Board::new());
        assert_eq!(legal[1].encode(), "........X");
    }
}
