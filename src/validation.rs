//! Board legality checks

use crate::board::{Board, Player};

impl Board {
    /// Check whether the configuration is reachable under the game rules.
    ///
    /// X moves first, so the counts must satisfy `x == o` or `x == o + 1`;
    /// a winner must have moved last (X winning requires `x == o + 1`, O
    /// winning requires `x == o`); and both players cannot hold winning
    /// lines at once. Boards failing any of these are not members of the
    /// state space.
    pub fn is_valid(&self) -> bool {
        let x_count = self.x_count();
        let o_count = self.o_count();

        if !(x_count == o_count || x_count == o_count + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        // Play stops at a win, so the winner placed the last mark.
        if x_wins && x_count != o_count + 1 {
            return false;
        }
        if o_wins && x_count != o_count {
            return false;
        }

        true
    }
}
