//! D4 symmetry group operations on the board grid

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell};

/// One of the 8 symmetries of the square (the dihedral group D4).
///
/// The variant order is fixed and load-bearing: the identity first, then
/// the clockwise rotations ascending, then the four reflections. Orbit
/// enumeration and canonical-target resolution both walk the group in this
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum D4Transform {
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    /// Mirror across the vertical axis (left and right columns swap).
    FlipHorizontal,
    /// Mirror across the horizontal axis (top and bottom rows swap).
    FlipVertical,
    /// Mirror across the main diagonal (transpose).
    FlipMainDiagonal,
    /// Mirror across the anti-diagonal.
    FlipAntiDiagonal,
}

/// Index-permutation tables, one per transform in `D4Transform::ALL` order.
///
/// `PERMUTATIONS[t][p]` is the source position whose cell lands at position
/// `p` of the transformed grid.
static PERMUTATIONS: [[usize; 9]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8],
    [6, 3, 0, 7, 4, 1, 8, 5, 2],
    [8, 7, 6, 5, 4, 3, 2, 1, 0],
    [2, 5, 8, 1, 4, 7, 0, 3, 6],
    [2, 1, 0, 5, 4, 3, 8, 7, 6],
    [6, 7, 8, 3, 4, 5, 0, 1, 2],
    [0, 3, 6, 1, 4, 7, 2, 5, 8],
    [8, 5, 2, 7, 4, 1, 6, 3, 0],
];

impl D4Transform {
    /// All 8 transforms in the fixed group order.
    pub const ALL: [D4Transform; 8] = [
        D4Transform::Identity,
        D4Transform::Rotate90,
        D4Transform::Rotate180,
        D4Transform::Rotate270,
        D4Transform::FlipHorizontal,
        D4Transform::FlipVertical,
        D4Transform::FlipMainDiagonal,
        D4Transform::FlipAntiDiagonal,
    ];

    /// The position permutation realizing this transform.
    pub fn permutation(self) -> &'static [usize; 9] {
        &PERMUTATIONS[self as usize]
    }

    /// Apply the transform to a cell array
    pub fn apply(self, cells: &[Cell; 9]) -> [Cell; 9] {
        let perm = self.permutation();
        let mut out = [Cell::Empty; 9];
        for (pos, slot) in out.iter_mut().enumerate() {
            *slot = cells[perm[pos]];
        }
        out
    }

    /// Get the inverse transform.
    ///
    /// The reflections are involutions; a rotation inverts to the opposite
    /// rotation.
    pub fn inverse(self) -> D4Transform {
        match self {
            D4Transform::Rotate90 => D4Transform::Rotate270,
            D4Transform::Rotate270 => D4Transform::Rotate90,
            other => other,
        }
    }
}

impl Board {
    /// Apply a D4 transform to the board
    pub fn transform(&self, t: D4Transform) -> Board {
        Board::from_cells(t.apply(&self.cells))
    }

    /// The board's orbit as a sequence, one entry per transform in group
    /// order. Boards with non-trivial stabilizer symmetry repeat entries;
    /// the sequence is always 8 long.
    pub fn variants(&self) -> [Board; 8] {
        let mut out = [*self; 8];
        for (slot, t) in out.iter_mut().zip(D4Transform::ALL) {
            *slot = self.transform(t);
        }
        out
    }
}
