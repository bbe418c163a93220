//! Fixed 64-cell piece storage.

use std::fmt;

use super::error::SquareError;
use super::{Piece, Side, Square};

/// The 64 cells of the board, each holding a piece or nothing.
///
/// Typed access through `Square` cannot go out of range; the `try_*`
/// variants take algebraic text and reject anything that is not a square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Board {
    /// A board with every cell empty.
    #[must_use]
    pub const fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, cell: Option<Piece>) {
        self.cells[square.index()] = cell;
    }

    /// Take the piece off `square`, leaving it empty.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.index()].take()
    }

    /// `get` addressed by algebraic text.
    pub fn try_get(&self, notation: &str) -> Result<Option<Piece>, SquareError> {
        let square: Square = notation.parse()?;
        Ok(self.get(square))
    }

    /// `set` addressed by algebraic text.
    pub fn try_set(&mut self, notation: &str, cell: Option<Piece>) -> Result<(), SquareError> {
        let square: Square = notation.parse()?;
        self.set(square, cell);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Side of the piece on `square`, if any.
    #[inline]
    #[must_use]
    pub fn side_at(&self, square: Square) -> Option<Side> {
        self.get(square).map(|piece| piece.side)
    }

    /// Every occupied square with its piece, in board iteration order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// First square holding exactly `piece`.
    #[must_use]
    pub fn find(&self, piece: Piece) -> Option<Square> {
        self.pieces().find(|&(_, p)| p == piece).map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

/// ASCII diagram, rank 8 at the top, `.` for empty cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self
                    .get(Square::at(rank, file))
                    .map_or('.', Piece::to_fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
