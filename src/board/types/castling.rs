//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Side;
use super::square::Square;

const CASTLE_LIGHT_K: u8 = 1 << 0;
const CASTLE_LIGHT_Q: u8 = 1 << 1;
const CASTLE_DARK_K: u8 = 1 << 2;
const CASTLE_DARK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_LIGHT_K | CASTLE_LIGHT_Q | CASTLE_DARK_K | CASTLE_DARK_Q;

/// Kingside or queenside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Wing {
    Kingside,
    Queenside,
}

impl Wing {
    pub const BOTH: [Wing; 2] = [Wing::Kingside, Wing::Queenside];

    /// File of this wing's rook in the initial setup.
    #[must_use]
    pub const fn rook_file(self) -> usize {
        match self {
            Wing::Kingside => 7,
            Wing::Queenside => 0,
        }
    }

    /// Original rook square of `side` on this wing.
    #[must_use]
    pub const fn rook_home(self, side: Side) -> Square {
        Square::at(side.back_rank(), self.rook_file())
    }
}

/// Original king square of `side`.
#[must_use]
pub const fn king_home(side: Side) -> Square {
    Square::at(side.back_rank(), 4)
}

/// Castling rights as four independent flags, ordered
/// (Light kingside, Light queenside, Dark kingside, Dark queenside).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Build from the four flags in canonical order.
    #[must_use]
    pub const fn from_flags(flags: [bool; 4]) -> Self {
        let mut bits = 0;
        if flags[0] {
            bits |= CASTLE_LIGHT_K;
        }
        if flags[1] {
            bits |= CASTLE_LIGHT_Q;
        }
        if flags[2] {
            bits |= CASTLE_DARK_K;
        }
        if flags[3] {
            bits |= CASTLE_DARK_Q;
        }
        CastlingRights(bits)
    }

    /// The four flags in canonical order.
    #[must_use]
    pub const fn flags(self) -> [bool; 4] {
        [
            self.0 & CASTLE_LIGHT_K != 0,
            self.0 & CASTLE_LIGHT_Q != 0,
            self.0 & CASTLE_DARK_K != 0,
            self.0 & CASTLE_DARK_Q != 0,
        ]
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, side: Side, wing: Wing) -> bool {
        self.0 & Self::bit_for(side, wing) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, side: Side, wing: Wing) {
        self.0 |= Self::bit_for(side, wing);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, side: Side, wing: Wing) {
        self.0 &= !Self::bit_for(side, wing);
    }

    /// Remove both rights of `side`.
    #[inline]
    pub fn remove_side(&mut self, side: Side) {
        self.remove(side, Wing::Kingside);
        self.remove(side, Wing::Queenside);
    }

    /// Drop every right tied to `square` being an original king or rook square.
    ///
    /// Any piece leaving or arriving on one of those squares means the king or
    /// rook there has moved or been captured.
    pub fn revoke_at(&mut self, square: Square) {
        for side in Side::BOTH {
            if square == king_home(side) {
                self.remove_side(side);
            }
            for wing in Wing::BOTH {
                if square == wing.rook_home(side) {
                    self.remove(side, wing);
                }
            }
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    const fn bit_for(side: Side, wing: Wing) -> u8 {
        match (side, wing) {
            (Side::Light, Wing::Kingside) => CASTLE_LIGHT_K,
            (Side::Light, Wing::Queenside) => CASTLE_LIGHT_Q,
            (Side::Dark, Wing::Kingside) => CASTLE_DARK_K,
            (Side::Dark, Wing::Queenside) => CASTLE_DARK_Q,
        }
    }
}

/// Position-string token: `KQkq` subset in fixed order, or `-`.
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (flag, letter) in self.flags().into_iter().zip(['K', 'Q', 'k', 'q']) {
            if flag {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
