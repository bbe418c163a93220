//! Piece kinds, sides and piece values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two players. An empty cell has no side at all (`Option<Piece>` is `None`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    /// Both sides in index order (Light=0, Dark=1)
    pub const BOTH: [Side; 2] = [Side::Light, Side::Dark];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Side::Light => 0,
            Side::Dark => 1,
        }
    }

    /// Returns the opposite side
    #[inline]
    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Back rank for this side (0 for Light, 7 for Dark)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Side::Light => 0,
            Side::Dark => 7,
        }
    }

    /// Pawn forward direction (+1 for Light, -1 for Dark)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Side::Light => 1,
            Side::Dark => -1,
        }
    }

    /// Pawn starting rank (1 for Light, 6 for Dark)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> usize {
        match self {
            Side::Light => 1,
            Side::Dark => 6,
        }
    }

    /// Rank a pawn stands on one step before promoting (6 for Light, 1 for Dark)
    #[inline]
    #[must_use]
    pub const fn pre_promotion_rank(self) -> usize {
        match self {
            Side::Light => 6,
            Side::Dark => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Light => write!(f, "Light"),
            Side::Dark => write!(f, "Dark"),
        }
    }
}

/// The six piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Rook,
    Knight,
    King,
    Queen,
    Bishop,
    Pawn,
}

impl PieceKind {
    /// All piece kinds in catalog order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Bishop,
        PieceKind::Pawn,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceKind::Rook => 0,
            PieceKind::Knight => 1,
            PieceKind::King => 2,
            PieceKind::Queen => 3,
            PieceKind::Bishop => 4,
            PieceKind::Pawn => 5,
        }
    }

    /// Identity letter, lowercase.
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Bishop => 'b',
            PieceKind::Pawn => 'p',
        }
    }

    /// Look up a kind by identity letter, ignoring case.
    #[must_use]
    pub fn from_letter(c: char) -> Option<PieceKind> {
        let lower = c.to_ascii_lowercase();
        PieceKind::ALL.into_iter().find(|kind| kind.letter() == lower)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Bishop => "Bishop",
            PieceKind::Pawn => "Pawn",
        };
        f.write_str(name)
    }
}

/// Promotion choices in emission order.
pub(crate) const PROMOTION_TARGETS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Knight,
];

/// A piece on the board: kind plus owning side.
///
/// Board cells hold `Option<Piece>`; `None` is the empty cell and only ever
/// compares equal to another empty cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Piece { kind, side }
    }

    /// True when `cell` holds no piece.
    #[inline]
    #[must_use]
    pub const fn is_empty(cell: Option<Piece>) -> bool {
        cell.is_none()
    }

    /// Position-string letter: uppercase for Light, lowercase for Dark.
    #[must_use]
    pub fn to_fen_char(self) -> char {
        let c = self.kind.letter();
        if self.side == Side::Light {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Inverse of `to_fen_char`.
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::Light
        } else {
            Side::Dark
        };
        Some(Piece::new(kind, side))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side, self.kind)
    }
}
