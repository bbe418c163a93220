//! Move types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// What a move does to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Move,
    Capture,
    EnPassant,
    KingCastle,
    QueenCastle,
    Promotion,
    GameOver,
}

/// Extra state change bundled with a move, run after the pieces are relocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Annex {
    /// Clear the castling rights tied to the move's origin square.
    ClearCastlingRights,
    /// Remove the pawn that was just passed by an en passant capture.
    RemoveEnPassantVictim,
}

/// One transition of the game.
///
/// `is_checking` and `is_mating` are filled in when a move is handed out by
/// the public generation API; moves built for internal probing leave them
/// unset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    kind: MoveKind,
    from: Square,
    piece: Piece,
    to: Square,
    promotion: Option<PieceKind>,
    annex: Option<Annex>,
    is_checking: bool,
    is_mating: bool,
}

impl Move {
    #[must_use]
    pub const fn new(kind: MoveKind, from: Square, piece: Piece, to: Square) -> Self {
        Move {
            kind,
            from,
            piece,
            to,
            promotion: None,
            annex: None,
            is_checking: false,
            is_mating: false,
        }
    }

    #[must_use]
    pub const fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }

    #[must_use]
    pub const fn with_annex(mut self, annex: Annex) -> Self {
        self.annex = Some(annex);
        self
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Snapshot of the moving piece taken at generation time.
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn annex(&self) -> Option<Annex> {
        self.annex
    }

    #[inline]
    #[must_use]
    pub const fn is_checking(&self) -> bool {
        self.is_checking
    }

    #[inline]
    #[must_use]
    pub const fn is_mating(&self) -> bool {
        self.is_mating
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        matches!(self.kind, MoveKind::KingCastle | MoveKind::QueenCastle)
    }

    pub(crate) fn set_flags(&mut self, is_checking: bool, is_mating: bool) {
        self.is_checking = is_checking;
        self.is_mating = is_mating;
    }
}

/// Coordinate form: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == MoveKind::GameOver {
            return f.write_str("--");
        }
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::piece::Side;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_coordinates() {
        let pawn = Piece::new(PieceKind::Pawn, Side::Light);
        let mv = Move::new(MoveKind::Move, sq("e2"), pawn, sq("e4"));
        assert_eq!(mv.to_string(), "e2e4");

        let promo = Move::new(MoveKind::Promotion, sq("e7"), pawn, sq("e8"))
            .with_promotion(PieceKind::Knight);
        assert_eq!(promo.to_string(), "e7e8n");
    }

    #[test]
    fn test_flags_default_unset() {
        let king = Piece::new(PieceKind::King, Side::Dark);
        let mut mv = Move::new(MoveKind::Move, sq("e8"), king, sq("e7"));
        assert!(!mv.is_checking());
        assert!(!mv.is_mating());
        mv.set_flags(true, false);
        assert!(mv.is_checking());
    }

    #[test]
    fn test_castling_kinds() {
        let king = Piece::new(PieceKind::King, Side::Light);
        let mv = Move::new(MoveKind::KingCastle, sq("e1"), king, sq("g1"))
            .with_annex(Annex::ClearCastlingRights);
        assert!(mv.is_castling());
        assert_eq!(mv.annex(), Some(Annex::ClearCastlingRights));
    }
}
