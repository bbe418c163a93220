#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::grid::Board;
use super::{CastlingRights, Piece, PieceKind, Side, Square};

/// Position string of the standard opening array.
pub const START_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Where the game stands for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Ongoing,
    Checkmate { winner: Side },
    Stalemate,
}

/// A result declared through a score token such as `1-0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    LightWins,
    DarkWins,
    Draw,
}

/// Full game state: the board plus everything a position string records,
/// the material each side has taken, and any declared result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) side_to_move: Side,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) captured: [Vec<Piece>; 2],
    pub(crate) result: Option<GameResult>,
}

impl Game {
    /// The standard starting position, Light to move.
    pub fn new() -> Self {
        let mut game = Game::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.iter().enumerate() {
            for side in Side::BOTH {
                let home = side.back_rank();
                let pawns = side.pawn_start_rank();
                game.board
                    .set(Square::at(home, file), Some(Piece::new(*kind, side)));
                game.board
                    .set(Square::at(pawns, file), Some(Piece::new(PieceKind::Pawn, side)));
            }
        }
        game.castling = CastlingRights::all();
        game
    }

    pub(crate) fn empty() -> Self {
        Game {
            board: Board::empty(),
            side_to_move: Side::Light,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            captured: [Vec::new(), Vec::new()],
            result: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Square a pawn may capture onto en passant, if the last move was a
    /// double push.
    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Enemy pieces taken by `side`, in capture order.
    #[must_use]
    pub fn captured_by(&self, side: Side) -> &[Piece] {
        &self.captured[side.index()]
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matches_start_position_string() {
        let parsed = Game::from_position_string(START_POSITION).unwrap();
        assert_eq!(Game::new(), parsed);
        assert_eq!(Game::default().to_position_string(), START_POSITION);
    }

    #[test]
    fn test_empty_game_has_no_material() {
        let game = Game::empty();
        assert_eq!(game.board().pieces().count(), 0);
        assert!(game.captured_by(Side::Light).is_empty());
        assert_eq!(game.fullmove_number(), 1);
        assert_eq!(game.result(), None);
    }
}
