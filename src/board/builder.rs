//! Fluent builder for constructing positions piece by piece rather than
//! parsing a position string.
//!
//! # Example
//! ```
//! use chess_rules::board::{GameBuilder, Piece, PieceKind, Side};
//!
//! let game = GameBuilder::new()
//!     .piece("e1".parse().unwrap(), Piece::new(PieceKind::King, Side::Light))
//!     .piece("e8".parse().unwrap(), Piece::new(PieceKind::King, Side::Dark))
//!     .piece("a2".parse().unwrap(), Piece::new(PieceKind::Pawn, Side::Light))
//!     .side_to_move(Side::Dark)
//!     .build();
//! assert_eq!(game.to_position_string(), "4k3/8/8/8/8/8/P7/4K3 b - - 0 1");
//! ```

use super::{CastlingRights, Game, Piece, Side, Square, Wing};

/// A fluent builder for `Game` positions. Starts from an empty board with
/// Light to move, no castling rights and move one.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    game: Game,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            game: Game::empty(),
        }
    }

    /// Start from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        GameBuilder { game: Game::new() }
    }

    /// Place a piece, replacing whatever stood on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.game.board.set(square, Some(piece));
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.game.board.set(square, None);
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, side: Side) -> Self {
        self.game.side_to_move = side;
        self
    }

    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.game.castling = rights;
        self
    }

    #[must_use]
    pub fn castle_kingside(mut self, side: Side) -> Self {
        self.game.castling.set(side, Wing::Kingside);
        self
    }

    #[must_use]
    pub fn castle_queenside(mut self, side: Side) -> Self {
        self.game.castling.set(side, Wing::Queenside);
        self
    }

    #[must_use]
    pub fn en_passant(mut self, target: Option<Square>) -> Self {
        self.game.en_passant = target;
        self
    }

    #[must_use]
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.game.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub fn fullmove_number(mut self, number: u32) -> Self {
        self.game.fullmove_number = number;
        self
    }

    #[must_use]
    pub fn build(self) -> Game {
        self.game
    }
}
