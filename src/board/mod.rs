//! Chess rules: board storage, declarative move generation, legality by
//! simulation, move application and the two text notations.
//!
//! # Example
//! ```
//! use chess_rules::board::Game;
//!
//! let game = Game::new();
//! let moves = game.every_move();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod catalog;
mod error;
mod fen;
mod grid;
mod legality;
mod make_move;
mod movegen;
mod perft;
pub mod prelude;
mod san;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::GameBuilder;
pub use error::{MoveTextError, PositionError, SquareError};
pub use grid::Board;
pub use movegen::{Condition, Guard, MoveGenerator, Offset};
pub use state::{Game, GameResult, Outcome, START_POSITION};
pub use types::{
    is_valid_square, king_home, sign, Annex, CastlingRights, Move, MoveKind, Piece, PieceKind,
    Side, Square, Wing,
};

pub(crate) use types::PROMOTION_TARGETS;
