//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    Board, CastlingRights, Game, GameBuilder, Move, MoveKind, MoveTextError, Outcome, Piece,
    PieceKind, PositionError, Side, Square, SquareError,
};
