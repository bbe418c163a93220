//! Core chess types.
//!
//! This module contains the value types shared by the whole engine:
//! - `Piece`, `PieceKind` and `Side`
//! - `Square` plus the coordinate helpers
//! - `Move`, `MoveKind` and the `Annex` side-effect tags
//! - `CastlingRights`

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{king_home, CastlingRights, Wing};
pub use moves::{Annex, Move, MoveKind};
pub use piece::{Piece, PieceKind, Side};
pub use square::{is_valid_square, sign, Square};

pub(crate) use piece::PROMOTION_TARGETS;
