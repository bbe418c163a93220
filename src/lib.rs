pub mod board;

pub use board::{Game, Move, Piece, PieceKind, Side, Square};
