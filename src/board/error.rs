//! Error types for board and game operations.

use std::fmt;

/// Error type for malformed square coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Text is not exactly one `[a-h][1-8]` square
    InvalidNotation { notation: String },
    /// Numeric coordinates outside 0-7
    OutOfBounds { rank: usize, file: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "'{notation}' is not a valid square")
            }
            SquareError::OutOfBounds { rank, file } => {
                write!(f, "Square (rank {rank}, file {file}) out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for position-string parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Position string must have exactly 6 space-separated fields
    WrongFieldCount { found: usize },
    /// Placement field must have exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid character in the placement field
    InvalidPiece { char: char },
    /// A rank (1-8, as printed on the board) does not describe exactly 8 squares
    BadRankLength { rank: usize, squares: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling token
    InvalidCastling { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Half-move clock or full-move number is not a number
    InvalidCounter { field: &'static str, found: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::WrongFieldCount { found } => {
                write!(f, "Position string must have 6 fields, found {found}")
            }
            PositionError::WrongRankCount { found } => {
                write!(f, "Piece placement must have 8 ranks, found {found}")
            }
            PositionError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in position string")
            }
            PositionError::BadRankLength { rank, squares } => {
                write!(f, "Rank {rank} describes {squares} squares, expected 8")
            }
            PositionError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            PositionError::InvalidCastling { found } => {
                write!(f, "Invalid castling rights '{found}'")
            }
            PositionError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            PositionError::InvalidCounter { field, found } => {
                write!(f, "Invalid {field} '{found}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for move-text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveTextError {
    /// Empty move text
    Empty,
    /// Text matches none of the recognized move forms
    UnknownFormat { text: String },
    /// No legal move matches the text
    NoMatchingMove { text: String },
    /// More than one legal move matches and the text does not say which
    AmbiguousMove { text: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveTextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveTextError::Empty => write!(f, "Empty move text"),
            MoveTextError::UnknownFormat { text } => {
                write!(f, "Unknown move format '{text}'")
            }
            MoveTextError::NoMatchingMove { text } => {
                write!(f, "Invalid move '{text}'")
            }
            MoveTextError::AmbiguousMove { text } => {
                write!(f, "Ambiguous move '{text}'")
            }
            MoveTextError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveTextError {}
