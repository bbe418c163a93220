//! Square types and coordinate utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, stored as (rank, file), both 0-7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8, u8);

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank as u8, file as u8))
        } else {
            None
        }
    }

    /// Like `new`, for coordinates known to be on the board.
    pub(crate) const fn at(rank: usize, file: usize) -> Self {
        Square(rank as u8, file as u8)
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0 as usize
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1 as usize
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank() * 8 + self.file()
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square::at(idx / 8, idx % 8))
        } else {
            None
        }
    }

    /// Step by (file delta, rank delta); `None` once the walk leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = self.1 as i8 + d_file;
        let rank = self.0 as i8 + d_rank;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square(rank as u8, file as u8))
        } else {
            None
        }
    }

    /// File letter, 'a'..='h'.
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a' + self.1) as char
    }

    /// Rank digit, '1'..='8'.
    #[must_use]
    pub const fn rank_char(self) -> char {
        (b'1' + self.0) as char
    }

    /// All 64 squares, rank-major from a1 to h8.
    ///
    /// Every full-board scan in the crate uses this order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(rank, file).ok_or(SquareError::OutOfBounds { rank, file })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return Err(invalid()),
        };
        Ok(Square(rank, file))
    }
}

/// Returns true if `notation` is exactly one algebraic square (`[a-h][1-8]`).
#[must_use]
pub fn is_valid_square(notation: &str) -> bool {
    notation.parse::<Square>().is_ok()
}

/// Sign of `x` as -1, 0 or 1.
#[inline]
#[must_use]
pub const fn sign(x: i8) -> i8 {
    if x > 0 {
        1
    } else if x < 0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let sq: Square = "e4".parse().unwrap();
        assert_eq!(sq.rank(), 3);
        assert_eq!(sq.file(), 4);
        assert_eq!(sq.to_string(), "e4");
    }

    #[test]
    fn test_invalid_notation() {
        for bad in ["", "e", "e9", "i1", "E4", "e44", "4e"] {
            assert!(
                matches!(bad.parse::<Square>(), Err(SquareError::InvalidNotation { .. })),
                "{bad} should be rejected"
            );
            assert!(!is_valid_square(bad));
        }
    }

    #[test]
    fn test_offset_stops_at_edge() {
        let h8: Square = "h8".parse().unwrap();
        assert_eq!(h8.offset(1, 0), None);
        assert_eq!(h8.offset(0, 1), None);
        assert_eq!(h8.offset(-1, -1), Some("g7".parse().unwrap()));
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Square::from_index(0).map(|sq| sq.to_string()), Some("a1".to_string()));
        assert_eq!(Square::from_index(63).map(|sq| sq.to_string()), Some("h8".to_string()));
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(Square::from_index(e4.index()), Some(e4));
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn test_all_is_exhaustive_and_ordered() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].to_string(), "a1");
        assert_eq!(squares[8].to_string(), "a2");
        assert_eq!(squares[63].to_string(), "h8");
        assert!(squares.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_try_from_bounds() {
        assert!(Square::try_from((7, 7)).is_ok());
        assert_eq!(
            Square::try_from((8, 0)),
            Err(SquareError::OutOfBounds { rank: 8, file: 0 })
        );
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(-4), -1);
        assert_eq!(sign(0), 0);
        assert_eq!(sign(3), 1);
    }
}
