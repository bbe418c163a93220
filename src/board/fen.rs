use std::str::FromStr;

use super::error::PositionError;
use super::{CastlingRights, Game, Piece, Side, Square, Wing};

impl Game {
    /// Parse a position string: placement, side to move, castling rights,
    /// en passant square, half-move clock and full-move number.
    ///
    /// Every field is validated; a malformed string never yields a
    /// partially-initialized game.
    pub fn from_position_string(text: &str) -> Result<Self, PositionError> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(PositionError::WrongFieldCount { found: parts.len() });
        }

        let mut game = Game::empty();
        parse_placement(&mut game, parts[0])?;

        game.side_to_move = match parts[1] {
            "w" => Side::Light,
            "b" => Side::Dark,
            other => {
                return Err(PositionError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };
        game.castling = parse_castling(parts[2])?;
        game.en_passant = parse_en_passant(parts[3])?;
        game.halfmove_clock = parse_counter("half-move clock", parts[4])?;
        game.fullmove_number = parse_counter("full-move number", parts[5])?;

        log::debug!("parsed position '{text}'");
        Ok(game)
    }

    /// Render the game as a position string.
    #[must_use]
    pub fn to_position_string(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.board.get(Square::at(rank, file)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        let active = match self.side_to_move {
            Side::Light => 'w',
            Side::Dark => 'b',
        };
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        out.push_str(&format!(
            " {active} {} {ep} {} {}",
            self.castling, self.halfmove_clock, self.fullmove_number
        ));
        out
    }
}

fn parse_placement(game: &mut Game, field: &str) -> Result<(), PositionError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(PositionError::WrongRankCount { found: ranks.len() });
    }

    for (row, text) in ranks.iter().enumerate() {
        let rank = 7 - row;
        let mut file = 0;
        for c in text.chars() {
            match c {
                '1'..='8' => file += c as usize - '0' as usize,
                _ => {
                    let piece =
                        Piece::from_fen_char(c).ok_or(PositionError::InvalidPiece { char: c })?;
                    if let Some(square) = Square::new(rank, file) {
                        game.board.set(square, Some(piece));
                    }
                    file += 1;
                }
            }
        }
        if file != 8 {
            return Err(PositionError::BadRankLength {
                rank: 8 - row,
                squares: file,
            });
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, PositionError> {
    let invalid = || PositionError::InvalidCastling {
        found: field.to_string(),
    };
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    if field.len() > 4 {
        return Err(invalid());
    }
    for c in field.chars() {
        let (side, wing) = match c {
            'K' => (Side::Light, Wing::Kingside),
            'Q' => (Side::Light, Wing::Queenside),
            'k' => (Side::Dark, Wing::Kingside),
            'q' => (Side::Dark, Wing::Queenside),
            _ => return Err(invalid()),
        };
        if rights.has(side, wing) {
            return Err(invalid());
        }
        rights.set(side, wing);
    }
    Ok(rights)
}

fn parse_en_passant(field: &str) -> Result<Option<Square>, PositionError> {
    if field == "-" {
        return Ok(None);
    }
    match field.parse::<Square>() {
        Ok(square) if square.rank() == 2 || square.rank() == 5 => Ok(Some(square)),
        _ => Err(PositionError::InvalidEnPassant {
            found: field.to_string(),
        }),
    }
}

fn parse_counter(name: &'static str, field: &str) -> Result<u32, PositionError> {
    let invalid = || PositionError::InvalidCounter {
        field: name,
        found: field.to_string(),
    };
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    field.parse().map_err(|_| invalid())
}

impl FromStr for Game {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::from_position_string(s)
    }
}
