//! Algebraic move text.
//!
//! Accepted forms: `e4`, `Nf3`, `exd5`, `R1a3`, `Qh4xe1`, `e8=Q`, `e8N`,
//! `O-O`, `O-O-O` (also with zeros), each with an optional `+` or `#`. The
//! score tokens `1-0`, `0-1` and `1/2-1/2` end the game and carry no move.
//!
//! # Examples
//! ```
//! use chess_rules::board::Game;
//!
//! let mut game = Game::new();
//! let mv = game.apply_move_text("e4").unwrap().unwrap();
//! assert_eq!(mv.to_string(), "e2e4");
//! ```

use super::error::MoveTextError;
use super::state::GameResult;
use super::{king_home, Game, Move, MoveKind, PieceKind, Square, Wing, PROMOTION_TARGETS};

/// Move text broken into its parts, before any board lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MoveText {
    Castle(Wing),
    Regular {
        kind: PieceKind,
        file: Option<usize>,
        rank: Option<usize>,
        to: Square,
        promotion: Option<PieceKind>,
    },
    Score(GameResult),
}

impl Game {
    /// Resolve move text to the single legal move it names, without
    /// applying it. The move comes back with its check and mate flags set.
    /// Score tokens resolve to `None`.
    pub fn parse_move_text(&self, text: &str) -> Result<Option<Move>, MoveTextError> {
        Ok(self.resolve_move_text(text)?.map(|mv| self.annotate(mv)))
    }

    /// Resolve and play move text. Returns the annotated move that was
    /// played, or `None` when the text was a score token, in which case the
    /// declared result is recorded instead.
    pub fn apply_move_text(&mut self, text: &str) -> Result<Option<Move>, MoveTextError> {
        if let MoveText::Score(result) = split_move_text(text.trim())? {
            log::debug!("game ended by '{}': {result:?}", text.trim());
            self.result = Some(result);
            return Ok(None);
        }
        let Some(mv) = self.parse_move_text(text)? else {
            return Ok(None);
        };
        log::debug!("'{}' resolved to {mv}", text.trim());
        self.perform_move(&mv);
        Ok(Some(mv))
    }

    /// Same as `parse_move_text` minus the annotation.
    pub(crate) fn resolve_move_text(&self, text: &str) -> Result<Option<Move>, MoveTextError> {
        let text = text.trim();
        match split_move_text(text)? {
            MoveText::Score(_) => Ok(None),
            MoveText::Castle(wing) => self.resolve_castle(wing, text).map(Some),
            MoveText::Regular {
                kind,
                file,
                rank,
                to,
                promotion,
            } => self
                .resolve_regular(kind, file, rank, to, promotion, text)
                .map(Some),
        }
    }

    /// Render a legal move as algebraic text, with the minimal origin
    /// disambiguation and a `+`/`#` suffix taken from the move's flags.
    #[must_use]
    pub fn move_to_text(&self, mv: &Move) -> String {
        let mut text = String::new();
        match mv.kind() {
            MoveKind::KingCastle => text.push_str("O-O"),
            MoveKind::QueenCastle => text.push_str("O-O-O"),
            MoveKind::GameOver => return "--".to_string(),
            _ => {
                let kind = mv.piece().kind;
                let captures = self.board.get(mv.to()).is_some()
                    || mv.kind() == MoveKind::EnPassant;
                if kind == PieceKind::Pawn {
                    if captures {
                        text.push(mv.from().file_char());
                    }
                } else {
                    text.push(kind.letter().to_ascii_uppercase());
                    let (needs_file, needs_rank) = self.needs_disambiguation(mv);
                    if needs_file {
                        text.push(mv.from().file_char());
                    }
                    if needs_rank {
                        text.push(mv.from().rank_char());
                    }
                }
                if captures {
                    text.push('x');
                }
                text.push_str(&mv.to().to_string());
                if let Some(promotion) = mv.promotion() {
                    text.push('=');
                    text.push(promotion.letter().to_ascii_uppercase());
                }
            }
        }

        if mv.is_mating() {
            text.push('#');
        } else if mv.is_checking() {
            text.push('+');
        }
        text
    }

    /// Which origin coordinates must be written so no other piece of the
    /// same kind could be read as making this move. Returns
    /// (`needs_file`, `needs_rank`).
    fn needs_disambiguation(&self, mv: &Move) -> (bool, bool) {
        let rivals: Vec<Move> = self
            .every_legal_move_unannotated()
            .into_iter()
            .filter(|m| {
                m.to() == mv.to() && m.piece() == mv.piece() && m.from() != mv.from()
            })
            .collect();
        if rivals.is_empty() {
            return (false, false);
        }

        let same_file = rivals.iter().any(|m| m.from().file() == mv.from().file());
        let same_rank = rivals.iter().any(|m| m.from().rank() == mv.from().rank());
        match (same_file, same_rank) {
            (false, _) => (true, false),
            (true, false) => (false, true),
            (true, true) => (true, true),
        }
    }

    fn resolve_castle(&self, wing: Wing, text: &str) -> Result<Move, MoveTextError> {
        let kind = match wing {
            Wing::Kingside => MoveKind::KingCastle,
            Wing::Queenside => MoveKind::QueenCastle,
        };
        self.legal_moves_unannotated(king_home(self.side_to_move))
            .into_iter()
            .find(|mv| mv.kind() == kind)
            .ok_or_else(|| MoveTextError::NoMatchingMove {
                text: text.to_string(),
            })
    }

    fn resolve_regular(
        &self,
        kind: PieceKind,
        file: Option<usize>,
        rank: Option<usize>,
        to: Square,
        promotion: Option<PieceKind>,
        text: &str,
    ) -> Result<Move, MoveTextError> {
        let side = self.side_to_move;
        let mut candidates: Vec<Move> = Vec::new();
        for (from, piece) in self.board.pieces() {
            if piece.side != side || piece.kind != kind {
                continue;
            }
            candidates.extend(self.legal_moves_unannotated(from).into_iter().filter(|mv| {
                mv.to() == to
                    && match mv.kind() {
                        MoveKind::Promotion => {
                            mv.promotion() == Some(promotion.unwrap_or(PieceKind::Queen))
                        }
                        _ => promotion.is_none(),
                    }
            }));
        }

        // Origin hints only narrow a choice; a lone candidate stands.
        if candidates.len() > 1 {
            candidates.retain(|mv| {
                file.map_or(true, |f| mv.from().file() == f)
                    && rank.map_or(true, |r| mv.from().rank() == r)
            });
        }

        match candidates.as_slice() {
            [] => {
                log::trace!("'{text}' matches no legal move");
                Err(MoveTextError::NoMatchingMove {
                    text: text.to_string(),
                })
            }
            [mv] => Ok(*mv),
            _ => Err(MoveTextError::AmbiguousMove {
                text: text.to_string(),
            }),
        }
    }
}

/// Strip the optional parts off the end of the text, then read the origin
/// hints and piece letter that remain in front of the destination.
fn split_move_text(text: &str) -> Result<MoveText, MoveTextError> {
    if text.is_empty() {
        return Err(MoveTextError::Empty);
    }
    match text {
        "1-0" => return Ok(MoveText::Score(GameResult::LightWins)),
        "0-1" => return Ok(MoveText::Score(GameResult::DarkWins)),
        "1/2-1/2" => return Ok(MoveText::Score(GameResult::Draw)),
        _ => {}
    }

    let unknown = || MoveTextError::UnknownFormat {
        text: text.to_string(),
    };
    let body = text.strip_suffix(['+', '#']).unwrap_or(text);
    match body {
        "O-O" | "0-0" => return Ok(MoveText::Castle(Wing::Kingside)),
        "O-O-O" | "0-0-0" => return Ok(MoveText::Castle(Wing::Queenside)),
        _ => {}
    }

    let mut chars: Vec<char> = body.chars().collect();

    let mut promotion = None;
    if let Some(&last) = chars.last() {
        let before = chars.len().checked_sub(2).map(|i| chars[i]);
        if last.is_ascii_uppercase() && matches!(before, Some('=' | '1'..='8')) {
            let kind = PieceKind::from_letter(last)
                .filter(|kind| PROMOTION_TARGETS.contains(kind))
                .ok_or(MoveTextError::InvalidPromotion { char: last })?;
            promotion = Some(kind);
            chars.pop();
            if before == Some('=') {
                chars.pop();
            }
        }
    }

    if chars.len() < 2 {
        return Err(unknown());
    }
    let dest: String = chars[chars.len() - 2..].iter().collect();
    let to: Square = dest.parse().map_err(|_| unknown())?;
    chars.truncate(chars.len() - 2);

    if chars.last() == Some(&'x') {
        chars.pop();
    }
    let mut rank = None;
    if let Some(c) = chars.last().copied().filter(|c| ('1'..='8').contains(c)) {
        rank = Some(c as usize - '1' as usize);
        chars.pop();
    }
    let mut file = None;
    if let Some(c) = chars.last().copied().filter(|c| ('a'..='h').contains(c)) {
        file = Some(c as usize - 'a' as usize);
        chars.pop();
    }
    let kind = match chars.as_slice() {
        [] => PieceKind::Pawn,
        [c @ ('R' | 'N' | 'B' | 'K' | 'Q')] => PieceKind::from_letter(*c).ok_or_else(unknown)?,
        _ => return Err(unknown()),
    };

    Ok(MoveText::Regular {
        kind,
        file,
        rank,
        to,
        promotion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, Side};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_split_forms() {
        assert_eq!(
            split_move_text("Nbd7+"),
            Ok(MoveText::Regular {
                kind: PieceKind::Knight,
                file: Some(1),
                rank: None,
                to: sq("d7"),
                promotion: None,
            })
        );
        assert_eq!(
            split_move_text("exd8=N#"),
            Ok(MoveText::Regular {
                kind: PieceKind::Pawn,
                file: Some(4),
                rank: None,
                to: sq("d8"),
                promotion: Some(PieceKind::Knight),
            })
        );
        assert_eq!(
            split_move_text("Qh4xe1"),
            Ok(MoveText::Regular {
                kind: PieceKind::Queen,
                file: Some(7),
                rank: Some(3),
                to: sq("e1"),
                promotion: None,
            })
        );
        assert_eq!(split_move_text("0-0-0"), Ok(MoveText::Castle(Wing::Queenside)));
        assert_eq!(
            split_move_text("1/2-1/2"),
            Ok(MoveText::Score(GameResult::Draw))
        );
    }

    #[test]
    fn test_split_rejects_garbage() {
        assert_eq!(split_move_text(""), Err(MoveTextError::Empty));
        for text in ["hello", "Pe4", "e9", "Nf", "xx", "e4e4e4", "=Q"] {
            assert!(
                matches!(split_move_text(text), Err(MoveTextError::UnknownFormat { .. })),
                "{text}"
            );
        }
        assert_eq!(
            split_move_text("e8=K"),
            Err(MoveTextError::InvalidPromotion { char: 'K' })
        );
    }

    #[test]
    fn test_pawn_and_knight_moves() {
        let mut game = Game::new();
        let mv = game.apply_move_text("e4").unwrap().unwrap();
        assert_eq!((mv.from(), mv.to()), (sq("e2"), sq("e4")));
        let mv = game.apply_move_text("Nf6").unwrap().unwrap();
        assert_eq!(mv.from(), sq("g8"));
        assert_eq!(game.side_to_move(), Side::Light);
    }

    #[test]
    fn test_promotion_defaults_to_queen() {
        let game = Game::from_position_string("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let queen = game.parse_move_text("a8").unwrap().unwrap();
        assert_eq!(queen.promotion(), Some(PieceKind::Queen));
        let knight = game.parse_move_text("a8N").unwrap().unwrap();
        assert_eq!(knight.promotion(), Some(PieceKind::Knight));
    }

    #[test]
    fn test_disambiguation() {
        let game = Game::from_position_string("3k4/8/8/8/R6R/8/8/4K3 w - - 0 1").unwrap();
        assert!(matches!(
            game.parse_move_text("Rd4"),
            Err(MoveTextError::AmbiguousMove { .. })
        ));
        let mv = game.parse_move_text("Rad4").unwrap().unwrap();
        assert_eq!(mv.from(), sq("a4"));
        let mv = game.parse_move_text("Rhd4").unwrap().unwrap();
        assert_eq!(mv.from(), sq("h4"));
        assert!(matches!(
            game.parse_move_text("Rbd4"),
            Err(MoveTextError::NoMatchingMove { .. })
        ));
    }

    #[test]
    fn test_origin_hint_ignored_for_lone_candidate() {
        let game = Game::new();
        let mv = game.parse_move_text("Nbf3").unwrap().unwrap();
        assert_eq!((mv.from(), mv.to()), (sq("g1"), sq("f3")));
        let mv = game.parse_move_text("N4f3").unwrap().unwrap();
        assert_eq!(mv.from(), sq("g1"));
    }

    #[test]
    fn test_parsed_move_carries_flags() {
        let game = Game::from_position_string("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let mate = game.parse_move_text("Ra8#").unwrap().unwrap();
        assert!(mate.is_checking());
        assert!(mate.is_mating());

        let quiet = game.parse_move_text("Ra7").unwrap().unwrap();
        assert!(!quiet.is_checking());
        let bare = game.resolve_move_text("Ra8#").unwrap().unwrap();
        assert!(!bare.is_mating());
        assert_eq!(game.annotate(bare), mate);
    }

    #[test]
    fn test_illegal_text_is_rejected() {
        let game = Game::new();
        for text in ["e5", "Ke2", "Nd4", "O-O"] {
            assert!(
                matches!(
                    game.parse_move_text(text),
                    Err(MoveTextError::NoMatchingMove { .. })
                ),
                "{text}"
            );
        }
    }

    #[test]
    fn test_castling_tokens() {
        let mut game =
            Game::from_position_string("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1")
                .unwrap();
        let mv = game.apply_move_text("O-O").unwrap().unwrap();
        assert_eq!(mv.kind(), MoveKind::KingCastle);
        let mv = game.apply_move_text("0-0-0").unwrap().unwrap();
        assert_eq!(mv.kind(), MoveKind::QueenCastle);
        assert_eq!(mv.to(), sq("b8"));
        assert_eq!(
            game.board().get(sq("c8")),
            Some(Piece::new(PieceKind::Rook, Side::Dark))
        );
    }

    #[test]
    fn test_score_token_records_result() {
        let mut game = Game::new();
        assert_eq!(game.apply_move_text("0-1"), Ok(None));
        assert_eq!(game.result(), Some(GameResult::DarkWins));
        assert_eq!(game.side_to_move(), Side::Light);
    }

    #[test]
    fn test_move_to_text() {
        let game = Game::from_position_string(
            "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2",
        )
        .unwrap();
        let capture = game.parse_move_text("exd5").unwrap().unwrap();
        assert_eq!(game.move_to_text(&capture), "exd5");

        let game = Game::from_position_string("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        let check = game.parse_move_text("Rh8").unwrap().unwrap();
        assert_eq!(game.move_to_text(&check), "Rh8+");

        let game = Game::from_position_string(
            "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2",
        )
        .unwrap();
        let mate = game.parse_move_text("Qh4").unwrap().unwrap();
        assert_eq!(game.move_to_text(&mate), "Qh4#");
    }

    #[test]
    fn test_move_to_text_reparses() {
        for position in [
            "3k4/8/8/8/R6R/8/8/4K3 w - - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1",
        ] {
            let game = Game::from_position_string(position).unwrap();
            for mv in game.every_move() {
                let text = game.move_to_text(&mv);
                let parsed = game.parse_move_text(&text).unwrap().unwrap();
                assert_eq!(parsed, mv, "{text}");
            }
        }
    }
}
