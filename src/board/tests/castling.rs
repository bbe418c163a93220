//! Castling generation, itineraries and rights bookkeeping.

use crate::board::{Game, MoveKind, Piece, PieceKind, Side, Square, Wing};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn castles(game: &Game) -> Vec<MoveKind> {
    game.every_move()
        .iter()
        .filter(|m| m.is_castling())
        .map(|m| m.kind())
        .collect()
}

#[test]
fn test_itineraries_for_both_sides() {
    let mut game = Game::from_position_string("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    game.apply_move_text("O-O-O").unwrap();
    assert_eq!(
        game.board().get(sq("b1")),
        Some(Piece::new(PieceKind::King, Side::Light))
    );
    assert_eq!(
        game.board().get(sq("c1")),
        Some(Piece::new(PieceKind::Rook, Side::Light))
    );

    game.apply_move_text("O-O").unwrap();
    assert_eq!(
        game.board().get(sq("g8")),
        Some(Piece::new(PieceKind::King, Side::Dark))
    );
    assert_eq!(
        game.board().get(sq("f8")),
        Some(Piece::new(PieceKind::Rook, Side::Dark))
    );
    assert_eq!(game.to_position_string(), "r4rk1/8/8/8/8/8/8/1KR4R w - - 2 2");
}

#[test]
fn test_king_move_drops_both_rights_for_good() {
    let mut game = Game::from_position_string("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    for text in ["Kd1", "Kd8", "Ke1", "Ke8"] {
        game.apply_move_text(text).unwrap();
    }
    assert!(!game.castling_rights().has(Side::Light, Wing::Kingside));
    assert!(!game.castling_rights().has(Side::Light, Wing::Queenside));
    assert!(castles(&game).is_empty());
}

#[test]
fn test_rook_round_trip_keeps_other_wing() {
    let mut game = Game::from_position_string("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    for text in ["Rh2", "Rh7", "Rh1", "Rh8"] {
        game.apply_move_text(text).unwrap();
    }
    assert_eq!(game.castling_rights().to_string(), "Qq");
    assert_eq!(castles(&game), vec![MoveKind::QueenCastle]);
}

#[test]
fn test_castling_into_check_is_filtered() {
    // The bishop on e4 covers b1 but neither d1 nor c1.
    let game = Game::from_position_string("4k3/8/8/8/4b3/8/8/R3K3 w Q - 0 1").unwrap();
    assert!(castles(&game).is_empty());
}

#[test]
fn test_rook_attacked_does_not_block_castling() {
    // h1 is attacked, but the king never crosses it.
    let game = Game::from_position_string("4k2r/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    assert_eq!(castles(&game), vec![MoveKind::KingCastle]);
}

#[test]
fn test_rights_without_rook_generate_nothing() {
    let game = Game::from_position_string("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1").unwrap();
    assert!(castles(&game).is_empty());
}
