//! Serialization round-trips through `serde_json`.

use crate::board::{Game, GameResult, Move, Outcome, Side};

#[test]
fn test_move_json_roundtrip() {
    let game = Game::new();
    for mv in game.every_move() {
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mv);
    }
}

#[test]
fn test_outcome_and_result_json() {
    let outcome = Outcome::Checkmate {
        winner: Side::Dark,
    };
    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(serde_json::from_str::<Outcome>(&json).unwrap(), outcome);

    let json = serde_json::to_string(&GameResult::Draw).unwrap();
    assert_eq!(json, "\"Draw\"");
}
