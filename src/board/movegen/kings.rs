use super::super::{Annex, MoveKind, Wing};
use super::{Condition, Guard, MoveGenerator, ROYAL_DIRECTIONS};

/// One step in any direction, plus the two castling itineraries while the
/// matching right is still held.
pub(crate) fn king_generator() -> MoveGenerator {
    let castle = |offset, kind| MoveGenerator::Special {
        offset,
        kind,
        can_capture: false,
        capture_only: false,
        annex: Some(Annex::ClearCastlingRights),
    };
    MoveGenerator::Composite(vec![
        (
            Guard::always(),
            MoveGenerator::Sliding {
                directions: ROYAL_DIRECTIONS.to_vec(),
                limit: 1,
            },
        ),
        (
            Guard::all([Condition::CastlingRight(Wing::Kingside)]),
            castle((2, 0), MoveKind::KingCastle),
        ),
        (
            Guard::all([Condition::CastlingRight(Wing::Queenside)]),
            castle((-3, 0), MoveKind::QueenCastle),
        ),
    ])
}
