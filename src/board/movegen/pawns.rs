use super::super::{Annex, MoveKind, Side};
use super::{Condition, Guard, MoveGenerator};

/// Pawn moves for both sides, each entry gated on the mover's side and, where
/// it matters, on the rank the pawn stands on.
pub(crate) fn pawn_generator() -> MoveGenerator {
    let mut entries = Vec::new();
    for side in Side::BOTH {
        let dir = side.pawn_direction();
        let start = side.pawn_start_rank();
        let pre = side.pre_promotion_rank();

        entries.push((
            Guard::all([Condition::SideIs(side), Condition::NotOnRank(pre)]),
            MoveGenerator::FixedOffset {
                offsets: vec![(0, dir)],
                can_capture: false,
                capture_only: false,
            },
        ));
        entries.push((
            Guard::all([Condition::SideIs(side), Condition::OnRank(pre)]),
            promotion((0, dir), false),
        ));
        entries.push((
            Guard::all([
                Condition::SideIs(side),
                Condition::OnRank(start),
                Condition::EmptyAt((0, dir)),
            ]),
            MoveGenerator::FixedOffset {
                offsets: vec![(0, 2 * dir)],
                can_capture: false,
                capture_only: false,
            },
        ));

        for df in [-1, 1] {
            entries.push((
                Guard::all([Condition::SideIs(side), Condition::NotOnRank(pre)]),
                MoveGenerator::FixedOffset {
                    offsets: vec![(df, dir)],
                    can_capture: true,
                    capture_only: true,
                },
            ));
            entries.push((
                Guard::all([
                    Condition::SideIs(side),
                    Condition::OnRank(pre),
                    Condition::EnemyAt((df, dir)),
                ]),
                promotion((df, dir), true),
            ));
            entries.push((
                Guard::all([Condition::SideIs(side)]),
                MoveGenerator::Special {
                    offset: (df, dir),
                    kind: MoveKind::EnPassant,
                    can_capture: true,
                    capture_only: true,
                    annex: Some(Annex::RemoveEnPassantVictim),
                },
            ));
        }
    }
    MoveGenerator::Composite(entries)
}

fn promotion(offset: (i8, i8), capture_only: bool) -> MoveGenerator {
    MoveGenerator::Special {
        offset,
        kind: MoveKind::Promotion,
        can_capture: capture_only,
        capture_only,
        annex: None,
    }
}
