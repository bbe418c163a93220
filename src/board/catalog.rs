//! Process-wide table mapping each piece kind to its move generator.

use once_cell::sync::Lazy;

use super::movegen::{
    king_generator, pawn_generator, MoveGenerator, BISHOP_DIRECTIONS, KNIGHT_OFFSETS,
    ROOK_DIRECTIONS, ROYAL_DIRECTIONS,
};
use super::PieceKind;

/// Indexed by `PieceKind::index`.
static CATALOG: Lazy<[MoveGenerator; 6]> = Lazy::new(|| {
    let slider = |directions: &[(i8, i8)]| MoveGenerator::Sliding {
        directions: directions.to_vec(),
        limit: 8,
    };
    [
        slider(&ROOK_DIRECTIONS[..]),
        MoveGenerator::FixedOffset {
            offsets: KNIGHT_OFFSETS.to_vec(),
            can_capture: true,
            capture_only: false,
        },
        king_generator(),
        slider(&ROYAL_DIRECTIONS[..]),
        slider(&BISHOP_DIRECTIONS[..]),
        pawn_generator(),
    ]
});

impl PieceKind {
    /// The shared generator describing how this kind moves.
    #[must_use]
    pub fn generator(self) -> &'static MoveGenerator {
        &CATALOG[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_kinds() {
        assert!(matches!(
            PieceKind::Rook.generator(),
            MoveGenerator::Sliding { limit: 8, directions } if directions.len() == 4
        ));
        assert!(matches!(
            PieceKind::Queen.generator(),
            MoveGenerator::Sliding { limit: 8, directions } if directions.len() == 8
        ));
        assert!(matches!(
            PieceKind::Knight.generator(),
            MoveGenerator::FixedOffset { can_capture: true, capture_only: false, .. }
        ));
        assert!(matches!(
            PieceKind::King.generator(),
            MoveGenerator::Composite(_)
        ));
        assert!(matches!(
            PieceKind::Pawn.generator(),
            MoveGenerator::Composite(_)
        ));
    }

    #[test]
    fn test_same_kind_shares_one_generator() {
        let a: *const MoveGenerator = PieceKind::Bishop.generator();
        let b: *const MoveGenerator = PieceKind::Bishop.generator();
        assert_eq!(a, b);
    }
}
