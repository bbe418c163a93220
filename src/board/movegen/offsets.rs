use super::super::{Game, Move, MoveKind, Piece, Square};
use super::Offset;

impl Game {
    pub(crate) fn expand_offsets(
        &self,
        offsets: &[Offset],
        can_capture: bool,
        capture_only: bool,
        from: Square,
        piece: Piece,
        out: &mut Vec<Move>,
    ) {
        for &(df, dr) in offsets {
            let Some(to) = from.offset(df, dr) else {
                continue;
            };
            match self.board.side_at(to) {
                None if !capture_only => out.push(Move::new(MoveKind::Move, from, piece, to)),
                Some(side) if side != piece.side && can_capture => {
                    out.push(Move::new(MoveKind::Capture, from, piece, to));
                }
                _ => {}
            }
        }
    }
}
