use super::super::{Game, Move, MoveKind, Piece, Square};
use super::Offset;

impl Game {
    pub(crate) fn expand_sliding(
        &self,
        directions: &[Offset],
        limit: u8,
        from: Square,
        piece: Piece,
        out: &mut Vec<Move>,
    ) {
        for &(df, dr) in directions {
            let mut current = from;
            for _ in 0..limit {
                let Some(next) = current.offset(df, dr) else {
                    break;
                };
                match self.board.side_at(next) {
                    None => out.push(Move::new(MoveKind::Move, from, piece, next)),
                    Some(side) => {
                        if side != piece.side {
                            out.push(Move::new(MoveKind::Capture, from, piece, next));
                        }
                        break;
                    }
                }
                current = next;
            }
        }
    }
}
