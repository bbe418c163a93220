use super::super::{
    king_home, Annex, Game, Move, MoveKind, Piece, PieceKind, Square, Wing, PROMOTION_TARGETS,
};
use super::{Offset, Scan};

impl Game {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn expand_special(
        &self,
        (df, dr): Offset,
        kind: MoveKind,
        (can_capture, capture_only): (bool, bool),
        annex: Option<Annex>,
        from: Square,
        piece: Piece,
        scan: Scan,
        out: &mut Vec<Move>,
    ) {
        let Some(to) = from.offset(df, dr) else {
            return;
        };
        match kind {
            MoveKind::Promotion => {
                let open = match self.board.side_at(to) {
                    Some(side) => side != piece.side && can_capture,
                    None => !capture_only,
                };
                if open {
                    for target in PROMOTION_TARGETS {
                        let mv = Move::new(kind, from, piece, to).with_promotion(target);
                        out.push(with_annex(mv, annex));
                    }
                }
            }
            MoveKind::EnPassant => {
                if self.en_passant == Some(to) && self.holds_en_passant_victim(from, to, piece) {
                    let mv = Move::new(kind, from, piece, to);
                    out.push(with_annex(mv, annex.or(Some(Annex::RemoveEnPassantVictim))));
                }
            }
            MoveKind::KingCastle | MoveKind::QueenCastle => {
                let wing = if kind == MoveKind::KingCastle {
                    Wing::Kingside
                } else {
                    Wing::Queenside
                };
                if scan == Scan::Moves && self.castling_is_open(from, to, piece, wing) {
                    out.push(with_annex(Move::new(kind, from, piece, to), annex));
                }
            }
            MoveKind::Move | MoveKind::Capture | MoveKind::GameOver => {}
        }
    }

    /// The pawn that just double-pushed sits beside the capturer, on the
    /// destination file and the capturer's own rank.
    fn holds_en_passant_victim(&self, from: Square, to: Square, piece: Piece) -> bool {
        let victim = Square::at(from.rank(), to.file());
        self.board.get(victim) == Some(Piece::new(PieceKind::Pawn, piece.side.other()))
    }

    /// King and rook unmoved on their home squares, nothing between them, and
    /// the king neither in check nor crossing an attacked square. The landing
    /// square is left to the ordinary self-check filter.
    fn castling_is_open(&self, from: Square, to: Square, king: Piece, wing: Wing) -> bool {
        let side = king.side;
        let rook_home = wing.rook_home(side);
        if king.kind != PieceKind::King
            || from != king_home(side)
            || !self.board.is_empty(to)
            || self.board.get(rook_home) != Some(Piece::new(PieceKind::Rook, side))
        {
            return false;
        }

        let (low, high) = if rook_home.file() < from.file() {
            (rook_home.file() + 1, from.file())
        } else {
            (from.file() + 1, rook_home.file())
        };
        if (low..high).any(|file| !self.board.is_empty(Square::at(from.rank(), file))) {
            return false;
        }

        if self.is_in_check(side) {
            return false;
        }

        let step = if to.file() > from.file() { 1 } else { -1 };
        let mut transit = from;
        while let Some(next) = transit.offset(step, 0) {
            if next == to {
                break;
            }
            let probe = Move::new(MoveKind::Move, from, king, next);
            if self.can_reveal_check(&probe) {
                return false;
            }
            transit = next;
        }
        true
    }
}

fn with_annex(mv: Move, annex: Option<Annex>) -> Move {
    match annex {
        Some(annex) => mv.with_annex(annex),
        None => mv,
    }
}
