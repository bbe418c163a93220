use super::{sign, Annex, Game, Move, MoveKind, Piece, PieceKind, Side, Square, Wing};

impl Game {
    /// Apply `mv` to the game. The move is trusted: legality is the caller's
    /// concern, which is why the probes in `legality` can use this on copies.
    pub fn perform_move(&mut self, mv: &Move) {
        let (from, to, piece) = (mv.from(), mv.to(), mv.piece());
        let side = piece.side;
        log::debug!("{side} plays {mv} ({:?})", mv.kind());

        match mv.kind() {
            MoveKind::GameOver => {}
            MoveKind::Move | MoveKind::EnPassant => self.relocate(from, to),
            MoveKind::Capture => {
                self.record_capture(side, to);
                self.relocate(from, to);
            }
            MoveKind::KingCastle | MoveKind::QueenCastle => {
                let wing = if mv.kind() == MoveKind::KingCastle {
                    Wing::Kingside
                } else {
                    Wing::Queenside
                };
                self.relocate(from, to);
                let rook_from = wing.rook_home(side);
                let toward_center = sign(4 - to.file() as i8);
                if let Some(rook_to) = to.offset(toward_center, 0) {
                    self.relocate(rook_from, rook_to);
                }
                self.castling.remove_side(side);
            }
            MoveKind::Promotion => {
                self.board.take(from);
                self.record_capture(side, to);
                let kind = mv.promotion().unwrap_or(PieceKind::Queen);
                self.board.set(to, Some(Piece::new(kind, side)));
            }
        }

        let game_over = mv.kind() == MoveKind::GameOver;
        if !game_over {
            self.castling.revoke_at(from);
            self.castling.revoke_at(to);
            self.en_passant = double_push_midpoint(piece, from, to);
        }

        if side == Side::Dark {
            self.fullmove_number += 1;
        }
        if piece.kind == PieceKind::Pawn {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if !game_over {
            self.side_to_move = self.side_to_move.other();
        }

        if let Some(annex) = mv.annex() {
            self.run_annex(annex, from, to, side);
        }
    }

    fn run_annex(&mut self, annex: Annex, from: Square, to: Square, side: Side) {
        match annex {
            Annex::ClearCastlingRights => self.castling.revoke_at(from),
            Annex::RemoveEnPassantVictim => {
                let victim = Square::at(from.rank(), to.file());
                if let Some(pawn) = self.board.take(victim) {
                    self.captured[side.index()].push(pawn);
                }
            }
        }
    }

    fn relocate(&mut self, from: Square, to: Square) {
        let piece = self.board.take(from);
        self.board.set(to, piece);
    }

    fn record_capture(&mut self, side: Side, square: Square) {
        if let Some(taken) = self.board.get(square) {
            self.captured[side.index()].push(taken);
        }
    }
}

fn double_push_midpoint(piece: Piece, from: Square, to: Square) -> Option<Square> {
    let double_push = piece.kind == PieceKind::Pawn
        && from.file() == to.file()
        && from.rank().abs_diff(to.rank()) == 2;
    if double_push {
        Some(Square::at((from.rank() + to.rank()) / 2, from.file()))
    } else {
        None
    }
}
