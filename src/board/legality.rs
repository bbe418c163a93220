//! Legality by simulation: every candidate is played on a copy of the game
//! and the copy is inspected for an attacked king.

use super::movegen::Scan;
use super::state::Outcome;
use super::{Game, Move, Piece, PieceKind, Side, Square};

impl Game {
    /// Every move the piece on `from` could make, ignoring self-check.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square) -> Vec<Move> {
        self.generate(from, Scan::Moves)
    }

    /// Legal moves for the piece on `from`, with check and mate flags set.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Move> {
        self.legal_moves_unannotated(from)
            .into_iter()
            .map(|mv| self.annotate(mv))
            .collect()
    }

    /// Legal moves for every piece of the side to move, annotated.
    #[must_use]
    pub fn every_move(&self) -> Vec<Move> {
        self.every_legal_move_unannotated()
            .into_iter()
            .map(|mv| self.annotate(mv))
            .collect()
    }

    pub(crate) fn legal_moves_unannotated(&self, from: Square) -> Vec<Move> {
        let mut moves = self.generate(from, Scan::Moves);
        moves.retain(|mv| {
            let illegal = self.can_reveal_check(mv);
            if illegal {
                log::trace!("rejecting {mv}: leaves own king attacked");
            }
            !illegal
        });
        moves
    }

    pub(crate) fn every_legal_move_unannotated(&self) -> Vec<Move> {
        let side = self.side_to_move;
        let mut moves = Vec::new();
        for (square, piece) in self.board.pieces() {
            if piece.side == side {
                moves.extend(self.legal_moves_unannotated(square));
            }
        }
        moves
    }

    /// Whether playing `mv` would leave the mover's own king attacked.
    #[must_use]
    pub fn can_reveal_check(&self, mv: &Move) -> bool {
        let mut probe = self.clone();
        probe.perform_move(mv);
        probe.is_in_check(mv.piece().side)
    }

    /// Whether `mv` attacks the opposing king once played.
    #[must_use]
    pub fn does_check(&self, mv: &Move) -> bool {
        let mut probe = self.clone();
        probe.perform_move(mv);
        probe.is_in_check(mv.piece().side.other())
    }

    /// Whether `mv` leaves the opponent in check with no legal reply.
    #[must_use]
    pub fn does_mate(&self, mv: &Move) -> bool {
        let mut probe = self.clone();
        probe.perform_move(mv);
        let defender = mv.piece().side.other();
        let mated =
            probe.is_in_check(defender) && probe.every_legal_move_unannotated().is_empty();
        log::trace!("mate probe {mv}: {mated}");
        mated
    }

    /// Fill in the check and mate flags of a freshly generated move.
    #[must_use]
    pub fn annotate(&self, mut mv: Move) -> Move {
        let checking = self.does_check(&mv);
        let mating = checking && self.does_mate(&mv);
        mv.set_flags(checking, mating);
        mv
    }

    /// Whether `side`'s king stands on a square the other side attacks.
    /// A side without a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, side: Side) -> bool {
        self.king_square(side)
            .is_some_and(|king| self.is_attacked_by(king, side.other()))
    }

    pub(crate) fn king_square(&self, side: Side) -> Option<Square> {
        self.board.find(Piece::new(PieceKind::King, side))
    }

    /// Whether any piece of `attacker` has a move landing on `target`. Only
    /// meaningful for an occupied target, since quiet pushes count too.
    pub(crate) fn is_attacked_by(&self, target: Square, attacker: Side) -> bool {
        self.board
            .pieces()
            .filter(|(_, piece)| piece.side == attacker)
            .any(|(square, _)| {
                self.generate(square, Scan::Attacks)
                    .iter()
                    .any(|mv| mv.to() == target)
            })
    }

    /// Checkmate, stalemate or neither, for the side to move.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if !self.every_legal_move_unannotated().is_empty() {
            return Outcome::Ongoing;
        }
        if self.is_in_check(self.side_to_move) {
            Outcome::Checkmate {
                winner: self.side_to_move.other(),
            }
        } else {
            Outcome::Stalemate
        }
    }
}
