//! Declarative move-generator descriptors and their evaluation.
//!
//! Each piece kind owns one `MoveGenerator` from the static catalog. A
//! generator is plain data: a sliding ray set, a set of fixed offsets, a
//! guarded composite of other generators, or a rule-specific special move.
//! `Game::expand` turns a descriptor into candidate moves for one square.

mod kings;
mod offsets;
mod pawns;
mod sliders;
mod special;

pub(crate) use kings::king_generator;
pub(crate) use pawns::pawn_generator;

use super::{Annex, Game, Move, MoveKind, Piece, Side, Square, Wing};

/// (file delta, rank delta)
pub type Offset = (i8, i8);

pub const ROOK_DIRECTIONS: [Offset; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_DIRECTIONS: [Offset; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ROYAL_DIRECTIONS: [Offset; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
];

/// How a piece kind moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveGenerator {
    /// Walk each direction up to `limit` steps, stopping at the first piece.
    Sliding { directions: Vec<Offset>, limit: u8 },
    /// Land on each offset once.
    FixedOffset {
        offsets: Vec<Offset>,
        can_capture: bool,
        capture_only: bool,
    },
    /// Sub-generators that contribute only while their guard holds,
    /// expanded in declared order.
    Composite(Vec<(Guard, MoveGenerator)>),
    /// One offset with rule-specific semantics chosen by `kind`.
    Special {
        offset: Offset,
        kind: MoveKind,
        can_capture: bool,
        capture_only: bool,
        annex: Option<Annex>,
    },
}

/// One test a composite entry runs against the game and the piece's square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    /// The moving piece belongs to this side.
    SideIs(Side),
    /// The piece stands on this rank (0-7).
    OnRank(usize),
    /// The piece does not stand on this rank (0-7).
    NotOnRank(usize),
    /// The square at this offset holds an opposing piece.
    EnemyAt(Offset),
    /// The square at this offset is on the board and empty.
    EmptyAt(Offset),
    /// The piece's side still holds this castling right.
    CastlingRight(Wing),
}

/// Conjunction of conditions; an empty guard always holds.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Guard(Vec<Condition>);

impl Guard {
    #[must_use]
    pub fn always() -> Self {
        Guard(Vec::new())
    }

    #[must_use]
    pub fn all<I: IntoIterator<Item = Condition>>(conditions: I) -> Self {
        Guard(conditions.into_iter().collect())
    }

    pub(crate) fn holds(&self, game: &Game, from: Square, piece: Piece) -> bool {
        self.0.iter().all(|condition| match *condition {
            Condition::SideIs(side) => piece.side == side,
            Condition::OnRank(rank) => from.rank() == rank,
            Condition::NotOnRank(rank) => from.rank() != rank,
            Condition::EnemyAt((df, dr)) => from
                .offset(df, dr)
                .and_then(|sq| game.board.side_at(sq))
                .is_some_and(|side| side != piece.side),
            Condition::EmptyAt((df, dr)) => from
                .offset(df, dr)
                .is_some_and(|sq| game.board.is_empty(sq)),
            Condition::CastlingRight(wing) => game.castling.has(piece.side, wing),
        })
    }
}

/// What a generation pass is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Scan {
    /// Every pseudo-legal move.
    Moves,
    /// Only what can land on an occupied square; castling is skipped since it
    /// never captures and its own safety test would recurse.
    Attacks,
}

impl Game {
    /// Expand `generator` for `piece` standing on `from`, appending to `out`.
    pub(crate) fn expand(
        &self,
        generator: &MoveGenerator,
        from: Square,
        piece: Piece,
        scan: Scan,
        out: &mut Vec<Move>,
    ) {
        match generator {
            MoveGenerator::Sliding { directions, limit } => {
                self.expand_sliding(directions, *limit, from, piece, out);
            }
            MoveGenerator::FixedOffset {
                offsets,
                can_capture,
                capture_only,
            } => self.expand_offsets(offsets, *can_capture, *capture_only, from, piece, out),
            MoveGenerator::Composite(entries) => {
                for (guard, sub) in entries {
                    if guard.holds(self, from, piece) {
                        self.expand(sub, from, piece, scan, out);
                    }
                }
            }
            MoveGenerator::Special {
                offset,
                kind,
                can_capture,
                capture_only,
                annex,
            } => self.expand_special(
                *offset,
                *kind,
                (*can_capture, *capture_only),
                *annex,
                from,
                piece,
                scan,
                out,
            ),
        }
    }

    /// Candidate moves for whatever stands on `from`, with no legality filter.
    pub(crate) fn generate(&self, from: Square, scan: Scan) -> Vec<Move> {
        let mut out = Vec::new();
        if let Some(piece) = self.board.get(from) {
            self.expand(piece.kind.generator(), from, piece, scan, &mut out);
        }
        out
    }
}
