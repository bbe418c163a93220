use super::Game;

impl Game {
    /// Count the leaves of the legal move tree `depth` plies deep.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.every_legal_move_unannotated();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in &moves {
            let mut child = self.clone();
            child.perform_move(mv);
            nodes += child.perft(depth - 1);
        }
        nodes
    }
}
