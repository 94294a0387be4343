//! Move lists for move generation.

use draughts_core::Move;

/// The moves available to a side or a single piece.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    pub fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Adds a move to the list.
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if no move is available.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Keeps only the jumps.
    pub fn retain_jumps(&mut self) {
        self.moves.retain(|m| m.is_jump());
    }

    /// Returns true if any move in the list is a jump.
    pub fn has_jump(&self) -> bool {
        self.moves.iter().any(|m| m.is_jump())
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.moves).finish()
    }
}
