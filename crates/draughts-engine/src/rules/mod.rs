//! Rule set abstraction for draughts variants.
//!
//! The [`RuleSet`] trait carries all game-specific logic so that the
//! [`Game`](crate::Game) state machine stays rule-agnostic. Move generation
//! and game-over detection are derived from [`RuleSet::validate`], which
//! keeps every query consistent with what the engine accepts.

mod english;

pub use english::EnglishDraughts;

use crate::{Board, MoveList};
use draughts_core::{Coord, Move, Piece, Side};
use thiserror::Error;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black wins: white has no legal move.
    BlackWins,
    /// White wins: black has no legal move.
    WhiteWins,
}

impl GameResult {
    /// Creates the result for a given winning side.
    pub const fn won_by(side: Side) -> Self {
        match side {
            Side::Black => GameResult::BlackWins,
            Side::White => GameResult::WhiteWins,
        }
    }

    /// Returns the winning side.
    pub const fn winner(self) -> Side {
        match self {
            GameResult::BlackWins => Side::Black,
            GameResult::WhiteWins => Side::White,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wins", self.winner())
    }
}

/// Reason a requested move was refused.
///
/// Rejections are ordinary outcomes, not faults: the `Display` text is meant
/// to be shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the game is over")]
    GameOver,

    #[error("please select a piece to move")]
    NoPieceSelected,

    #[error("it is not that side's turn")]
    NotYourTurn,

    #[error("can't move a piece off the board")]
    OutOfBoard,

    #[error("a piece can only move one square diagonally")]
    NotDiagonal,

    #[error("the capturing piece must keep capturing")]
    ContinuationRequired,

    #[error("a piece can only move forward")]
    NotForward,

    #[error("can't move to an occupied square")]
    Occupied,

    #[error("a king can only capture forward and backward along a diagonal")]
    InvalidKingCaptureDirection,
}

/// Trait for implementing draughts rule variants.
///
/// # Example
///
/// ```
/// use draughts_engine::rules::{EnglishDraughts, RuleSet};
/// use draughts_engine::Side;
///
/// let board = EnglishDraughts.initial_board();
/// let moves = EnglishDraughts.generate_moves(&board, Side::Black);
/// assert!(!moves.is_empty());
/// ```
pub trait RuleSet {
    /// Returns the opening board for this variant.
    fn initial_board(&self) -> Board;

    /// Checks a move of the piece on `origin` to `dest`.
    ///
    /// `continuing` is true while the piece is in the middle of a
    /// multi-capture and may only capture. Returns the validated move or
    /// the first rule it breaks. Turn order is not checked here.
    fn validate(
        &self,
        board: &Board,
        origin: Coord,
        dest: Coord,
        continuing: bool,
    ) -> Result<Move, Rejection>;

    /// Returns true if `piece`, having arrived on `at`, is crowned.
    fn promotes(&self, piece: Piece, at: Coord) -> bool;

    /// Appends every legal move of the piece on `from` to `list`.
    fn generate_piece_moves(&self, board: &Board, from: Coord, list: &mut MoveList) {
        for d_row in [-1i8, 1] {
            for d_col in [-1i8, 1] {
                for reach in [1i8, 2] {
                    let Some(dest) = from.offset(d_row * reach, d_col * reach) else {
                        continue;
                    };
                    if let Ok(m) = self.validate(board, from, dest, false) {
                        list.push(m);
                    }
                }
            }
        }
    }

    /// Generates all legal moves for one side.
    fn generate_moves(&self, board: &Board, side: Side) -> MoveList {
        let mut list = MoveList::new();
        for (from, _) in board.pieces(side) {
            self.generate_piece_moves(board, from, &mut list);
        }
        list
    }

    /// Returns true if the piece on `from` can capture.
    fn has_capture_from(&self, board: &Board, from: Coord) -> bool {
        let mut list = MoveList::new();
        self.generate_piece_moves(board, from, &mut list);
        list.has_jump()
    }

    /// Returns the game result if `side_to_move` cannot move, otherwise `None`.
    fn game_result(&self, board: &Board, side_to_move: Side) -> Option<GameResult> {
        if self.generate_moves(board, side_to_move).is_empty() {
            Some(GameResult::won_by(side_to_move.opposite()))
        } else {
            None
        }
    }

    /// Returns true if the game is over for `side_to_move`.
    fn is_game_over(&self, board: &Board, side_to_move: Side) -> bool {
        self.game_result(board, side_to_move).is_some()
    }
}
