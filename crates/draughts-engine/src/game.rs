//! Turn-based game management.
//!
//! The [`Game`] struct drives a draughts game through two commands:
//! - [`Game::select_piece`] picks the piece to move
//! - [`Game::attempt_move`] validates and applies a destination
//!
//! It tracks whose turn it is, forced multi-capture continuations,
//! promotion, game over, and the move history.

use crate::rules::{EnglishDraughts, GameResult, Rejection, RuleSet};
use crate::{Board, MoveList};
use draughts_core::{Coord, LayoutError, Move, Piece, Side};
use tracing::{debug, info, trace};

/// The current piece selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing is selected.
    #[default]
    Idle,
    /// A piece has been picked and may make any legal move.
    Selected { origin: Coord },
    /// The piece on `origin` has just captured and must capture again.
    ForcedContinuation { origin: Coord },
}

impl Selection {
    /// Returns the cell of the selected piece, if any.
    pub const fn origin(self) -> Option<Coord> {
        match self {
            Selection::Idle => None,
            Selection::Selected { origin } | Selection::ForcedContinuation { origin } => {
                Some(origin)
            }
        }
    }

    /// Returns true during a multi-capture.
    pub const fn is_forced(self) -> bool {
        matches!(self, Selection::ForcedContinuation { .. })
    }
}

/// What happened to a requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move broke a rule; nothing changed.
    Rejected { reason: Rejection },
    /// The move was applied.
    Applied {
        /// An opposing piece was removed.
        captured: bool,
        /// The moving piece was crowned on arrival.
        promoted: bool,
        /// The same piece must capture again before the turn ends.
        continuation_required: bool,
        /// The turn passed to the other side.
        turn_ended: bool,
        /// The side now to move has no legal move.
        game_over: bool,
        winner: Option<Side>,
    },
}

impl MoveOutcome {
    /// Returns true if the move was applied.
    pub const fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }

    /// Returns the rejection reason, if the move was rejected.
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Rejected { reason } => Some(*reason),
            MoveOutcome::Applied { .. } => None,
        }
    }
}

/// A recorded move in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMove {
    /// The step or jump.
    pub mov: Move,
    /// The side that moved.
    pub side: Side,
    /// The cell of the captured piece, for jumps.
    pub captured: Option<Coord>,
    /// Whether the piece was crowned by this move.
    pub promoted: bool,
}

/// A draughts game in progress.
///
/// The board and the session state are owned here and change only through
/// [`select_piece`](Game::select_piece), [`attempt_move`](Game::attempt_move)
/// and [`new_game`](Game::new_game). A rejected move leaves everything but
/// the status line untouched.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Side,
    selection: Selection,
    result: Option<GameResult>,
    history: Vec<GameMove>,
    status: String,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the opening layout, black to move.
    pub fn new() -> Self {
        Self::from_board(EnglishDraughts.initial_board(), Side::Black)
    }

    /// Creates a game from an arbitrary board.
    ///
    /// The game may already be over if `side_to_move` has no legal move.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        let mut game = Game {
            board,
            side_to_move,
            selection: Selection::Idle,
            result: None,
            history: Vec::new(),
            status: String::new(),
        };
        game.status = game.turn_status();
        game.check_game_end();
        game
    }

    /// Creates a game from layout notation.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let (board, side_to_move) = Board::from_layout(layout)?;
        Ok(Self::from_board(board, side_to_move))
    }

    /// Discards the current game and starts over from the opening.
    pub fn new_game(&mut self) {
        self.board.reset();
        self.side_to_move = Side::Black;
        self.selection = Selection::Idle;
        self.result = None;
        self.history.clear();
        self.status = self.turn_status();
        debug!("new game started");
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side whose turn it is.
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Returns the current selection state.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Returns the selected piece, read from the board.
    pub fn selected_piece(&self) -> Option<Piece> {
        self.selection.origin().and_then(|at| self.board.piece_at(at))
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns the winning side once the game is over.
    pub fn winner(&self) -> Option<Side> {
        self.result.map(GameResult::winner)
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns a human-readable line describing the last event.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the move history, one entry per step or jump.
    pub fn move_history(&self) -> &[GameMove] {
        &self.history
    }

    /// Returns the number of steps and jumps played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the current position in layout notation.
    pub fn to_layout(&self) -> String {
        self.board.to_layout(self.side_to_move)
    }

    /// Returns the moves currently available to the side to move.
    ///
    /// During a multi-capture only the continuing piece's jumps are listed.
    pub fn legal_moves(&self) -> MoveList {
        if self.result.is_some() {
            return MoveList::new();
        }
        match self.selection {
            Selection::ForcedContinuation { origin } => {
                let mut list = MoveList::new();
                EnglishDraughts.generate_piece_moves(&self.board, origin, &mut list);
                list.retain_jumps();
                list
            }
            _ => EnglishDraughts.generate_moves(&self.board, self.side_to_move),
        }
    }

    /// Selects the piece on `(row, col)` as the piece to move.
    ///
    /// Empty or off-board cells leave the selection unchanged, as does any
    /// call after the game is over or while a multi-capture is pending.
    pub fn select_piece(&mut self, row: i32, col: i32) {
        if self.result.is_some() {
            return;
        }
        let Some(at) = Coord::try_new(row, col) else {
            return;
        };
        if self.board.piece_at(at).is_none() {
            return;
        }
        if self.selection.is_forced() {
            trace!(%at, "selection locked during multi-capture");
            return;
        }
        trace!(%at, "piece selected");
        self.selection = Selection::Selected { origin: at };
    }

    /// Tries to move the selected piece to `(row, col)`.
    pub fn attempt_move(&mut self, row: i32, col: i32) -> MoveOutcome {
        match self.validate(row, col) {
            Ok(m) => self.apply_move(m),
            Err(reason) => {
                trace!(row, col, %reason, "move rejected");
                self.status = reason.to_string();
                MoveOutcome::Rejected { reason }
            }
        }
    }

    fn validate(&self, row: i32, col: i32) -> Result<Move, Rejection> {
        if self.result.is_some() {
            return Err(Rejection::GameOver);
        }
        let origin = self.selection.origin().ok_or(Rejection::NoPieceSelected)?;
        let piece = self.board.piece_at(origin).ok_or(Rejection::NoPieceSelected)?;
        if piece.side() != self.side_to_move {
            return Err(Rejection::NotYourTurn);
        }
        let dest = Coord::try_new(row, col).ok_or(Rejection::OutOfBoard)?;
        EnglishDraughts.validate(&self.board, origin, dest, self.selection.is_forced())
    }

    /// Applies a validated move.
    fn apply_move(&mut self, m: Move) -> MoveOutcome {
        let side = self.side_to_move;
        let captured = m.jumped();

        self.board.move_piece(m.from(), m.to());
        if let Some(at) = captured {
            self.board.remove(at);
        }

        let promoted = match self.board.piece_at(m.to()) {
            Some(piece) if EnglishDraughts.promotes(piece, m.to()) => self.board.crown(m.to()),
            _ => false,
        };

        self.history.push(GameMove {
            mov: m,
            side,
            captured,
            promoted,
        });
        debug!(%side, mv = %m, promoted, "move applied");

        if captured.is_some() && EnglishDraughts.has_capture_from(&self.board, m.to()) {
            self.selection = Selection::ForcedContinuation { origin: m.to() };
            self.status = format!("{} must keep capturing from {}", side, m.to());
            debug!(%side, at = %m.to(), "capture continues");
            return MoveOutcome::Applied {
                captured: true,
                promoted,
                continuation_required: true,
                turn_ended: false,
                game_over: false,
                winner: None,
            };
        }

        self.selection = Selection::Idle;
        self.side_to_move = side.opposite();
        self.status = self.turn_status();
        self.check_game_end();

        MoveOutcome::Applied {
            captured: captured.is_some(),
            promoted,
            continuation_required: false,
            turn_ended: true,
            game_over: self.result.is_some(),
            winner: self.winner(),
        }
    }

    /// Checks if the side to move is stuck and records the result.
    fn check_game_end(&mut self) {
        if let Some(result) = EnglishDraughts.game_result(&self.board, self.side_to_move) {
            info!(%result, plies = self.history.len(), "game over");
            self.selection = Selection::Idle;
            self.status = format!("{}!", result);
            self.result = Some(result);
        }
    }

    fn turn_status(&self) -> String {
        format!("{} to move", self.side_to_move)
    }
}
