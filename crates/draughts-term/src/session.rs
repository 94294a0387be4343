//! An interactive game session: one game plus the front-end config.

use crate::command::Command;
use crate::config::Config;
use crate::render::render;
use draughts_engine::{Coord, Game, MoveOutcome};

/// Whether the command loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    game: Game,
    config: Config,
}

impl Session {
    /// Creates a session around a game.
    pub fn new(game: Game, config: Config) -> Self {
        Session { game, config }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Renders the current board and status.
    pub fn show(&self) -> String {
        render(&self.game, &self.config)
    }

    /// Executes one command, returning the text to print.
    pub fn handle(&mut self, command: Command) -> (Flow, String) {
        let output = match command {
            Command::Select { row, col } => {
                self.game.select_piece(row, col);
                self.show()
            }
            Command::Move { row, col } => self.play(row, col),
            Command::Click { x, y } => {
                let (row, col) = self.config.cell_at(x, y);
                tracing::trace!(x, y, row, col, "click");
                if self.owns(row, col) && !self.game.selection().is_forced() {
                    self.game.select_piece(row, col);
                    self.show()
                } else {
                    self.play(row, col)
                }
            }
            Command::Moves => {
                let moves = self.game.legal_moves();
                if moves.is_empty() {
                    "no moves available".to_string()
                } else {
                    moves
                        .as_slice()
                        .iter()
                        .map(|m| m.to_notation())
                        .collect::<Vec<_>>()
                        .join(" ")
                }
            }
            Command::Show => self.show(),
            Command::Layout => self.game.to_layout(),
            Command::New => {
                self.game.new_game();
                self.show()
            }
            Command::Help => Command::HELP.to_string(),
            Command::Empty => String::new(),
            Command::Quit => return (Flow::Quit, String::new()),
        };
        (Flow::Continue, output)
    }

    fn play(&mut self, row: i32, col: i32) -> String {
        match self.game.attempt_move(row, col) {
            MoveOutcome::Rejected { .. } => self.game.status().to_string(),
            MoveOutcome::Applied { .. } => self.show(),
        }
    }

    /// Returns true if `(row, col)` holds a piece of the side to move.
    fn owns(&self, row: i32, col: i32) -> bool {
        Coord::try_new(row, col)
            .and_then(|at| self.game.board().piece_at(at))
            .is_some_and(|piece| piece.side() == self.game.side_to_move())
    }
}
