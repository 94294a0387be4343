//! English draughts rules engine.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 grid of optional pieces with bounds-checked access
//! - [`Game`] - selection, move validation, multi-capture and turn management
//! - [`RuleSet`] - trait carrying the variant-specific rules
//! - Move generation for game-over detection and move hints
//!
//! # Example
//!
//! ```
//! use draughts_engine::{Game, Side};
//!
//! let mut game = Game::new();
//! game.select_piece(2, 3);
//! let outcome = game.attempt_move(1, 2);
//! assert!(outcome.is_applied());
//! assert_eq!(game.side_to_move(), Side::White);
//! println!("{}", game.status());
//! ```

mod board;
mod game;
mod movegen;
pub mod rules;

pub use board::{Board, BoardError};
pub use draughts_core::{Coord, LayoutError, LayoutParser, Move, Piece, Side};
pub use game::{Game, GameMove, MoveOutcome, Selection};
pub use movegen::MoveList;
pub use rules::{EnglishDraughts, GameResult, Rejection, RuleSet};
