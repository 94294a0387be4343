//! Core types for English draughts.
//!
//! This crate provides the fundamental types shared by the engine and any
//! front-end:
//! - [`Piece`] and [`Side`] for piece representation
//! - [`Coord`] for board coordinates
//! - [`Move`] for step and jump representation
//! - Layout notation parsing (a FEN-like board description)

mod coord;
mod layout;
mod mov;
mod piece;
mod side;

pub use coord::{Coord, BOARD_HEIGHT, BOARD_WIDTH};
pub use layout::{format_layout, LayoutError, LayoutParser};
pub use mov::Move;
pub use piece::Piece;
pub use side::Side;
