//! Text rendering of the board.

use crate::config::Config;
use draughts_core::{Coord, BOARD_HEIGHT, BOARD_WIDTH};
use draughts_engine::Game;

/// Renders the board, one row per line, followed by the status line.
///
/// Pieces use layout notation characters; empty cells are `.` and the
/// selected piece is wrapped in brackets.
pub fn render(game: &Game, config: &Config) -> String {
    let selected = game.selection().origin();
    let mut out = String::new();

    if config.show_coordinates {
        out.push_str("   ");
        for col in 0..BOARD_WIDTH {
            out.push_str(&format!(" {} ", col));
        }
        out.push('\n');
    }

    for row in 0..BOARD_HEIGHT {
        if config.show_coordinates {
            out.push_str(&format!("{}  ", row));
        }
        for col in 0..BOARD_WIDTH {
            let cell = Coord::new(row, col).and_then(|at| game.board().piece_at(at));
            let glyph = cell.map_or('.', |piece| piece.to_char());
            if selected.is_some_and(|at| at.row() == row && at.col() == col) {
                out.push_str(&format!("[{}]", glyph));
            } else {
                out.push_str(&format!(" {} ", glyph));
            }
        }
        out.push('\n');
    }

    out.push_str(game.status());
    out
}
