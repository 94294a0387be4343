//! Layout notation parsing.
//!
//! A layout describes a board and the side to move in one line, in the
//! spirit of FEN: eight row groups separated by `/` (row 0 first), using
//! piece characters (`b`, `B`, `w`, `W`) and digits for runs of empty
//! cells, then a space and `b` or `w` for the side to move.

use crate::{Piece, Side, BOARD_HEIGHT, BOARD_WIDTH};
use thiserror::Error;

/// Errors that can occur when parsing layout strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 2 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid side to move: expected 'b' or 'w', got '{0}'")]
    InvalidSide(String),
}

/// Parsed layout data.
///
/// Holds the validated placement rows; the engine turns these into a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutParser {
    /// One entry per row, row 0 first; `None` marks an empty cell.
    pub rows: Vec<Vec<Option<Piece>>>,
    /// Side to move.
    pub side_to_move: Side,
}

impl LayoutParser {
    /// The opening position, black to move.
    pub const OPENING: &'static str = "b2b2b1/1b1b1b2/2bbb3/8/8/w2w2w1/1w1w1w2/2www3 b";

    /// Parses a layout string.
    pub fn parse(layout: &str) -> Result<Self, LayoutError> {
        let parts: Vec<&str> = layout.split_whitespace().collect();

        if parts.len() != 2 {
            return Err(LayoutError::InvalidPartCount(parts.len()));
        }

        let rows = Self::parse_placement(parts[0])?;

        let mut side_chars = parts[1].chars();
        let side_to_move = match (side_chars.next(), side_chars.next()) {
            (Some(c), None) => Side::from_char(c),
            _ => None,
        }
        .ok_or_else(|| LayoutError::InvalidSide(parts[1].to_string()))?;

        Ok(LayoutParser { rows, side_to_move })
    }

    fn parse_placement(placement: &str) -> Result<Vec<Vec<Option<Piece>>>, LayoutError> {
        let groups: Vec<&str> = placement.split('/').collect();
        if groups.len() != usize::from(BOARD_HEIGHT) {
            return Err(LayoutError::InvalidPlacement(format!(
                "expected {} rows, got {}",
                BOARD_HEIGHT,
                groups.len()
            )));
        }

        let mut rows = Vec::with_capacity(groups.len());
        for (row_idx, group) in groups.iter().enumerate() {
            let mut cells = Vec::with_capacity(usize::from(BOARD_WIDTH));
            for c in group.chars() {
                if let Some(run) = c.to_digit(10) {
                    cells.extend(std::iter::repeat(None).take(run as usize));
                } else if let Some(piece) = Piece::from_char(c) {
                    cells.push(Some(piece));
                } else {
                    return Err(LayoutError::InvalidPlacement(format!(
                        "invalid character '{}' in row {}",
                        c, row_idx
                    )));
                }
            }
            if cells.len() != usize::from(BOARD_WIDTH) {
                return Err(LayoutError::InvalidPlacement(format!(
                    "row {} has {} cells, expected {}",
                    row_idx,
                    cells.len(),
                    BOARD_WIDTH
                )));
            }
            rows.push(cells);
        }

        Ok(rows)
    }
}

/// Formats placement rows and a side to move as a layout string.
pub fn format_layout<'a, I>(rows: I, side_to_move: Side) -> String
where
    I: IntoIterator<Item = &'a [Option<Piece>]>,
{
    let mut out = String::new();
    for (row_idx, row) in rows.into_iter().enumerate() {
        if row_idx > 0 {
            out.push('/');
        }
        let mut empty = 0;
        for cell in row {
            match cell {
                Some(piece) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.to_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
    }
    out.push(' ');
    out.push(side_to_move.to_char());
    out
}
