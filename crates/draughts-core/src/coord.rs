//! Board coordinate representation.

use std::fmt;

/// Number of columns on the board.
pub const BOARD_WIDTH: u8 = 8;

/// Number of rows on the board.
pub const BOARD_HEIGHT: u8 = 8;

/// A cell on the draughts board, indexed 0-63.
///
/// Cells are indexed row-major from the top-left corner:
/// - (0, 0) = 0, (0, 1) = 1, ..., (0, 7) = 7
/// - (1, 0) = 8, ..., (7, 7) = 63
///
/// Row 0 is black's back rank side and row 7 is white's.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord(u8);

impl Coord {
    /// Creates a coordinate from row and column, or `None` when off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_HEIGHT && col < BOARD_WIDTH {
            Some(Coord(row * BOARD_WIDTH + col))
        } else {
            None
        }
    }

    /// Creates a coordinate from signed input, as produced by front-ends.
    ///
    /// Negative or too large values yield `None` rather than being clamped.
    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Self::new(row, col)
    }

    /// Creates a coordinate from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < BOARD_WIDTH * BOARD_HEIGHT {
            Some(Coord(index))
        } else {
            None
        }
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_WIDTH
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_WIDTH
    }

    /// Returns the coordinate shifted by the given deltas, if still on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(
            i32::from(self.row()) + i32::from(d_row),
            i32::from(self.col()) + i32::from(d_col),
        )
    }

    /// Returns the coordinate reflected across the horizontal midline.
    #[inline]
    pub const fn flip_rows(self) -> Self {
        Coord((BOARD_HEIGHT - 1 - self.row()) * BOARD_WIDTH + self.col())
    }

    /// Iterates over all 64 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_WIDTH * BOARD_HEIGHT).map(Coord)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {})", self.row(), self.col())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row(), self.col())
    }
}
