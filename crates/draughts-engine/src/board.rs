//! Board state: an 8x8 grid of optional pieces.

use draughts_core::{format_layout, Coord, LayoutError, LayoutParser, Piece, Side};
use draughts_core::{BOARD_HEIGHT, BOARD_WIDTH};
use thiserror::Error;

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Occupied columns per row in the opening, for black's three rows.
/// White's rows 5-7 use the same columns.
const START_COLUMNS: [[u8; 3]; 3] = [[0, 3, 6], [1, 3, 5], [2, 3, 4]];

/// Error returned for out-of-range cell access.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the 8x8 board")]
    OutOfBounds { row: usize, col: usize },
}

/// The draughts board.
///
/// Each cell holds at most one piece and a piece lives in exactly one cell;
/// pieces are moved between cells, never duplicated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; WIDTH]; HEIGHT],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; WIDTH]; HEIGHT],
        }
    }

    /// Creates a board in the opening layout.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Clears the board and places the nine opening pieces of each side.
    pub fn reset(&mut self) {
        self.cells = [[None; WIDTH]; HEIGHT];
        for (offset, columns) in START_COLUMNS.iter().enumerate() {
            for &col in columns {
                self.cells[offset][usize::from(col)] = Some(Piece::man(Side::Black));
                self.cells[HEIGHT - 3 + offset][usize::from(col)] = Some(Piece::man(Side::White));
            }
        }
    }

    /// Creates a board and side to move from layout notation.
    pub fn from_layout(layout: &str) -> Result<(Self, Side), LayoutError> {
        let parsed = LayoutParser::parse(layout)?;
        let mut board = Board::empty();
        for (row, cells) in parsed.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                board.cells[row][col] = *cell;
            }
        }
        Ok((board, parsed.side_to_move))
    }

    /// Converts the board to layout notation with the given side to move.
    pub fn to_layout(&self, side_to_move: Side) -> String {
        format_layout(self.cells.iter().map(|row| row.as_slice()), side_to_move)
    }

    /// Returns the piece at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Piece>, BoardError> {
        Self::check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Places `piece` (or nothing) at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, piece: Option<Piece>) -> Result<(), BoardError> {
        Self::check_bounds(row, col)?;
        self.cells[row][col] = piece;
        Ok(())
    }

    fn check_bounds(row: usize, col: usize) -> Result<(), BoardError> {
        if row < HEIGHT && col < WIDTH {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    /// Returns the piece at a coordinate.
    #[inline]
    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.cells[usize::from(at.row())][usize::from(at.col())]
    }

    #[inline]
    fn cell_mut(&mut self, at: Coord) -> &mut Option<Piece> {
        &mut self.cells[usize::from(at.row())][usize::from(at.col())]
    }

    /// Places `piece` (or nothing) at a coordinate.
    #[inline]
    pub fn put(&mut self, at: Coord, piece: Option<Piece>) {
        *self.cell_mut(at) = piece;
    }

    /// Removes and returns the piece at a coordinate.
    #[inline]
    pub fn remove(&mut self, at: Coord) -> Option<Piece> {
        self.cell_mut(at).take()
    }

    /// Moves the piece at `from` to `to`, leaving `from` empty.
    ///
    /// Returns the moved piece, or `None` (and changes nothing) if `from`
    /// was empty. Whatever was on `to` is overwritten.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Option<Piece> {
        let piece = self.remove(from)?;
        self.put(to, Some(piece));
        Some(piece)
    }

    /// Crowns the man at a coordinate. Returns true if a man was crowned.
    pub fn crown(&mut self, at: Coord) -> bool {
        match self.cell_mut(at) {
            Some(piece) if !piece.is_king() => {
                piece.crown();
                true
            }
            _ => false,
        }
    }

    /// Iterates over the pieces of one side with their coordinates.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(move |at| match self.piece_at(at) {
            Some(piece) if piece.side() == side => Some((at, piece)),
            _ => None,
        })
    }

    /// Returns the number of pieces of one side.
    pub fn count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }

    /// Returns the number of pieces on the board.
    pub fn population(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Returns the board reflected across the horizontal midline with the
    /// sides swapped, so that each side's moves map onto the other's.
    pub fn mirrored(&self) -> Self {
        let mut mirror = Board::empty();
        for at in Coord::all() {
            if let Some(piece) = self.piece_at(at) {
                let swapped = if piece.is_king() {
                    Piece::king(piece.side().opposite())
                } else {
                    Piece::man(piece.side().opposite())
                };
                mirror.put(at.flip_rows(), Some(swapped));
            }
        }
        mirror
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}
