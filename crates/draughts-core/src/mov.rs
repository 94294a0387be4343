//! Move representation.

use crate::Coord;
use std::fmt;

/// A single step or jump of one piece.
///
/// Encoded compactly: 6 bits from, 6 bits to = 12 bits total. A multi-capture
/// is recorded as a sequence of jumps.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Move(from.index() as u16 | ((to.index() as u16) << 6))
    }

    /// Returns the origin cell.
    #[inline]
    pub const fn from(self) -> Coord {
        match Coord::from_index((self.0 & 0x3F) as u8) {
            Some(c) => c,
            None => unreachable!(),
        }
    }

    /// Returns the destination cell.
    #[inline]
    pub const fn to(self) -> Coord {
        match Coord::from_index(((self.0 >> 6) & 0x3F) as u8) {
            Some(c) => c,
            None => unreachable!(),
        }
    }

    /// Signed row distance from origin to destination.
    #[inline]
    pub const fn row_delta(self) -> i8 {
        self.to().row() as i8 - self.from().row() as i8
    }

    /// Signed column distance from origin to destination.
    #[inline]
    pub const fn col_delta(self) -> i8 {
        self.to().col() as i8 - self.from().col() as i8
    }

    /// Returns true if this move jumps two squares.
    #[inline]
    pub const fn is_jump(self) -> bool {
        self.row_delta().abs() == 2
    }

    /// Returns the cell jumped over, for jumps.
    pub fn jumped(self) -> Option<Coord> {
        if !self.is_jump() {
            return None;
        }
        self.from().offset(self.row_delta() / 2, self.col_delta() / 2)
    }

    /// Returns the move in `row,col-row,col` notation, `x` for jumps.
    pub fn to_notation(self) -> String {
        let sep = if self.is_jump() { 'x' } else { '-' };
        format!("{}{}{}", self.from(), sep, self.to())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn move_encoding() {
        let m = Move::new(c(2, 3), c(1, 4));
        assert_eq!(m.from(), c(2, 3));
        assert_eq!(m.to(), c(1, 4));
        assert_eq!(m.row_delta(), -1);
        assert_eq!(m.col_delta(), 1);
        assert!(!m.is_jump());
        assert_eq!(m.jumped(), None);
    }

    #[test]
    fn jump_midpoint() {
        let m = Move::new(c(2, 3), c(4, 5));
        assert!(m.is_jump());
        assert_eq!(m.jumped(), Some(c(3, 4)));

        let back = Move::new(c(5, 5), c(3, 3));
        assert_eq!(back.jumped(), Some(c(4, 4)));
    }

    #[test]
    fn notation() {
        assert_eq!(Move::new(c(5, 0), c(6, 1)).to_notation(), "5,0-6,1");
        assert_eq!(Move::new(c(2, 3), c(4, 5)).to_string(), "2,3x4,5");
    }
}
