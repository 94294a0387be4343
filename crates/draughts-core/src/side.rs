//! Player side representation.

use crate::BOARD_HEIGHT;

/// The two sides in draughts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Black = 0,
    White = 1,
}

impl Side {
    /// Returns the opposite side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Returns the row delta of a forward move (-1 for Black, +1 for White).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Black => -1,
            Side::White => 1,
        }
    }

    /// Returns the row on which a man of this side is crowned.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::Black => 0,
            Side::White => BOARD_HEIGHT - 1,
        }
    }

    /// Returns the layout notation character for the side to move.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Side::Black => 'b',
            Side::White => 'w',
        }
    }

    /// Parses a side-to-move character.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'b' => Some(Side::Black),
            'w' => Some(Side::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}
