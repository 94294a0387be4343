//! Draughts piece representation.

use crate::Side;

/// A single draughts piece: a man, or a king once crowned.
///
/// The side never changes after creation. The king flag only ever goes
/// from `false` to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    side: Side,
    king: bool,
}

impl Piece {
    /// Creates an uncrowned man.
    #[inline]
    pub const fn man(side: Side) -> Self {
        Piece { side, king: false }
    }

    /// Creates a king.
    #[inline]
    pub const fn king(side: Side) -> Self {
        Piece { side, king: true }
    }

    /// Returns the side owning this piece.
    #[inline]
    pub const fn side(self) -> Side {
        self.side
    }

    #[inline]
    pub const fn is_black(self) -> bool {
        matches!(self.side, Side::Black)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        self.king
    }

    /// Crowns the piece. Crowning a king is a no-op.
    #[inline]
    pub fn crown(&mut self) {
        self.king = true;
    }

    /// Returns true if `other` belongs to the opposing side.
    #[inline]
    pub fn is_opponent_of(self, other: Piece) -> bool {
        self.side != other.side
    }

    /// Returns the layout notation character for this piece.
    pub const fn to_char(self) -> char {
        match (self.side, self.king) {
            (Side::Black, false) => 'b',
            (Side::Black, true) => 'B',
            (Side::White, false) => 'w',
            (Side::White, true) => 'W',
        }
    }

    /// Parses a layout notation character.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'b' => Some(Piece::man(Side::Black)),
            'B' => Some(Piece::king(Side::Black)),
            'w' => Some(Piece::man(Side::White)),
            'W' => Some(Piece::king(Side::White)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.king {
            write!(f, "{} king", self.side)
        } else {
            write!(f, "{} man", self.side)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_chars() {
        assert_eq!(Piece::man(Side::Black).to_char(), 'b');
        assert_eq!(Piece::king(Side::White).to_char(), 'W');
        assert_eq!(Piece::from_char('B'), Some(Piece::king(Side::Black)));
        assert_eq!(Piece::from_char('w'), Some(Piece::man(Side::White)));
        assert_eq!(Piece::from_char('k'), None);
    }

    #[test]
    fn crown_is_one_way() {
        let mut piece = Piece::man(Side::White);
        assert!(!piece.is_king());
        piece.crown();
        assert!(piece.is_king());
        piece.crown();
        assert!(piece.is_king());
        assert_eq!(piece.side(), Side::White);
    }

    #[test]
    fn opponents() {
        let black = Piece::man(Side::Black);
        let white = Piece::king(Side::White);
        assert!(black.is_black());
        assert!(!white.is_black());
        assert!(black.is_opponent_of(white));
        assert!(!black.is_opponent_of(Piece::king(Side::Black)));
    }

    #[test]
    fn display() {
        assert_eq!(Piece::man(Side::Black).to_string(), "Black man");
        assert_eq!(Piece::king(Side::White).to_string(), "White king");
    }
}
