//! English draughts rules as played by this engine.

use super::{Rejection, RuleSet};
use crate::Board;
use draughts_core::{Coord, Move, Piece};

/// English draughts on an 8x8 board.
///
/// - Men and kings step one square diagonally, forward only. Kings keep the
///   forward restriction for plain steps.
/// - Captures jump two squares over an adjacent opposing piece. Men capture
///   forward only; kings capture forward and backward.
/// - Men are crowned on reaching the far row.
/// - A side with no legal move loses.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishDraughts;

impl RuleSet for EnglishDraughts {
    fn initial_board(&self) -> Board {
        Board::initial()
    }

    fn validate(
        &self,
        board: &Board,
        origin: Coord,
        dest: Coord,
        continuing: bool,
    ) -> Result<Move, Rejection> {
        let piece = board.piece_at(origin).ok_or(Rejection::NoPieceSelected)?;

        let d_row = dest.row() as i8 - origin.row() as i8;
        let d_col = dest.col() as i8 - origin.col() as i8;
        let is_step = d_row.abs() == 1 && d_col.abs() == 1;
        let is_jump_shape = d_row.abs() == 2 && d_col.abs() == 2;
        // A king's malformed capture is recognised here and rejected by shape
        // below; a man's capture must already be a two-square diagonal.
        let is_capture = !is_step
            && (is_jump_shape || piece.is_king())
            && captures_midpoint(board, piece, origin, dest);

        if !is_step && !is_capture {
            return Err(Rejection::NotDiagonal);
        }
        if is_step && continuing {
            return Err(Rejection::ContinuationRequired);
        }

        let forward = d_row.signum() == piece.side().forward();
        if !forward && (is_step || !piece.is_king()) {
            return Err(Rejection::NotForward);
        }

        if board.piece_at(dest).is_some() {
            return Err(Rejection::Occupied);
        }

        if is_capture && !is_jump_shape {
            return Err(Rejection::InvalidKingCaptureDirection);
        }

        Ok(Move::new(origin, dest))
    }

    fn promotes(&self, piece: Piece, at: Coord) -> bool {
        !piece.is_king() && at.row() == piece.side().promotion_row()
    }
}

/// Returns true if the cell halfway between `origin` and `dest` (rounded
/// down) holds a piece of the other side.
fn captures_midpoint(board: &Board, piece: Piece, origin: Coord, dest: Coord) -> bool {
    let mid = Coord::new(
        (origin.row() + dest.row()) / 2,
        (origin.col() + dest.col()) / 2,
    );
    match mid.and_then(|at| board.piece_at(at)) {
        Some(other) => piece.is_opponent_of(other),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::GameResult;
    use draughts_core::Side;

    fn c(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn board(layout: &str) -> Board {
        Board::from_layout(layout).unwrap().0
    }

    fn check(b: &Board, from: (u8, u8), to: (u8, u8)) -> Result<Move, Rejection> {
        EnglishDraughts.validate(b, c(from.0, from.1), c(to.0, to.1), false)
    }

    #[test]
    fn black_steps_toward_row_zero() {
        let b = board("8/8/8/8/3b4/8/8/8 b");
        assert_eq!(check(&b, (4, 3), (3, 2)), Ok(Move::new(c(4, 3), c(3, 2))));
        assert_eq!(check(&b, (4, 3), (3, 4)), Ok(Move::new(c(4, 3), c(3, 4))));
        assert_eq!(check(&b, (4, 3), (5, 2)), Err(Rejection::NotForward));
    }

    #[test]
    fn white_steps_toward_row_seven() {
        let b = board("8/8/8/3w4/8/8/8/8 w");
        assert!(check(&b, (3, 3), (4, 4)).is_ok());
        assert_eq!(check(&b, (3, 3), (2, 4)), Err(Rejection::NotForward));
    }

    #[test]
    fn kings_step_forward_only() {
        let b = board("8/8/8/3B4/8/8/8/8 b");
        assert!(check(&b, (3, 3), (2, 2)).is_ok());
        assert_eq!(check(&b, (3, 3), (4, 2)), Err(Rejection::NotForward));
    }

    #[test]
    fn rejects_non_diagonal_moves() {
        let b = board("8/8/8/8/3b4/8/8/8 b");
        assert_eq!(check(&b, (4, 3), (3, 3)), Err(Rejection::NotDiagonal));
        assert_eq!(check(&b, (4, 3), (4, 4)), Err(Rejection::NotDiagonal));
        assert_eq!(check(&b, (4, 3), (2, 1)), Err(Rejection::NotDiagonal));
        assert_eq!(check(&b, (4, 3), (4, 3)), Err(Rejection::NotDiagonal));
    }

    #[test]
    fn rejects_occupied_destination() {
        let b = board("8/8/8/2w5/3b4/8/8/8 b");
        assert_eq!(check(&b, (4, 3), (3, 2)), Err(Rejection::Occupied));
    }

    #[test]
    fn man_captures_forward() {
        let b = board("8/8/8/2w5/3b4/8/8/8 b");
        let m = check(&b, (4, 3), (2, 1)).unwrap();
        assert!(m.is_jump());
        assert_eq!(m.jumped(), Some(c(3, 2)));
    }

    #[test]
    fn man_cannot_capture_backward() {
        let b = board("8/8/8/3b4/4w3/8/8/8 b");
        assert_eq!(check(&b, (3, 3), (5, 5)), Err(Rejection::NotForward));
    }

    #[test]
    fn king_captures_backward() {
        let b = board("8/8/8/3B4/4w3/8/8/8 b");
        let m = check(&b, (3, 3), (5, 5)).unwrap();
        assert_eq!(m.jumped(), Some(c(4, 4)));
    }

    #[test]
    fn cannot_jump_own_piece_or_empty_square() {
        let b = board("8/8/8/2b5/3b4/8/8/8 b");
        assert_eq!(check(&b, (4, 3), (2, 1)), Err(Rejection::NotDiagonal));
        let b = board("8/8/8/8/3b4/8/8/8 b");
        assert_eq!(check(&b, (4, 3), (2, 1)), Err(Rejection::NotDiagonal));
    }

    #[test]
    fn capture_requires_empty_landing() {
        let b = board("8/8/1w6/2w5/3b4/8/8/8 b");
        assert_eq!(check(&b, (4, 3), (2, 1)), Err(Rejection::Occupied));
    }

    #[test]
    fn malformed_king_capture() {
        // The rounded-down midpoint of (3,3)->(3,5) is (3,4), which holds a
        // white piece, but the jump is not diagonal.
        let b = board("8/8/8/3Bw3/8/8/8/8 b");
        assert_eq!(
            check(&b, (3, 3), (3, 5)),
            Err(Rejection::InvalidKingCaptureDirection)
        );
        let b = board("8/8/8/8/3bw3/8/8/8 b");
        assert_eq!(check(&b, (4, 3), (3, 5)), Err(Rejection::NotDiagonal));
    }

    #[test]
    fn man_non_diagonal_request_over_opponent_is_not_diagonal() {
        // Sideways: the midpoint (3,4) holds white, the landing is empty.
        let b = board("8/8/8/3bw3/8/8/8/8 b");
        assert_eq!(check(&b, (3, 3), (3, 5)), Err(Rejection::NotDiagonal));

        // Knight-shaped onto an occupied cell: shape fails before occupancy.
        let b = board("8/8/8/4ww2/3b4/8/1w6/8 b");
        assert_eq!(check(&b, (4, 3), (3, 5)), Err(Rejection::NotDiagonal));

        // Knight-shaped backward: shape fails before direction.
        let b = board("8/8/8/8/3bw3/8/8/8 b");
        assert_eq!(check(&b, (4, 3), (5, 5)), Err(Rejection::NotDiagonal));
    }

    #[test]
    fn continuation_allows_only_captures() {
        let b = board("8/8/8/2w5/3b4/8/8/8 b");
        assert_eq!(
            EnglishDraughts.validate(&b, c(4, 3), c(3, 4), true),
            Err(Rejection::ContinuationRequired)
        );
        assert!(EnglishDraughts.validate(&b, c(4, 3), c(2, 1), true).is_ok());
    }

    #[test]
    fn empty_origin() {
        let b = Board::empty();
        assert_eq!(check(&b, (4, 3), (3, 2)), Err(Rejection::NoPieceSelected));
    }

    #[test]
    fn promotion_rows() {
        assert!(EnglishDraughts.promotes(Piece::man(Side::Black), c(0, 1)));
        assert!(!EnglishDraughts.promotes(Piece::man(Side::Black), c(7, 1)));
        assert!(EnglishDraughts.promotes(Piece::man(Side::White), c(7, 2)));
        assert!(!EnglishDraughts.promotes(Piece::king(Side::White), c(7, 2)));
    }

    #[test]
    fn opening_moves() {
        let b = EnglishDraughts.initial_board();
        let black = EnglishDraughts.generate_moves(&b, Side::Black);
        let mut moves: Vec<String> = black.as_slice().iter().map(|m| m.to_notation()).collect();
        moves.sort();
        assert_eq!(
            moves,
            vec!["1,1-0,2", "1,3-0,2", "1,3-0,4", "1,5-0,4", "2,3-1,2", "2,3-1,4"]
        );

        let white = EnglishDraughts.generate_moves(&b, Side::White);
        assert_eq!(white.len(), 5);
        assert!(white.as_slice().iter().all(|m| m.row_delta() == 1));
    }

    #[test]
    fn capture_detection() {
        let b = board("8/8/8/2w5/3b4/8/8/8 b");
        assert!(EnglishDraughts.has_capture_from(&b, c(4, 3)));
        assert!(EnglishDraughts.has_capture_from(&b, c(3, 2)));

        let b = board("8/8/8/8/3b4/8/8/8 b");
        assert!(!EnglishDraughts.has_capture_from(&b, c(4, 3)));
        assert!(!EnglishDraughts.has_capture_from(&b, c(0, 0)));
    }

    #[test]
    fn no_moves_loses() {
        let b = board("8/8/8/8/8/8/8/3w4 w");
        assert_eq!(
            EnglishDraughts.game_result(&b, Side::White),
            Some(GameResult::BlackWins)
        );
        assert_eq!(
            EnglishDraughts.game_result(&b, Side::Black),
            Some(GameResult::WhiteWins)
        );
        assert!(!EnglishDraughts.is_game_over(&EnglishDraughts.initial_board(), Side::Black));
    }
}
