//! Heuristic scoring of board positions
//!
//! A position is scored for one side by sliding a window of four cells along
//! every row, column and diagonal and adding up the patterns found, plus a bonus
//! for each piece in the center column.

use crate::{board::*, WIDTH};

/// Score of a window holding four of the scored piece
pub const FOUR_SCORE: i64 = 100;
/// Score of a window holding three of the scored piece and one empty cell
pub const THREE_SCORE: i64 = 5;
/// Score of a window holding two of the scored piece and two empty cells
pub const TWO_SCORE: i64 = 2;
/// Score of a window holding three opponent pieces and one empty cell
pub const OPPONENT_THREE_SCORE: i64 = -4;
/// Bonus for each of the scored pieces in the center column
pub const CENTER_SCORE: i64 = 3;

/// Scores a single window from the perspective of `piece`
pub fn evaluate_window(window: &Window, piece: Piece) -> i64 {
    debug_assert!(!piece.is_empty(), "cannot score a window for an empty piece");

    let count = |kind: Piece| window.iter().filter(|&&cell| cell == kind).count();
    let own = count(piece);
    let opponent = count(piece.opponent());
    let empty = count(Piece::Empty);

    let mut score = 0;
    if own == 4 {
        score += FOUR_SCORE;
    } else if own == 3 && empty == 1 {
        score += THREE_SCORE;
    } else if own == 2 && empty == 2 {
        score += TWO_SCORE;
    }

    if opponent == 3 && empty == 1 {
        score += OPPONENT_THREE_SCORE;
    }
    score
}

/// Scores the whole board from the perspective of `piece`
pub fn score_position(board: &Board, piece: Piece) -> i64 {
    let center_count = board
        .column(WIDTH / 2)
        .iter()
        .filter(|&&cell| cell == piece)
        .count();

    let windows: i64 = Direction::ALL
        .iter()
        .flat_map(move |&direction| board.windows(direction))
        .map(|window| evaluate_window(&window, piece))
        .sum();

    center_count as i64 * CENTER_SCORE + windows
}
