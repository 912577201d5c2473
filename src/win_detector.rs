use crate::board::*;

/// Checks whether `piece` has four in a row in any direction
///
/// Every anchor of every orientation is scanned and the search stops at the first match.
pub fn winning_move(board: &Board, piece: Piece) -> bool {
    if piece.is_empty() {
        return false;
    }
    Direction::ALL.iter().any(|&direction| {
        board
            .windows(direction)
            .any(|window| window.iter().all(|&cell| cell == piece))
    })
}
