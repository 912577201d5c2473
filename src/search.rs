//! Depth-limited minimax search with alpha-beta pruning

use crate::{board::*, evaluation::*, move_generator::*, win_detector::*};

use std::time::Instant;

/// The score of a position the AI has won
pub const AI_WIN_SCORE: i64 = 100_000_000_000_000;
/// The score of a position the player has won
pub const PLAYER_WIN_SCORE: i64 = -10_000_000_000_000;
/// The score of a full board with no winner
pub const DRAW_SCORE: i64 = 0;

/// Lower bound of the initial search window
pub const NEG_INFINITY: i64 = i64::MIN;
/// Upper bound of the initial search window
pub const INFINITY: i64 = i64::MAX;

/// The column chosen by a search and the score backing it
///
/// `column` is `None` for leaf positions, which are scored without choosing a move.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i64,
}

impl SearchResult {
    fn leaf(score: i64) -> Self {
        Self {
            column: None,
            score,
        }
    }
}

/// Whether the game is over: either side has four in a row or the board is full
pub fn is_terminal_node(board: &Board) -> bool {
    winning_move(board, Piece::Player)
        || winning_move(board, Piece::Ai)
        || valid_locations(board).is_empty()
}

/// Runs a minimax search from `board`
///
/// The AI plays `Piece::Ai` and maximises, the player plays `Piece::Player` and minimises.
/// For a move decision call this with `(NEG_INFINITY, INFINITY)` and `maximizing = true`.
pub fn minimax(board: &Board, depth: usize, alpha: i64, beta: i64, maximizing: bool) -> SearchResult {
    Searcher::new(depth).minimax(board, depth, alpha, beta, maximizing)
}

/// Picks the column whose resulting position scores best for `piece`, looking one move ahead
///
/// Returns `None` when the board is full.
pub fn pick_best_move(board: &Board, piece: Piece) -> Option<usize> {
    let valid = valid_locations(board);
    let mut best_column = valid.first()?;
    let mut best_score = -10_000;

    for column in valid {
        let mut next = *board;
        next.drop(column, piece);
        let score = score_position(&next, piece);
        if score > best_score {
            best_score = score;
            best_column = column;
        }
    }
    Some(best_column)
}

/// An AI player searching a fixed number of plies ahead
#[derive(Clone, Debug)]
pub struct Searcher {
    depth: usize,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` looking `depth` plies ahead
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            node_count: 0,
        }
    }

    /// Performs game tree search
    ///
    /// Children are explored in ascending column order on independent copies of `board`,
    /// and a candidate only replaces the current best on a strictly better score.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;

        let valid = valid_locations(board);

        if winning_move(board, Piece::Ai) {
            return SearchResult::leaf(AI_WIN_SCORE);
        }
        if winning_move(board, Piece::Player) {
            return SearchResult::leaf(PLAYER_WIN_SCORE);
        }
        if valid.is_empty() {
            return SearchResult::leaf(DRAW_SCORE);
        }
        if depth == 0 {
            return SearchResult::leaf(score_position(board, Piece::Ai));
        }

        let (piece, mut value) = if maximizing {
            (Piece::Ai, NEG_INFINITY)
        } else {
            (Piece::Player, INFINITY)
        };
        let mut column = valid.first();

        for candidate in valid {
            let mut next = *board;
            next.drop(candidate, piece);
            let score = self.minimax(&next, depth - 1, alpha, beta, !maximizing).score;

            if maximizing {
                if score > value {
                    value = score;
                    column = Some(candidate);
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    column = Some(candidate);
                }
                beta = beta.min(value);
            }
            // the opponent will never allow this line, stop exploring it
            if alpha >= beta {
                break;
            }
        }

        SearchResult {
            column,
            score: value,
        }
    }

    /// Chooses the AI's move for `board`
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self._search(board, true)
    }

    /// Chooses the AI's move for `board`, logging search statistics to stdout
    pub fn search_verbose(&mut self, board: &Board) -> SearchResult {
        self._search(board, false)
    }

    fn _search(&mut self, board: &Board, silent: bool) -> SearchResult {
        let start_nodes = self.node_count;
        let start_time = Instant::now();

        let result = self.minimax(board, self.depth, NEG_INFINITY, INFINITY, true);

        if !silent {
            let elapsed = start_time.elapsed();
            let nodes = self.node_count - start_nodes;
            println!(
                "Search depth: {}, positions: {}, time: {:.3}ms, kpos/s: {:.1}",
                self.depth,
                nodes,
                elapsed.as_secs_f64() * 1000.0,
                nodes as f64 / (1000.0 * elapsed.as_secs_f64().max(f64::EPSILON))
            );
            match result.column {
                Some(column) => println!("Best move: {} (score {})", column + 1, result.score),
                None => println!("No move available (score {})", result.score),
            }
        }
        result
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(crate::DEFAULT_DEPTH)
    }
}
