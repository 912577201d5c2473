//! A computer opponent for the board game 'Connect 4'
//!
//! The opponent looks a fixed number of moves ahead with a minimax
//! search using alpha-beta pruning, scoring the positions it cannot
//! see past with a heuristic that counts promising lines of four.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::*, search::*};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::new();
//! let result = minimax(&board, 1, NEG_INFINITY, INFINITY, true);
//!
//! // the center column is the best first move
//! assert_eq!(result, SearchResult { column: Some(3), score: 3 });
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod win_detector;

pub mod evaluation;

pub mod move_generator;

pub mod search;

pub mod game;

pub mod arena;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of tiles in a line needed to win
pub const WINDOW_LENGTH: usize = 4;

/// The number of plies the AI searches ahead unless told otherwise
pub const DEFAULT_DEPTH: usize = 5;

// a winning line must fit on the board in every direction
const_assert!(WIDTH >= WINDOW_LENGTH && HEIGHT >= WINDOW_LENGTH);
// the center column bonus needs a single middle column
const_assert!(WIDTH % 2 == 1);
