//! Turn sequencing for a game between a human and the AI

use anyhow::{anyhow, Result};

use crate::{board::*, search::*, win_detector::*, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerWin,
    AiWin,
    Draw,
}

impl GameState {
    pub fn is_over(self) -> bool {
        self != GameState::Playing
    }
}

/// A game in progress, tracking whose turn it is and how it has gone so far
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Piece,
    state: GameState,
    history: String,
}

impl Game {
    /// Starts a game on an empty board with `first` to move
    ///
    /// # Panics
    /// If `first` is `Piece::Empty`.
    pub fn new(first: Piece) -> Self {
        assert!(!first.is_empty(), "an empty piece cannot take a turn");
        Self {
            board: Board::new(),
            turn: first,
            state: GameState::Playing,
            history: String::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The piece to move next
    pub fn turn(&self) -> Piece {
        self.turn
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The columns played so far, one-indexed
    pub fn history(&self) -> &str {
        &self.history
    }

    /// Plays the side to move in `column_one_indexed`, rejecting illegal moves
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if self.state.is_over() {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        let column = column_one_indexed - 1;
        if !self.board.is_valid_location(column) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }

        self.board.drop(column, self.turn);
        self.history.push_str(&column_one_indexed.to_string());

        self.state = if winning_move(&self.board, self.turn) {
            match self.turn {
                Piece::Ai => GameState::AiWin,
                _ => GameState::PlayerWin,
            }
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.turn = self.turn.opponent();

        Ok(self.state)
    }

    /// Lets `searcher` choose and play the AI's move
    pub fn play_ai(&mut self, searcher: &mut Searcher) -> Result<SearchResult> {
        if self.turn != Piece::Ai {
            return Err(anyhow!("It is not the AI's turn"));
        }
        if self.state.is_over() {
            return Err(anyhow!("Invalid move, the game is over"));
        }

        let result = searcher.search(&self.board);
        let column = result
            .column
            .ok_or_else(|| anyhow!("search found no move to play"))?;
        self.play_checked(column + 1)?;
        Ok(result)
    }
}
