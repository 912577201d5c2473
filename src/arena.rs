//! Benchmark games between the minimax AI and the one-move-lookahead picker

use anyhow::{anyhow, Result};
use indicatif::*;
use rayon::prelude::*;

use std::fmt;
use std::time::Instant;

use crate::{board::*, game::*, search::*, WIDTH};

/// The number of moves played from each opening before the engines take over
pub const OPENING_LENGTH: usize = 2;

/// Tally of finished arena games
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct ArenaReport {
    pub ai_wins: usize,
    pub greedy_wins: usize,
    pub draws: usize,
}

impl ArenaReport {
    pub fn games(&self) -> usize {
        self.ai_wins + self.greedy_wins + self.draws
    }

    fn record(mut self, state: GameState) -> Self {
        match state {
            GameState::AiWin => self.ai_wins += 1,
            GameState::PlayerWin => self.greedy_wins += 1,
            GameState::Draw => self.draws += 1,
            GameState::Playing => {}
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            ai_wins: self.ai_wins + other.ai_wins,
            greedy_wins: self.greedy_wins + other.greedy_wins,
            draws: self.draws + other.draws,
        }
    }
}

impl fmt::Display for ArenaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: minimax won {}, greedy won {}, {} drawn",
            self.games(),
            self.ai_wins,
            self.greedy_wins,
            self.draws
        )
    }
}

/// Every opening of `OPENING_LENGTH` moves, paired with the piece that moves first
pub fn openings() -> Vec<(String, Piece)> {
    let mut sequences = vec![String::new()];
    for _ in 0..OPENING_LENGTH {
        sequences = sequences
            .iter()
            .flat_map(|prefix| (1..=WIDTH).map(move |column| format!("{}{}", prefix, column)))
            .collect();
    }
    [Piece::Ai, Piece::Player]
        .iter()
        .flat_map(|&first| sequences.iter().map(move |moves| (moves.clone(), first)))
        .collect()
}

/// Plays one game from `opening` to the end, with the greedy picker on `Piece::Player`
pub fn play_game(opening: &str, first: Piece, searcher: &mut Searcher) -> Result<GameState> {
    let mut game = Game::new(first);
    for column_char in opening.chars() {
        let column = column_char
            .to_digit(10)
            .ok_or_else(|| anyhow!("could not parse '{}' as a valid move", column_char))?;
        game.play_checked(column as usize)?;
    }

    while !game.state().is_over() {
        match game.turn() {
            Piece::Ai => {
                game.play_ai(searcher)?;
            }
            _ => {
                let column = pick_best_move(game.board(), Piece::Player)
                    .ok_or_else(|| anyhow!("greedy player found no move to play"))?;
                game.play_checked(column + 1)?;
            }
        }
    }
    Ok(game.state())
}

/// Plays every opening in parallel at the given search depth
pub fn run(depth: usize) -> Result<ArenaReport> {
    _run(depth, true)
}

/// Plays every opening in parallel at the given search depth, showing a progress bar
pub fn run_verbose(depth: usize) -> Result<ArenaReport> {
    _run(depth, false)
}

fn _run(depth: usize, silent: bool) -> Result<ArenaReport> {
    let start = Instant::now();
    let openings = openings();

    let progress = if silent {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(openings.len() as u64)
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing arena games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let report = openings
        .par_iter()
        .map(|(opening, first)| {
            let mut searcher = Searcher::new(depth);
            let state = play_game(opening, *first, &mut searcher);
            progress.inc(1);
            state
        })
        .try_fold(ArenaReport::default, |report, state| {
            state.map(|state| report.record(state))
        })
        .try_reduce(ArenaReport::default, |a, b| Ok(a.merge(b)))?;

    progress.finish();
    if !silent {
        println!(
            "Arena completed in {}: {}",
            HumanDuration(start.elapsed()),
            report
        );
    }
    Ok(report)
}
