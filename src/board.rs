//! The 6x7 game grid and the pieces that fill it

use anyhow::{anyhow, Result};

use std::fmt;

use crate::{HEIGHT, WIDTH, WINDOW_LENGTH};

/// The contents of a single cell
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Piece {
    Empty,
    Player,
    Ai,
}

impl Piece {
    /// The other non-empty piece kind. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
            Piece::Empty => Piece::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        match self {
            Piece::Empty => true,
            _ => false,
        }
    }

    fn to_char(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Player => 'X',
            Piece::Ai => 'O',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Piece::Empty),
            'X' => Some(Piece::Player),
            'O' => Some(Piece::Ai),
            _ => None,
        }
    }
}

/// The four orientations a line of pieces can take
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// row and column both increasing
    AscendingDiagonal,
    /// row decreasing while column increases
    DescendingDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::AscendingDiagonal,
        Direction::DescendingDiagonal,
    ];

    // (row step, column step)
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::AscendingDiagonal => (1, 1),
            Direction::DescendingDiagonal => (-1, 1),
        }
    }

    // ranges of anchor rows and columns so that the whole window stays on the board
    fn anchors(self) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let span = WINDOW_LENGTH - 1;
        match self {
            Direction::Horizontal => (0..HEIGHT, 0..WIDTH - span),
            Direction::Vertical => (0..HEIGHT - span, 0..WIDTH),
            Direction::AscendingDiagonal => (0..HEIGHT - span, 0..WIDTH - span),
            Direction::DescendingDiagonal => (span..HEIGHT, 0..WIDTH - span),
        }
    }
}

/// A run of `WINDOW_LENGTH` cells sampled along one direction
pub type Window = [Piece; WINDOW_LENGTH];

/// A Connect 4 board
///
/// Row 0 is the bottom row and pieces fall to the lowest empty row of a column,
/// so the occupied cells of every column form a contiguous block from row 0 upwards.
///
/// `Board` is `Copy`: every speculative move is made on an independent copy.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Piece; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [Piece::Empty; WIDTH * HEIGHT],
        }
    }

    /// Builds a board from a picture of it, top row first
    ///
    /// `.` is an empty cell, `X` a player piece and `O` an AI piece.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != HEIGHT {
            return Err(anyhow!("expected {} rows, found {}", HEIGHT, rows.len()));
        }
        let mut board = Self::new();

        for (i, line) in rows.iter().enumerate() {
            let row = HEIGHT - 1 - i;
            let line = line.as_ref();
            if line.chars().count() != WIDTH {
                return Err(anyhow!("row '{}' is not {} cells wide", line, WIDTH));
            }
            for (column, c) in line.chars().enumerate() {
                let piece = Piece::from_char(c)
                    .ok_or_else(|| anyhow!("could not parse '{}' as a cell", c))?;
                board.cells[column + WIDTH * row] = piece;
            }
        }

        // reject pieces with an empty cell beneath them
        for column in 0..WIDTH {
            for row in 1..HEIGHT {
                if !board.cell(row, column).is_empty() && board.cell(row - 1, column).is_empty() {
                    return Err(anyhow!(
                        "floating piece at row {}, column {}",
                        row + 1,
                        column + 1
                    ));
                }
            }
        }
        Ok(board)
    }

    /// Builds a board from a string of one-indexed column digits,
    /// alternating pieces starting with `first`
    pub fn from_moves<S: AsRef<str>>(moves: S, first: Piece) -> Result<Self> {
        if first.is_empty() {
            return Err(anyhow!("the first piece cannot be empty"));
        }
        let mut board = Self::new();
        let mut piece = first;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    let column = column - 1;
                    if !board.is_valid_location(column) {
                        return Err(anyhow!("Invalid move, column {} full", column + 1));
                    }
                    board.drop(column, piece);
                    piece = piece.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn cell(&self, row: usize, column: usize) -> Piece {
        self.cells[column + WIDTH * row]
    }

    /// Places `piece` at `row` of `column`
    ///
    /// # Panics
    /// If `row` is not the lowest empty row of `column`.
    pub fn drop_piece(&mut self, row: usize, column: usize, piece: Piece) {
        assert_eq!(
            self.next_open_row(column),
            Some(row),
            "row {} is not the next open row of column {}",
            row,
            column
        );
        self.cells[column + WIDTH * row] = piece;
    }

    /// Places `piece` in the lowest empty row of `column`, returning that row
    ///
    /// # Panics
    /// If the column is full. Check with [`is_valid_location`] first.
    ///
    /// [`is_valid_location`]: #method.is_valid_location
    pub fn drop(&mut self, column: usize, piece: Piece) -> usize {
        let row = match self.next_open_row(column) {
            Some(row) => row,
            None => panic!("column {} is full", column),
        };
        self.cells[column + WIDTH * row] = piece;
        row
    }

    /// Whether a piece can still be dropped in `column`
    pub fn is_valid_location(&self, column: usize) -> bool {
        self.cell(HEIGHT - 1, column).is_empty()
    }

    /// The lowest empty row of `column`, or `None` if it is full
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT).find(|&row| self.cell(row, column).is_empty())
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.is_valid_location(column))
    }

    /// The number of cells holding `piece`
    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&cell| cell == piece).count()
    }

    /// The cells of `column`, bottom to top
    pub fn column(&self, column: usize) -> [Piece; HEIGHT] {
        let mut cells = [Piece::Empty; HEIGHT];
        for (row, cell) in cells.iter_mut().enumerate() {
            *cell = self.cell(row, column);
        }
        cells
    }

    /// The board reflected left to right
    pub fn mirrored(&self) -> Self {
        let mut mirror = Self::new();
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                mirror.cells[(WIDTH - 1 - column) + WIDTH * row] = self.cell(row, column);
            }
        }
        mirror
    }

    /// Every window of `WINDOW_LENGTH` cells lying along `direction`
    pub fn windows(&self, direction: Direction) -> impl Iterator<Item = Window> + '_ {
        let (rows, columns) = direction.anchors();
        let (dr, dc) = direction.step();

        rows.flat_map(move |row| columns.clone().map(move |column| (row, column)))
            .map(move |(row, column)| {
                let mut window = [Piece::Empty; WINDOW_LENGTH];
                for (i, cell) in window.iter_mut().enumerate() {
                    let r = (row as isize + dr * i as isize) as usize;
                    let c = (column as isize + dc * i as isize) as usize;
                    *cell = self.cell(r, c);
                }
                window
            })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints the board top row first, in the same characters accepted by [`Board::from_rows`]
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            let line: String = (0..WIDTH).map(|c| self.cell(row, c).to_char()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
