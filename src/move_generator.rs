use crate::{board::Board, WIDTH};

/// The playable columns of a position, in ascending order
///
/// Backed by a fixed array so generating moves at every search node does not allocate.
#[derive(Copy, Clone, Debug)]
pub struct ValidLocations {
    size: usize,
    next: usize,
    columns: [usize; WIDTH],
}

impl ValidLocations {
    fn new() -> Self {
        Self {
            size: 0,
            next: 0,
            columns: [0; WIDTH],
        }
    }

    fn push(&mut self, column: usize) {
        self.columns[self.size] = column;
        self.size += 1;
    }

    /// The remaining columns as a slice
    pub fn as_slice(&self) -> &[usize] {
        &self.columns[self.next..self.size]
    }

    /// The lowest remaining column
    pub fn first(&self) -> Option<usize> {
        self.as_slice().first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl Iterator for ValidLocations {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let column = self.first()?;
        self.next += 1;
        Some(column)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.size - self.next;
        (len, Some(len))
    }
}

impl ExactSizeIterator for ValidLocations {}

/// Lists every column that is not yet full, lowest index first
pub fn valid_locations(board: &Board) -> ValidLocations {
    let mut locations = ValidLocations::new();
    for column in 0..WIDTH {
        if board.is_valid_location(column) {
            locations.push(column);
        }
    }
    locations
}
