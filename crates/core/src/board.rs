//! Board module - the N x N tile grid and its transitions
//!
//! Cells hold tile values (`0` = empty). Coordinates are `(row, col)` with
//! row 0 at the top and col 0 at the left. The grid is stored row-major in a
//! fixed-size array, so boards are `Copy` and every operation is allocation-free.

use std::fmt;

use arrayvec::ArrayVec;
use rand::Rng;

use crate::line::transform;
use crate::types::{
    Axis, Direction, Tile, BOARD_SIZE, FOUR_PROBABILITY, INITIAL_TILES, SPAWN_HIGH, SPAWN_LOW,
};

/// The game board - N x N cells, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const N: usize = BOARD_SIZE> {
    cells: [[Tile; N]; N],
}

/// Outcome of sliding a board in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult<const N: usize = BOARD_SIZE> {
    pub board: Board<N>,
    /// True iff at least one line differs from its original content
    pub changed: bool,
    /// Sum of merged tile values produced by this move
    pub score: u32,
}

/// A tile placed by [`Board::spawn_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

impl<const N: usize> Board<N> {
    /// Create a new empty board
    pub fn new() -> Self {
        Self { cells: [[0; N]; N] }
    }

    /// Build a board from explicit rows (top to bottom)
    pub fn from_rows(rows: [[Tile; N]; N]) -> Self {
        Self { cells: rows }
    }

    /// Empty board seeded with the initial tiles
    pub fn initialize<R: Rng>(rng: &mut R) -> Self {
        let mut board = Self::new();
        for _ in 0..INITIAL_TILES {
            board.spawn_tile(rng);
        }
        board
    }

    /// Edge length of the board
    pub fn size(&self) -> usize {
        N
    }

    /// Rows, top to bottom
    pub fn rows(&self) -> &[[Tile; N]; N] {
        &self.cells
    }

    /// Get cell at (row, col), `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set cell at (row, col). Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// Copy of row `i`, left to right
    pub fn row(&self, i: usize) -> [Tile; N] {
        self.cells[i]
    }

    /// Copy of column `j`, top to bottom
    pub fn column(&self, j: usize) -> [Tile; N] {
        std::array::from_fn(|i| self.cells[i][j])
    }

    fn set_column(&mut self, j: usize, column: [Tile; N]) {
        for (i, tile) in column.into_iter().enumerate() {
            self.cells[i][j] = tile;
        }
    }

    /// Slide every line in `direction` and report the result.
    ///
    /// Does not spawn a tile and does not touch `self`; an unchanged move
    /// returns an identical board with zero score.
    pub fn apply_move(&self, direction: Direction) -> MoveResult<N> {
        let toward_start = direction.toward_start();
        let mut next = *self;
        let mut changed = false;
        let mut score = 0u32;

        for k in 0..N {
            let line = match direction.axis() {
                Axis::Row => self.row(k),
                Axis::Column => self.column(k),
            };
            let out = transform(line, toward_start);
            if out.line != line {
                changed = true;
                match direction.axis() {
                    Axis::Row => next.cells[k] = out.line,
                    Axis::Column => next.set_column(k, out.line),
                }
            }
            score += out.score;
        }

        MoveResult {
            board: next,
            changed,
            score,
        }
    }

    /// Place a 2 (or, with probability [`FOUR_PROBABILITY`], a 4) on a
    /// uniformly chosen empty cell.
    ///
    /// Returns `None` and leaves the board untouched when it is full.
    pub fn spawn_tile<R: Rng>(&mut self, rng: &mut R) -> Option<Spawn> {
        let empty = self.empty_count();
        if empty == 0 {
            return None;
        }

        let pick = rng.random_range(0..empty);
        let (row, col) = self.empty_cells().nth(pick)?;
        let value = if rng.random_bool(FOUR_PROBABILITY) {
            SPAWN_HIGH
        } else {
            SPAWN_LOW
        };
        self.cells[row][col] = value;
        Some(Spawn { row, col, value })
    }

    /// True when no empty cell and no equal horizontal/vertical neighbours exist
    pub fn is_game_over(&self) -> bool {
        for i in 0..N {
            for j in 0..N {
                let tile = self.cells[i][j];
                if tile == 0 {
                    return false;
                }
                if j + 1 < N && tile == self.cells[i][j + 1] {
                    return false;
                }
                if i + 1 < N && tile == self.cells[i + 1][j] {
                    return false;
                }
            }
        }
        true
    }

    /// Coordinates of empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, tile)| **tile == 0)
                .map(move |(j, _)| (i, j))
        })
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&t| t == 0).count()
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&t| t as u64).sum()
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Whether sliding in `direction` would change the board
    pub fn can_move(&self, direction: Direction) -> bool {
        self.apply_move(direction).changed
    }

    /// Directions that would change the board
    pub fn available_moves(&self) -> ArrayVec<Direction, 4> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.can_move(dir))
            .collect()
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, tile) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if *tile == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{tile:>5}")?;
                }
            }
        }
        Ok(())
    }
}
