//! Board — the unit of simulation state.
//!
//! Cells live in a single flat row-major buffer indexed `row * columns + col`.
//! `rows` and `columns` are fixed for the lifetime of a board; the cell
//! buffer is the only thing the kernel ever replaces.
//!
//! Construction validates shape (rectangular, non-empty). A `Board` value
//! that exists is well-formed — the transition and driver layers do not
//! re-validate.

use std::fmt;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// All possible board construction failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Zero rows or zero columns.
    EmptyDimensions,
    /// Declared row count does not match the provided grid.
    RowCountMismatch { expected: usize, found: usize },
    /// A row's length does not match the declared column count.
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::EmptyDimensions => {
                write!(f, "rows and columns must both be at least 1")
            }
            BoardError::RowCountMismatch { expected, found } => {
                write!(f, "row count mismatch: expected {}, found {}", expected, found)
            }
            BoardError::ColumnCountMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "column count mismatch in row {}: expected {}, found {}",
                row, expected, found
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A two-state grid. `true` = alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) cells: Vec<bool>,
}

impl Board {
    /// Create an all-dead board of the given dimensions.
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        if rows == 0 || columns == 0 {
            return Err(BoardError::EmptyDimensions);
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        })
    }

    /// Build a board from nested rows, inferring dimensions from the input.
    pub fn from_rows(grid: &[Vec<bool>]) -> Result<Self, BoardError> {
        let rows = grid.len();
        let columns = grid.first().map_or(0, |row| row.len());
        Self::from_declared(rows, columns, grid)
    }

    /// Build a board from nested rows against declared dimensions.
    ///
    /// This is the transport-shape check: the declared counts must match
    /// the grid exactly, and every row must have the same length.
    pub fn from_declared(
        rows: usize,
        columns: usize,
        grid: &[Vec<bool>],
    ) -> Result<Self, BoardError> {
        if rows == 0 || columns == 0 {
            return Err(BoardError::EmptyDimensions);
        }
        if grid.len() != rows {
            return Err(BoardError::RowCountMismatch {
                expected: rows,
                found: grid.len(),
            });
        }
        for (index, row) in grid.iter().enumerate() {
            if row.len() != columns {
                return Err(BoardError::ColumnCountMismatch {
                    row: index,
                    expected: columns,
                    found: row.len(),
                });
            }
        }

        let mut cells = Vec::with_capacity(rows * columns);
        for row in grid {
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Internal constructor for already-flat buffers. Callers guarantee
    /// `cells.len() == rows * columns`.
    pub(crate) fn from_flat(rows: usize, columns: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows * columns);
        Self {
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Cell value at (row, col). Panics on out-of-range coordinates.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.rows && col < self.columns,
            "cell ({}, {}) out of range for {}x{} board",
            row,
            col,
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + col]
    }

    /// Set the cell at (row, col). Panics on out-of-range coordinates.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        assert!(
            row < self.rows && col < self.columns,
            "cell ({}, {}) out of range for {}x{} board",
            row,
            col,
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + col] = alive;
    }

    /// The flat row-major cell buffer.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of live cells.
    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

/// Renders the grid one row per line, `O` alive, `.` dead.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.columns {
                let glyph = if self.cells[row * self.columns + col] {
                    'O'
                } else {
                    '.'
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
