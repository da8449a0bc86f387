use std::fmt;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Matching neighbours that, together with the scanned cell, make four in a row.
pub const LINE_NEIGHBOURS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => '1',
            Cell::PlayerTwo => '2',
        }
    }
}

/// Orientation of a line of four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    DiagonalUp,
    Horizontal,
    DiagonalDown,
    Vertical,
}

impl Direction {
    /// Scan order. When a placement completes several lines, the first one
    /// in this order is the one reported.
    pub const ALL: [Direction; 4] = [
        Direction::DiagonalUp,
        Direction::Horizontal,
        Direction::DiagonalDown,
        Direction::Vertical,
    ];

    /// (Δrow, Δcol) of the scanned direction, with row 0 at the bottom.
    pub fn vector(self) -> (isize, isize) {
        match self {
            Direction::DiagonalUp => (1, 1),
            Direction::Horizontal => (0, 1),
            Direction::DiagonalDown => (1, -1),
            Direction::Vertical => (-1, 0),
        }
    }

    /// Whether the line is also scanned against [`vector`](Self::vector).
    ///
    /// Vertical lines are only scanned downwards: pieces are dropped, so
    /// nothing can sit above the slot being scanned.
    pub fn is_two_sided(self) -> bool {
        self != Direction::Vertical
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::DiagonalUp => "Diagonal Up",
            Direction::Horizontal => "Horizontal",
            Direction::DiagonalDown => "Diagonal Down",
            Direction::Vertical => "Vertical",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dense row-major grid of cells. Row 0 is the bottom row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty 6x7 grid
    pub fn new() -> Self {
        Self::with_dimensions(ROWS, COLS)
    }

    /// Create an empty grid of the given size.
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be non-zero");
        Grid {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Build a grid from token rows (0 empty, 1 player one, 2 player two),
    /// bottom row first.
    ///
    /// # Panics
    /// If the rows are empty, ragged, or contain another token value.
    #[cfg(test)]
    pub(crate) fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut grid = Self::with_dimensions(rows.len(), cols);
        for (row, tokens) in rows.iter().enumerate() {
            let tokens = tokens.as_ref();
            assert_eq!(tokens.len(), cols, "row {row} has {} cells, expected {cols}", tokens.len());
            for (col, &token) in tokens.iter().enumerate() {
                let cell = match token {
                    0 => Cell::Empty,
                    1 => Cell::PlayerOne,
                    2 => Cell::PlayerTwo,
                    other => panic!("invalid token {other} at ({row}, {col})"),
                };
                grid.set(row, col, cell);
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(self.get(row as usize, col as usize))
    }

    /// Count consecutive `cell`s starting one step away from `(row, col)`
    /// along `vector`, continuing from `count`.
    ///
    /// Stops at the edge, at any other cell value, or once the running count
    /// reaches [`LINE_NEIGHBOURS`].
    pub fn count_in_direction(
        &self,
        row: usize,
        col: usize,
        cell: Cell,
        vector: (isize, isize),
        mut count: usize,
    ) -> usize {
        let (dr, dc) = vector;
        let (mut r, mut c) = (row as isize, col as isize);
        while count < LINE_NEIGHBOURS {
            r += dr;
            c += dc;
            match self.cell_at(r, c) {
                Some(found) if found == cell => count += 1,
                _ => break,
            }
        }
        count
    }

    /// Neighbours of `(row, col)` holding `cell` along `direction`, capped at
    /// [`LINE_NEIGHBOURS`]. The cell at `(row, col)` itself is not inspected.
    pub fn count_along(&self, row: usize, col: usize, cell: Cell, direction: Direction) -> usize {
        let (dr, dc) = direction.vector();
        let count = self.count_in_direction(row, col, cell, (dr, dc), 0);
        if direction.is_two_sided() {
            self.count_in_direction(row, col, cell, (-dr, -dc), count)
        } else {
            count
        }
    }

    /// The first direction (in [`Direction::ALL`] order) along which a
    /// `cell` at `(row, col)` makes four in a row.
    pub fn winning_direction(&self, row: usize, col: usize, cell: Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.count_along(row, col, cell, direction) == LINE_NEIGHBOURS)
    }

    /// Longest line of `cell`s that a piece dropped at `(row, col)` would
    /// join, capped at [`LINE_NEIGHBOURS`]. A result of 3 means the slot
    /// completes four in a row.
    pub fn slot_count(&self, row: usize, col: usize, cell: Cell) -> usize {
        let mut best = 0;
        for direction in Direction::ALL {
            best = best.max(self.count_along(row, col, cell, direction));
            if best == LINE_NEIGHBOURS {
                break;
            }
        }
        best
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    /// Top row first, one character per cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            for col in 0..self.cols {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.get(row, col).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
