use crate::error::SizeError;

/// Widest board the fixed-capacity grid can hold.
pub const MAX_WIDTH: usize = 16;
/// Tallest board the fixed-capacity grid can hold.
pub const MAX_HEIGHT: usize = 16;
/// Run length that wins the game.
pub const WIN_LENGTH: usize = 4;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    A,
    B,
}

impl Cell {
    /// Symbol used in the textual board dump.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '+',
            Cell::A => 'X',
            Cell::B => 'O',
        }
    }
}

/// Cell occupancy and column fill levels.
///
/// Storage is a fixed `MAX_HEIGHT x MAX_WIDTH` array so the whole grid is
/// `Copy`; only the `width x height` sub-rectangle is ever written. Row 0 is
/// the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: [[Cell; MAX_WIDTH]; MAX_HEIGHT],
    heights: [u8; MAX_WIDTH],
}

impl Grid {
    /// Create an empty grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> Result<Self, SizeError> {
        if width == 0 || height == 0 || width > MAX_WIDTH || height > MAX_HEIGHT {
            return Err(SizeError { width, height });
        }
        Ok(Grid {
            width,
            height,
            cells: [[Cell::Empty; MAX_WIDTH]; MAX_HEIGHT],
            heights: [0; MAX_WIDTH],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at `(col, row)`, row 0 being the bottom. Squares outside
    /// the active area read as `Empty`.
    ///
    /// # Panics
    ///
    /// If `col >= MAX_WIDTH` or `row >= MAX_HEIGHT`.
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[row][col]
    }

    /// Number of pieces already in `col`; 0 for columns outside the active
    /// area.
    ///
    /// # Panics
    ///
    /// If `col >= MAX_WIDTH`.
    pub fn column_height(&self, col: usize) -> usize {
        self.heights[col] as usize
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        col >= self.width || self.column_height(col) >= self.height
    }

    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Drop a piece into a column the caller has already checked is open.
    /// Returns the row where it landed.
    pub(crate) fn place(&mut self, col: usize, cell: Cell) -> usize {
        let row = self.column_height(col);
        self.cells[row][col] = cell;
        self.heights[col] += 1;
        row
    }

    /// Length of the contiguous `cell` run through `(col, row)` along the
    /// axis `(dc, dr)`, counting the square at `(col, row)` itself whatever
    /// it currently holds. Each side is capped at `WIN_LENGTH - 1` steps.
    pub fn count_line(&self, col: usize, row: usize, cell: Cell, (dc, dr): (isize, isize)) -> usize {
        let mut count = 1;
        for sign in [1isize, -1] {
            for step in 1..WIN_LENGTH as isize {
                let c = col as isize + sign * step * dc;
                let r = row as isize + sign * step * dr;
                if c < 0 || r < 0 || c >= self.width as isize || r >= self.height as isize {
                    break;
                }
                if self.cells[r as usize][c as usize] != cell {
                    break;
                }
                count += 1;
            }
        }
        count
    }

    /// Full-board scan for any run of `WIN_LENGTH` pieces of `cell`.
    pub fn has_line(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }
        let directions: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];
        for row in 0..self.height {
            for col in 0..self.width {
                for &(dc, dr) in &directions {
                    let run = (0..WIN_LENGTH as isize).all(|i| {
                        let c = col as isize + i * dc;
                        let r = row as isize + i * dr;
                        c >= 0
                            && r >= 0
                            && c < self.width as isize
                            && r < self.height as isize
                            && self.cells[r as usize][c as usize] == cell
                    });
                    if run {
                        return true;
                    }
                }
            }
        }
        false
    }
}
