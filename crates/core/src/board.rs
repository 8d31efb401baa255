//! Board module - manages the placement grid
//!
//! The board is an 8x8 grid where each cell is empty or holds the gem of the
//! piece that covers it. Uses a flat array for cache locality and zero
//! allocation.
//! Coordinates: (row, col), row 0 at the top, col 0 at the left.
//!
//! Probing (`can_place`, `has_any_valid_placement`) never mutates, so callers
//! may run it on every pointer move. Only `place` and `clear_completed_lines`
//! write.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, Gem, GRID_CELLS, GRID_SIZE};

const SIZE: usize = GRID_SIZE as usize;

/// Rows and columns removed by one `clear_completed_lines` call.
///
/// Both sets are computed from the grid as it stood before clearing, so a
/// cell at the crossing of a full row and a full column is cleared once but
/// both lines count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearResult {
    pub rows: ArrayVec<u8, SIZE>,
    pub cols: ArrayVec<u8, SIZE>,
}

impl ClearResult {
    /// Number of lines cleared (rows + columns)
    pub fn lines(&self) -> u32 {
        (self.rows.len() + self.cols.len()) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }

    /// Whether the cell was part of a cleared row or column
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.rows.iter().any(|&r| r as usize == row) || self.cols.iter().any(|&c| c as usize == col)
    }
}

/// The placement grid - 8 x 8 cells in flat row-major storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [Cell; GRID_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    /// Flat index for (row, col), or `None` when outside the grid
    #[inline(always)]
    fn index(row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= SIZE as i32 || col >= SIZE as i32 {
            return None;
        }
        Some(row as usize * SIZE + col as usize)
    }

    /// Side length of the grid
    pub fn size(&self) -> u8 {
        GRID_SIZE
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// In bounds and filled
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Whether `shape` anchored with its bounding box top-left at
    /// (row, col) lands entirely on free in-bounds cells.
    pub fn can_place(&self, shape: &Shape, row: i32, col: i32) -> bool {
        shape
            .cells()
            .all(|(dr, dc)| self.is_free(row + dr as i32, col + dc as i32))
    }

    /// Commit `shape` onto the grid with the given gem.
    ///
    /// The caller must have checked [`Board::can_place`]. A placement that
    /// does not fit trips a debug assertion; in release builds it is ignored
    /// and `false` is returned with the grid untouched.
    pub fn place(&mut self, shape: &Shape, gem: Gem, row: i32, col: i32) -> bool {
        let fits = self.can_place(shape, row, col);
        debug_assert!(
            fits,
            "place({}) at ({row}, {col}) without a passing can_place",
            shape.id()
        );
        if !fits {
            return false;
        }

        for (dr, dc) in shape.cells() {
            self.set(row + dr as i32, col + dc as i32, Some(gem));
        }
        true
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= SIZE {
            return false;
        }
        let start = row * SIZE;
        self.cells[start..start + SIZE].iter().all(|c| c.is_some())
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= SIZE {
            return false;
        }
        (0..SIZE).all(|row| self.cells[row * SIZE + col].is_some())
    }

    /// Find every full row and column, then empty them.
    ///
    /// Detection runs on the pre-clear grid for both axes; clearing happens
    /// afterwards in one pass. Returns the index sets in ascending order.
    pub fn clear_completed_lines(&mut self) -> ClearResult {
        let mut result = ClearResult::default();

        for row in 0..SIZE {
            if self.is_row_full(row) {
                result.rows.push(row as u8);
            }
        }
        for col in 0..SIZE {
            if self.is_col_full(col) {
                result.cols.push(col as u8);
            }
        }

        for &row in &result.rows {
            let start = row as usize * SIZE;
            self.cells[start..start + SIZE].fill(None);
        }
        for &col in &result.cols {
            for row in 0..SIZE {
                self.cells[row * SIZE + col as usize] = None;
            }
        }

        result
    }

    /// Whether any anchor on the grid accepts `shape`.
    ///
    /// Exhaustive scan over all N x N anchors; the grid is small.
    pub fn has_any_valid_placement(&self, shape: &Shape) -> bool {
        self.first_valid_placement(shape).is_some()
    }

    /// First anchor (row-major) that accepts `shape`
    pub fn first_valid_placement(&self, shape: &Shape) -> Option<(i32, i32)> {
        (0..SIZE as i32)
            .flat_map(|row| (0..SIZE as i32).map(move |col| (row, col)))
            .find(|&(row, col)| self.can_place(shape, row, col))
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Write the grid as `u8` codes: 0 = empty, gem index + 1 otherwise
    pub fn write_u8_grid(&self, out: &mut [[u8; SIZE]; SIZE]) {
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, out_cell) in out_row.iter_mut().enumerate() {
                *out_cell = self.cells[row * SIZE + col].map_or(0, |gem| gem.index() + 1);
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from rows of text: `.` is empty, anything else is filled
    /// with `gem`. Missing rows or columns stay empty.
    pub fn from_ascii(rows: &[&str], gem: Gem) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate().take(SIZE) {
            for (col, ch) in line.chars().enumerate().take(SIZE) {
                if ch != '.' {
                    board.cells[row * SIZE + col] = Some(gem);
                }
            }
        }
        board
    }

    /// Render as rows of text, `#` filled and `.` empty
    pub fn to_ascii(&self) -> Vec<String> {
        self.cells
            .chunks(SIZE)
            .map(|row| row.iter().map(|c| if c.is_some() { '#' } else { '.' }).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::shape_by_id;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 7), Some(7));
        assert_eq!(Board::index(1, 0), Some(8));
        assert_eq!(Board::index(7, 7), Some(63));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(0, 8), None);
        assert_eq!(Board::index(8, 0), None);
    }

    #[test]
    fn test_place_writes_gem() {
        let mut board = Board::new();
        let square = shape_by_id("square").unwrap();

        assert!(board.place(square, Gem::Ruby, 2, 3));
        assert_eq!(board.get(2, 3), Some(Some(Gem::Ruby)));
        assert_eq!(board.get(3, 4), Some(Some(Gem::Ruby)));
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_can_place_skips_empty_pattern_cells() {
        let mut board = Board::new();
        // Occupy the hole in the S pattern's bounding box.
        board.set(0, 0, Some(Gem::Gold));
        let s = shape_by_id("s").unwrap();
        assert!(board.can_place(s, 0, 0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "without a passing can_place")]
    fn test_place_without_fit_asserts_in_debug() {
        let mut board = Board::new();
        let h3 = shape_by_id("horizontal3").unwrap();
        board.place(h3, Gem::Ruby, 0, 6);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_place_without_fit_is_noop_in_release() {
        let mut board = Board::new();
        let h3 = shape_by_id("horizontal3").unwrap();
        assert!(!board.place(h3, Gem::Ruby, 0, 6));
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_clear_row_and_col_intersection() {
        let mut board = Board::new();
        for i in 0..8 {
            board.set(3, i, Some(Gem::Topaz));
            board.set(i, 5, Some(Gem::Topaz));
        }
        board.set(0, 0, Some(Gem::Emerald));

        let result = board.clear_completed_lines();
        assert_eq!(result.rows.as_slice(), &[3]);
        assert_eq!(result.cols.as_slice(), &[5]);
        assert_eq!(result.lines(), 2);
        assert!(result.covers(3, 5));
        assert!(!result.covers(0, 0));
        assert_eq!(board.occupied_count(), 1);
        assert_eq!(board.get(0, 0), Some(Some(Gem::Emerald)));
    }

    #[test]
    fn test_ascii_roundtrip() {
        let rows = [
            "#.......", "........", "........", "........", "........", "........",
            "........", ".......#",
        ];
        let board = Board::from_ascii(&rows, Gem::Diamond);
        assert_eq!(board.to_ascii(), rows.to_vec());
    }

    #[test]
    fn test_write_u8_grid_codes() {
        let mut board = Board::new();
        board.set(1, 2, Some(Gem::Emerald));
        board.set(7, 7, Some(Gem::Peridot));

        let mut out = [[0u8; 8]; 8];
        board.write_u8_grid(&mut out);
        assert_eq!(out[1][2], 1);
        assert_eq!(out[7][7], 9);
        assert_eq!(out[0][0], 0);
    }
}
