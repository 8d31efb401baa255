//! Pieces module - shape catalog and piece instances
//!
//! Shapes are immutable row-major bitmask matrices with a tight bounding box:
//! no leading or trailing all-zero row or column. Placement math relies on
//! this, since the anchor is the top-left corner of that box.
//!
//! Pieces never rotate. The catalog carries each useful orientation as its
//! own shape instead.

use crate::rng::RandomSource;
use crate::types::{Gem, PieceId};

/// An immutable polyomino pattern
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    id: &'static str,
    name: &'static str,
    /// 1 = filled, 0 = empty; every row has the same length
    pattern: &'static [&'static [u8]],
}

impl Shape {
    pub const fn new(id: &'static str, name: &'static str, pattern: &'static [&'static [u8]]) -> Self {
        Self { id, name, pattern }
    }

    /// Stable identifier (e.g. `"l_small_inv"`)
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Human-readable name (e.g. `"L Small Inv"`)
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rows(&self) -> usize {
        self.pattern.len()
    }

    pub fn cols(&self) -> usize {
        self.pattern.first().map_or(0, |row| row.len())
    }

    /// Whether the bounding-box cell (row, col) is filled
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.pattern
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|&bit| bit != 0)
    }

    /// Filled cells as (row, col) offsets from the anchor, row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pattern.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &bit)| bit != 0)
                .map(move |(c, _)| (r, c))
        })
    }

    /// Number of filled cells
    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// Every row equally long and no empty border row or column
    pub fn is_tight(&self) -> bool {
        let cols = self.cols();
        if self.rows() == 0 || cols == 0 || self.pattern.iter().any(|row| row.len() != cols) {
            return false;
        }
        let row_filled = |r: usize| (0..cols).any(|c| self.is_filled(r, c));
        let col_filled = |c: usize| (0..self.rows()).any(|r| self.is_filled(r, c));
        row_filled(0) && row_filled(self.rows() - 1) && col_filled(0) && col_filled(cols - 1)
    }
}

/// The fixed shape catalog, one entry per placeable orientation
pub static SHAPES: [Shape; 15] = [
    Shape::new("single", "1x1", &[&[1]]),
    Shape::new("horizontal2", "1x2", &[&[1, 1]]),
    Shape::new("vertical2", "2x1", &[&[1], &[1]]),
    Shape::new("horizontal3", "1x3", &[&[1, 1, 1]]),
    Shape::new("vertical3", "3x1", &[&[1], &[1], &[1]]),
    Shape::new("square", "Square", &[&[1, 1], &[1, 1]]),
    Shape::new("z", "Z", &[&[1, 1, 0], &[0, 1, 1]]),
    Shape::new("s", "S", &[&[0, 1, 1], &[1, 1, 0]]),
    Shape::new("l_small", "L Small", &[&[1, 0], &[1, 1]]),
    Shape::new("l_small_inv", "L Small Inv", &[&[0, 1], &[1, 1]]),
    Shape::new("t", "T", &[&[1, 1, 1], &[0, 1, 0]]),
    Shape::new("l_large", "L Large", &[&[1, 1, 1], &[1, 0, 0]]),
    Shape::new("l_large_inv", "L Large Inv", &[&[1, 1, 1], &[0, 0, 1]]),
    Shape::new("t_side", "T Side", &[&[1, 0, 0], &[1, 1, 1]]),
    Shape::new("l_vertical", "L Vertical", &[&[1, 1], &[1, 0], &[1, 0]]),
];

/// Look up a catalog shape by id
pub fn shape_by_id(id: &str) -> Option<&'static Shape> {
    SHAPES.iter().find(|s| s.id == id)
}

/// Draw a shape uniformly from the catalog
pub fn random_shape<R: RandomSource + ?Sized>(rng: &mut R) -> &'static Shape {
    &SHAPES[rng.next_range(SHAPES.len() as u32) as usize]
}

/// Draw a gem uniformly from the palette
pub fn random_gem<R: RandomSource + ?Sized>(rng: &mut R) -> Gem {
    Gem::ALL[rng.next_range(Gem::ALL.len() as u32) as usize]
}

/// A piece instance: a catalog shape, a gem and a session-unique id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    shape: &'static Shape,
    gem: Gem,
}

impl Piece {
    pub fn new(id: PieceId, shape: &'static Shape, gem: Gem) -> Self {
        Self { id, shape, gem }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    pub fn gem(&self) -> Gem {
        self.gem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_SHAPE_SIDE;

    #[test]
    fn test_catalog_shapes_are_tight() {
        for shape in &SHAPES {
            assert!(shape.is_tight(), "shape {} is not tight", shape.id());
            assert!(shape.rows() <= MAX_SHAPE_SIDE);
            assert!(shape.cols() <= MAX_SHAPE_SIDE);
        }
    }

    #[test]
    fn test_catalog_ids_unique() {
        for (i, a) in SHAPES.iter().enumerate() {
            for b in &SHAPES[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn test_cells_row_major() {
        let t = shape_by_id("t").unwrap();
        let cells: Vec<_> = t.cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 1)]);
        assert_eq!(t.cell_count(), 4);
    }

    #[test]
    fn test_is_filled_out_of_box() {
        let single = shape_by_id("single").unwrap();
        assert!(single.is_filled(0, 0));
        assert!(!single.is_filled(0, 1));
        assert!(!single.is_filled(1, 0));
    }

    #[test]
    fn test_loose_shape_detected() {
        const LOOSE: Shape = Shape::new("loose", "Loose", &[&[0, 0], &[1, 1]]);
        const RAGGED: Shape = Shape::new("ragged", "Ragged", &[&[1, 1], &[1]]);
        assert!(!LOOSE.is_tight());
        assert!(!RAGGED.is_tight());
    }

    #[test]
    fn test_piece_accessors() {
        let shape = shape_by_id("square").unwrap();
        let piece = Piece::new(7, shape, Gem::Gold);
        assert_eq!(piece.id(), 7);
        assert_eq!(piece.shape().name(), "Square");
        assert_eq!(piece.gem(), Gem::Gold);
    }
}
