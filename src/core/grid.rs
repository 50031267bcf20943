//! Grid solver: picks a (columns, rows) tiling for a given image count.
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A (columns, rows) tiling for a collage.
///
/// For a non-zero count exactly one shape is produced and
/// `cols * rows >= count` always holds.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GridShape {
    pub cols: u32,
    pub rows: u32,
}

impl GridShape {
    /// Compute the grid shape for `count` images.
    ///
    /// Starting from `cols = ceil(sqrt(count))` and `rows = count / cols`,
    /// the search walks divisor pairs near the square root: a product above
    /// `count` drops a row, a product below it adds a column. The first pair
    /// with `cols * rows == count` wins. Counts with no factor pair at or
    /// above the initial estimate (primes, mostly) fall back to a single
    /// column `(1, count)`.
    pub fn solve(count: u32) -> GridShape {
        if count == 0 {
            return GridShape { cols: 0, rows: 0 };
        }

        let mut cols = (count as f64).sqrt().ceil() as u32;
        let mut rows = count / cols;

        while cols < count {
            match (cols * rows).cmp(&count) {
                Ordering::Equal => return GridShape { cols, rows },
                // product > count implies rows >= 1, the decrement cannot wrap
                Ordering::Greater => rows -= 1,
                Ordering::Less => cols += 1,
            }
        }

        GridShape { cols: 1, rows: count }
    }

    /// Total number of cells in the grid.
    pub fn capacity(&self) -> u32 {
        self.cols * self.rows
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_needs_no_canvas() {
        assert_eq!(GridShape::solve(0), GridShape { cols: 0, rows: 0 });
    }

    #[test]
    fn single_image_is_a_single_cell() {
        assert_eq!(GridShape::solve(1), GridShape { cols: 1, rows: 1 });
    }

    #[test]
    fn perfect_squares_tile_square() {
        assert_eq!(GridShape::solve(4), GridShape { cols: 2, rows: 2 });
        assert_eq!(GridShape::solve(9), GridShape { cols: 3, rows: 3 });
        assert_eq!(GridShape::solve(16), GridShape { cols: 4, rows: 4 });
    }

    #[test]
    fn near_square_factorizations() {
        assert_eq!(GridShape::solve(6), GridShape { cols: 3, rows: 2 });
        assert_eq!(GridShape::solve(8), GridShape { cols: 4, rows: 2 });
        assert_eq!(GridShape::solve(12), GridShape { cols: 4, rows: 3 });
        assert_eq!(GridShape::solve(20), GridShape { cols: 5, rows: 4 });
    }

    #[test]
    fn primes_fall_back_to_a_single_column() {
        for n in [2u32, 3, 5, 7, 13, 23, 97] {
            assert_eq!(GridShape::solve(n), GridShape { cols: 1, rows: n }, "n={n}");
        }
    }

    #[test]
    fn capacity_always_covers_the_count() {
        for n in 0..=500u32 {
            let shape = GridShape::solve(n);
            assert!(shape.capacity() >= n, "n={n} shape={shape}");
            if n > 0 {
                assert!(shape.cols > 0 && shape.rows > 0, "n={n} shape={shape}");
            }
        }
    }

    #[test]
    fn exact_counts_leave_no_empty_cells() {
        // Any count with a factor pair at or above ceil(sqrt(n)) tiles exactly.
        for n in [1u32, 4, 6, 8, 9, 10, 12, 15, 16, 18, 20, 24, 30, 36] {
            let shape = GridShape::solve(n);
            assert_eq!(shape.capacity(), n, "n={n} shape={shape}");
        }
    }
}
