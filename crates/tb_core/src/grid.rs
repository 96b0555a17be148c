//! Grid coordinate system and cell index mapping
//!
//! Converts between normalized (0-1) pointer coordinates, discrete cell
//! indices and cell-center coordinates.
//!
//! ## Coordinate Systems
//!
//! **Normalized Coordinates** (used by pointer input and rendering):
//! - X: 0 = left edge, 1 = right edge of the board's bounding box
//! - Y: 0 = top edge, 1 = bottom edge
//!
//! **Cell Indices** (used in board state, diffs and wire payloads):
//! - 1-based, row-major: `row * cols + col + 1`
//! - Range `[1, cols * rows]`; the default 7x9 board has cells 1-63
//!
//! Out-of-range input is clamped, never rejected: dragging past the board
//! edge snaps to the nearest edge cell.

use serde::{Deserialize, Serialize};

/// Cell index, 1-based row-major.
pub type CellId = u16;

/// Position in normalized coordinates (0-1)
/// - .0 = x (left-right)
/// - .1 = y (top-bottom)
pub type NormPos = (f32, f32);

/// Board dimensions for the 4v4 format: 7 columns x 9 rows = 63 cells.
pub const GRID_4V4: GridSpec = GridSpec { cols: 7, rows: 9 };

/// Discrete board dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridSpec {
    pub cols: u8,
    pub rows: u8,
}

impl Default for GridSpec {
    fn default() -> Self {
        GRID_4V4
    }
}

impl GridSpec {
    /// Total number of cells on the board.
    #[inline]
    pub fn total(&self) -> u16 {
        self.cols as u16 * self.rows as u16
    }

    /// Check whether a cell index is on this board.
    #[inline]
    pub fn contains(&self, cell: CellId) -> bool {
        (1..=self.total()).contains(&cell)
    }

    /// Map a normalized position to the cell under it.
    ///
    /// Each axis is clamped into `[0, dim - 1]` via `floor(norm * dim)`, so
    /// positions outside the unit square land on the nearest edge cell.
    #[inline]
    pub fn cell_at_norm(&self, pos: NormPos) -> CellId {
        let col = ((pos.0 * self.cols as f32).floor() as i32).clamp(0, self.cols as i32 - 1);
        let row = ((pos.1 * self.rows as f32).floor() as i32).clamp(0, self.rows as i32 - 1);

        row as u16 * self.cols as u16 + col as u16 + 1
    }

    /// Cell index at a (row, col) pair. Both axes clamp to the board.
    #[inline]
    pub fn cell_at(&self, row: u8, col: u8) -> CellId {
        let row = row.min(self.rows - 1) as u16;
        let col = col.min(self.cols - 1) as u16;
        row * self.cols as u16 + col + 1
    }

    /// Decompose a cell index into its (row, col) pair.
    ///
    /// Off-board indices clamp to the nearest valid cell, keeping the
    /// mapping total like the rest of this module.
    #[inline]
    pub fn row_col(&self, cell: CellId) -> (u8, u8) {
        let idx = cell.saturating_sub(1).min(self.total() - 1);
        ((idx / self.cols as u16) as u8, (idx % self.cols as u16) as u8)
    }

    /// Continuous center point of a cell, in normalized coordinates.
    ///
    /// Inverse of [`cell_at_norm`](Self::cell_at_norm):
    /// `cell_at_norm(cell_center(c)) == c` for every valid cell.
    #[inline]
    pub fn cell_center(&self, cell: CellId) -> NormPos {
        let (row, col) = self.row_col(cell);
        (
            (col as f32 + 0.5) / self.cols as f32,
            (row as f32 + 0.5) / self.rows as f32,
        )
    }

    /// Manhattan distance between two cells, in cell steps.
    ///
    /// Used by the validator's per-token feedback ("2 squares from the
    /// ideal solution").
    #[inline]
    pub fn manhattan_distance(&self, a: CellId, b: CellId) -> u16 {
        let (ar, ac) = self.row_col(a);
        let (br, bc) = self.row_col(b);
        (ar as i16 - br as i16).unsigned_abs() + (ac as i16 - bc as i16).unsigned_abs()
    }
}

/// Clamp a normalized position into the unit square.
#[inline]
pub fn enforce_boundaries(pos: NormPos) -> NormPos {
    (pos.0.clamp(0.0, 1.0), pos.1.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_norm_center() {
        // Center of the default board: col 3, row 4 -> cell 32
        let cell = GRID_4V4.cell_at_norm((0.5, 0.5));
        assert_eq!(cell, 32);
    }

    #[test]
    fn test_cell_at_norm_top_row() {
        // (0.5, 0.05) on 7x9: col = floor(3.5) = 3, row = floor(0.45) = 0 -> cell 4
        let cell = GRID_4V4.cell_at_norm((0.5, 0.05));
        assert_eq!(cell, 4);
    }

    #[test]
    fn test_cell_at_norm_clamps_outside() {
        // Dragging past the edge snaps to the nearest edge cell
        assert_eq!(GRID_4V4.cell_at_norm((-0.3, -2.0)), 1);
        assert_eq!(GRID_4V4.cell_at_norm((1.7, 5.0)), 63);
        assert_eq!(GRID_4V4.cell_at_norm((1.2, 0.0)), 7);
    }

    #[test]
    fn test_cell_at_norm_exact_edges() {
        // norm 1.0 maps to dim, which clamps back onto the last cell
        assert_eq!(GRID_4V4.cell_at_norm((0.0, 0.0)), 1);
        assert_eq!(GRID_4V4.cell_at_norm((1.0, 1.0)), 63);
    }

    #[test]
    fn test_row_col_round_trip() {
        for cell in 1..=GRID_4V4.total() {
            let (row, col) = GRID_4V4.row_col(cell);
            assert_eq!(GRID_4V4.cell_at(row, col), cell);
        }
    }

    #[test]
    fn test_cell_center_round_trip() {
        // cell_at_norm(cell_center(c)) == c for every valid cell
        for cell in 1..=GRID_4V4.total() {
            let center = GRID_4V4.cell_center(cell);
            assert_eq!(GRID_4V4.cell_at_norm(center), cell, "round trip failed for cell {}", cell);
        }
    }

    #[test]
    fn test_cell_center_stability() {
        // centerOf(cellOf(centerOf(c))) == centerOf(c)
        for cell in 1..=GRID_4V4.total() {
            let center = GRID_4V4.cell_center(cell);
            let again = GRID_4V4.cell_center(GRID_4V4.cell_at_norm(center));
            assert_eq!(center, again);
        }
    }

    #[test]
    fn test_manhattan_distance() {
        // cell 11 = (row 1, col 3), cell 4 = (row 0, col 3)
        assert_eq!(GRID_4V4.manhattan_distance(11, 4), 1);
        // cell 1 = (0, 0), cell 63 = (8, 6)
        assert_eq!(GRID_4V4.manhattan_distance(1, 63), 14);
        assert_eq!(GRID_4V4.manhattan_distance(32, 32), 0);
        // symmetric
        assert_eq!(GRID_4V4.manhattan_distance(5, 40), GRID_4V4.manhattan_distance(40, 5));
    }

    #[test]
    fn test_contains() {
        assert!(GRID_4V4.contains(1));
        assert!(GRID_4V4.contains(63));
        assert!(!GRID_4V4.contains(0));
        assert!(!GRID_4V4.contains(64));
    }

    #[test]
    fn test_enforce_boundaries_idempotent() {
        let pos = (1.5, -0.2);
        let once = enforce_boundaries(pos);
        let twice = enforce_boundaries(once);
        assert_eq!(once, twice);
        assert_eq!(once, (1.0, 0.0));
    }

    #[test]
    fn test_non_default_grid() {
        let grid = GridSpec { cols: 5, rows: 5 };
        assert_eq!(grid.total(), 25);
        assert_eq!(grid.cell_at_norm((0.99, 0.99)), 25);
        assert_eq!(grid.cell_center(13), (0.5, 0.5));
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any input, however far off the board, maps to a
            /// valid cell index
            #[test]
            fn prop_cell_at_norm_in_range(
                x in -10.0f32..10.0f32,
                y in -10.0f32..10.0f32,
                cols in 1u8..16,
                rows in 1u8..16
            ) {
                let grid = GridSpec { cols, rows };
                let cell = grid.cell_at_norm((x, y));
                prop_assert!(grid.contains(cell));
            }

            /// Property: cell centers round-trip through the mapping pair
            #[test]
            fn prop_center_round_trip(
                cols in 1u8..16,
                rows in 1u8..16,
                seed in 0u16..4096
            ) {
                let grid = GridSpec { cols, rows };
                let cell = (seed % grid.total()) + 1;
                prop_assert_eq!(grid.cell_at_norm(grid.cell_center(cell)), cell);
            }

            /// Property: clamping is idempotent
            #[test]
            fn prop_enforce_boundaries_idempotent(
                x in -10.0f32..10.0f32,
                y in -10.0f32..10.0f32
            ) {
                let once = enforce_boundaries((x, y));
                let twice = enforce_boundaries(once);
                prop_assert_eq!(once, twice);
            }
        }
    }
}
