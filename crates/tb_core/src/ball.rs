//! Possession marker
//!
//! The free-play variant carries an independently draggable ball. The
//! marker sticks to whichever token's cell it occupies: when that token
//! moves, the ball moves with it. Placement is asymmetric on purpose:
//! dropping onto a token snaps the ball to that token's cell center, while
//! dropping onto an empty cell keeps the exact pointer position for
//! fine-grained ball spotting.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardEvent};
use crate::grid::{enforce_boundaries, CellId, GridSpec, NormPos};

/// Independently placeable ball marker with a sub-cell position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BallMarker {
    pub cell: CellId,
    /// Normalized render position; cell-center unless the ball was spotted
    /// on an empty cell.
    pub pos: NormPos,
}

impl BallMarker {
    /// Ball at the center of the board.
    pub fn at_center(grid: GridSpec) -> Self {
        let cell = grid.cell_at(grid.rows / 2, grid.cols / 2);
        Self { cell, pos: grid.cell_center(cell) }
    }

    /// Drop the ball at a pointer position.
    ///
    /// On a cell occupied by a token the ball snaps to that cell's center;
    /// on an empty cell it rests at the (clamped) raw drop coordinate.
    pub fn place(&mut self, grid: GridSpec, board: &Board, pos: NormPos) {
        let cell = grid.cell_at_norm(pos);
        self.cell = cell;
        self.pos = if board.occupant(cell).is_some() {
            grid.cell_center(cell)
        } else {
            enforce_boundaries(pos)
        };
    }

    /// React to a board change: if a token leaves the ball's cell, the ball
    /// follows it to the new cell's center.
    pub fn observe(&mut self, grid: GridSpec, event: &BoardEvent) {
        if let BoardEvent::TokenMoved { from, to, .. } = event {
            if *from == self.cell {
                self.cell = *to;
                self.pos = grid.cell_center(*to);
            }
        }
    }
}
