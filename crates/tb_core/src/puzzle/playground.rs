//! Free-play board
//!
//! No puzzle, no baseline: the default layout plus an independently
//! draggable ball marker. Token moves drag the colocated ball along.

use crate::ball::BallMarker;
use crate::board::{Board, MoveOutcome};
use crate::drag::{DragController, PressOutcome};
use crate::error::Result;
use crate::grid::{GridSpec, NormPos};
use crate::models::puzzle::default_4v4_tokens;

/// Free-play session: tokens plus the loose ball.
pub struct Playground {
    board: Board,
    drag: DragController,
    ball: BallMarker,
}

impl Playground {
    pub fn new(grid: GridSpec) -> Result<Self> {
        let board = Board::new(grid, default_4v4_tokens())?;
        let ball = BallMarker::at_center(grid);
        Ok(Self { board, drag: DragController::new(), ball })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ball(&self) -> BallMarker {
        self.ball
    }

    pub fn press(&mut self, id: &str) -> PressOutcome {
        self.drag.press(&self.board, id, |_| true)
    }

    /// Move the dragged token; the ball follows a token leaving its cell.
    pub fn drag_to(&mut self, pos: NormPos) -> Option<MoveOutcome> {
        let outcome = self.drag.drag_to(&mut self.board, pos);
        let grid = self.board.grid();
        for event in self.board.take_events() {
            self.ball.observe(grid, &event);
        }
        outcome
    }

    pub fn release(&mut self) -> Option<String> {
        self.drag.release()
    }

    /// Drop the ball at a pointer position (snap-to-token on occupied
    /// cells, exact spot on empty ones).
    pub fn place_ball(&mut self, pos: NormPos) {
        self.ball.place(self.board.grid(), &self.board, pos);
    }

    /// Back to kickoff: default layout, ball at the center.
    pub fn reset(&mut self) -> Result<()> {
        let grid = self.board.grid();
        self.board = Board::new(grid, default_4v4_tokens())?;
        self.ball = BallMarker::at_center(grid);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GRID_4V4;

    #[test]
    fn test_ball_follows_dragged_token() {
        let mut play = Playground::new(GRID_4V4).unwrap();
        // Put the ball on A1's cell
        play.place_ball(GRID_4V4.cell_center(11));
        assert_eq!(play.ball().cell, 11);

        play.press("A1");
        play.drag_to(GRID_4V4.cell_center(4));
        play.release();

        assert_eq!(play.ball().cell, 4);
        assert_eq!(play.ball().pos, GRID_4V4.cell_center(4));
    }

    #[test]
    fn test_ball_stays_when_other_tokens_move() {
        let mut play = Playground::new(GRID_4V4).unwrap();
        assert_eq!(play.ball().cell, 32);

        play.press("B2");
        play.drag_to(GRID_4V4.cell_center(45));
        play.release();

        assert_eq!(play.ball().cell, 32);
    }

    #[test]
    fn test_ball_tracks_through_a_whole_drag() {
        let mut play = Playground::new(GRID_4V4).unwrap();
        play.place_ball(GRID_4V4.cell_center(11));

        play.press("A1");
        // The ball follows every accepted step of the drag
        play.drag_to(GRID_4V4.cell_center(12));
        assert_eq!(play.ball().cell, 12);
        play.drag_to(GRID_4V4.cell_center(13));
        play.release();

        assert_eq!(play.ball().cell, 13);
    }

    #[test]
    fn test_reset_restores_kickoff() {
        let mut play = Playground::new(GRID_4V4).unwrap();
        play.press("A1");
        play.drag_to(GRID_4V4.cell_center(4));
        play.release();
        play.place_ball((0.9, 0.9));

        play.reset().unwrap();
        assert_eq!(play.board().token("A1").unwrap().cell, 11);
        assert_eq!(play.ball().cell, 32);
    }
}
