//! Puzzle authoring flow
//!
//! Two-step state machine: place the starting layout (with lock and role
//! toggles), freeze it as the baseline, then place the solution on top.
//! The solution is stored as a diff against the baseline.

use log::debug;

use crate::board::{Board, BoardEvent, MoveOutcome};
use crate::drag::{DragController, PressOutcome};
use crate::error::{BoardError, Result};
use crate::grid::{GridSpec, NormPos};
use crate::models::puzzle::{default_4v4_tokens, PuzzleDraft, PuzzleMeta, StartingPosition};
use crate::models::token::RoleIndicator;
use crate::solution::{diff, PlacedToken};

/// Which authoring step the editor is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorStep {
    /// Placing starting positions; locks and role indicators are editable.
    Starting,
    /// Placing solution positions on top of the frozen baseline.
    Solution,
}

/// Authoring session for one puzzle.
pub struct PuzzleEditor {
    board: Board,
    drag: DragController,
    step: EditorStep,
    baseline: Option<crate::board::Snapshot>,
}

impl PuzzleEditor {
    /// Start from the default 4v4 kickoff layout.
    ///
    /// Fails if the grid is too small to hold the default layout.
    pub fn new(grid: GridSpec) -> Result<Self> {
        let board = Board::new(grid, default_4v4_tokens())?;
        Ok(Self { board, drag: DragController::new(), step: EditorStep::Starting, baseline: None })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn step(&self) -> EditorStep {
        self.step
    }

    // ========================
    // Drag path
    // ========================

    pub fn press(&mut self, id: &str) -> PressOutcome {
        self.drag.press(&self.board, id, |_| true)
    }

    pub fn drag_to(&mut self, pos: NormPos) -> Option<MoveOutcome> {
        self.drag.drag_to(&mut self.board, pos)
    }

    pub fn release(&mut self) -> Option<String> {
        self.drag.release()
    }

    /// Drain board change events for the caller's rendering layer.
    pub fn take_events(&mut self) -> Vec<BoardEvent> {
        self.board.take_events()
    }

    // ========================
    // Step-one toggles
    // ========================

    /// Toggle a token's lock. Only meaningful while placing the starting
    /// layout; afterwards the locked set is frozen into the baseline.
    pub fn toggle_lock(&mut self, id: &str) -> Option<bool> {
        if self.step != EditorStep::Starting {
            return None;
        }
        self.board.toggle_lock(id)
    }

    /// Cycle a token's role indicator: none -> attack -> defend -> none.
    pub fn cycle_role(&mut self, id: &str) -> Option<RoleIndicator> {
        if self.step != EditorStep::Starting {
            return None;
        }
        self.board.cycle_role(id)
    }

    // ========================
    // Step transitions
    // ========================

    /// Freeze the current layout as the starting positions and move on to
    /// placing the solution.
    pub fn save_starting_positions(&mut self) {
        self.baseline = Some(self.board.snapshot());
        self.step = EditorStep::Solution;
        debug!("Starting positions saved, {} tokens", self.board.tokens().len());
    }

    /// Go back to editing starting positions. The frozen baseline is
    /// discarded; saving again re-freezes whatever is on the board.
    pub fn back_to_starting(&mut self) {
        self.baseline = None;
        self.step = EditorStep::Starting;
    }

    /// Assemble the creation payload.
    ///
    /// Requires a frozen baseline and a ball carrier in the layout; the
    /// solution becomes the diff between baseline and current positions.
    pub fn build(&self, meta: PuzzleMeta) -> Result<PuzzleDraft> {
        let baseline = self
            .baseline
            .as_ref()
            .ok_or_else(|| BoardError::ValidationError("starting positions not saved".into()))?;

        let carrier = self
            .board
            .ball_carrier()
            .ok_or_else(|| BoardError::InvalidBallCarrier("none".into()))?;

        let starting_positions = self
            .board
            .tokens()
            .iter()
            .map(|t| StartingPosition {
                token_id: t.id.clone(),
                // baseline always covers every token on the board
                cell: baseline.cell_of(&t.id).unwrap_or(t.cell),
                role: t.role,
            })
            .collect();

        let locked_positions = self
            .board
            .tokens()
            .iter()
            .filter(|t| t.locked)
            .map(|t| PlacedToken::new(t.id.clone(), baseline.cell_of(&t.id).unwrap_or(t.cell)))
            .collect();

        Ok(PuzzleDraft {
            meta,
            players: self.board.tokens().iter().map(|t| (t.team, t.id.clone())).collect(),
            starting_positions,
            locked_positions,
            solution_positions: diff(baseline, &self.board),
            ball_carrier: carrier.id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GRID_4V4;
    use crate::models::puzzle::{Format, Mode};

    fn meta() -> PuzzleMeta {
        PuzzleMeta {
            title: "Switch the play".to_string(),
            description: None,
            team_name: "U10 Tigers".to_string(),
            hint: Some("Look for the open wing".to_string()),
            solution_answer: None,
            format: Format::FourVFour,
            mode: Mode::Attacking,
            team_a_color: "#ff0000".to_string(),
            team_b_color: "#0000ff".to_string(),
        }
    }

    #[test]
    fn test_build_requires_saved_baseline() {
        let editor = PuzzleEditor::new(GRID_4V4).unwrap();
        assert!(editor.build(meta()).is_err());
    }

    #[test]
    fn test_solution_is_diff_against_baseline() {
        let mut editor = PuzzleEditor::new(GRID_4V4).unwrap();

        // Step one: nudge A2, lock B1, mark A3
        editor.press("A2");
        editor.drag_to(GRID_4V4.cell_center(17));
        editor.release();
        editor.toggle_lock("B1");
        editor.cycle_role("A3");

        editor.save_starting_positions();
        assert_eq!(editor.step(), EditorStep::Solution);

        // Step two: move A1 to the solution spot
        editor.press("A1");
        editor.drag_to(GRID_4V4.cell_center(4));
        editor.release();

        let draft = editor.build(meta()).unwrap();
        assert_eq!(draft.solution_positions, vec![PlacedToken::new("A1", 4)]);
        assert_eq!(draft.ball_carrier, "A1");
        assert_eq!(draft.players.len(), 8);

        // Starting positions carry the step-one state, not the solution
        let a1_start = draft.starting_positions.iter().find(|p| p.token_id == "A1").unwrap();
        assert_eq!(a1_start.cell, 11);
        let a2_start = draft.starting_positions.iter().find(|p| p.token_id == "A2").unwrap();
        assert_eq!(a2_start.cell, 17);
        let a3_start = draft.starting_positions.iter().find(|p| p.token_id == "A3").unwrap();
        assert_eq!(a3_start.role, RoleIndicator::Attack);

        assert_eq!(draft.locked_positions, vec![PlacedToken::new("B1", 53)]);
    }

    #[test]
    fn test_locked_token_cannot_be_dragged_in_solution_step() {
        let mut editor = PuzzleEditor::new(GRID_4V4).unwrap();
        editor.toggle_lock("B1");
        editor.save_starting_positions();

        assert_eq!(editor.press("B1"), PressOutcome::LockedToken);
        assert_eq!(editor.board().token("B1").unwrap().cell, 53);
    }

    #[test]
    fn test_toggles_frozen_after_step_one() {
        let mut editor = PuzzleEditor::new(GRID_4V4).unwrap();
        editor.save_starting_positions();

        assert_eq!(editor.toggle_lock("A1"), None);
        assert_eq!(editor.cycle_role("A1"), None);
    }

    #[test]
    fn test_back_to_starting_discards_baseline() {
        let mut editor = PuzzleEditor::new(GRID_4V4).unwrap();
        editor.save_starting_positions();
        editor.back_to_starting();

        assert_eq!(editor.step(), EditorStep::Starting);
        assert!(editor.build(meta()).is_err());
    }
}
