//! Puzzle solving session
//!
//! Wraps a board built from a puzzle's starting layout. The baseline is
//! captured at construction; the submission is always the diff against it.
//! Judging happens locally against the stored solution diff handed in by
//! the caller - the network round-trip, if any, stays outside the core.

use log::debug;

use crate::board::{Board, BoardEvent, MoveOutcome, Snapshot};
use crate::drag::{DragController, PressOutcome};
use crate::error::Result;
use crate::grid::{GridSpec, NormPos};
use crate::models::token::Token;
use crate::solution::{diff, evaluate, is_correct, PlacedToken, ValidationReport};

/// One attempt at solving a puzzle.
pub struct SolveSession {
    board: Board,
    drag: DragController,
    baseline: Snapshot,
    /// Stored solution diff, once fetched by the caller. Enables the
    /// solution overlay.
    stored_solution: Option<Vec<PlacedToken>>,
    showing_solution: bool,
    solution_answer: Option<String>,
}

impl SolveSession {
    /// Build a session from a puzzle's starting layout. The layout as
    /// given becomes the baseline for diffing.
    pub fn new(grid: GridSpec, tokens: Vec<Token>) -> Result<Self> {
        let board = Board::new(grid, tokens)?;
        let baseline = board.snapshot();
        Ok(Self {
            board,
            drag: DragController::new(),
            baseline,
            stored_solution: None,
            showing_solution: false,
            solution_answer: None,
        })
    }

    pub fn with_solution_answer(mut self, answer: Option<String>) -> Self {
        self.solution_answer = answer;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn baseline(&self) -> &Snapshot {
        &self.baseline
    }

    // ========================
    // Drag path
    // ========================

    /// Pointer-down on a token. Locked tokens never start a drag; while
    /// the solution overlay is shown, nothing does.
    pub fn press(&mut self, id: &str) -> PressOutcome {
        let showing = self.showing_solution;
        self.drag.press(&self.board, id, |_| !showing)
    }

    pub fn drag_to(&mut self, pos: NormPos) -> Option<MoveOutcome> {
        self.drag.drag_to(&mut self.board, pos)
    }

    pub fn release(&mut self) -> Option<String> {
        self.drag.release()
    }

    pub fn take_events(&mut self) -> Vec<BoardEvent> {
        self.board.take_events()
    }

    // ========================
    // Submission and judging
    // ========================

    /// The wire payload for this attempt: only the tokens that moved.
    pub fn submission(&self) -> Vec<PlacedToken> {
        diff(&self.baseline, &self.board)
    }

    /// Exact-match check of the current attempt against a stored solution.
    pub fn check(&self, stored: &[PlacedToken]) -> bool {
        is_correct(&self.submission(), stored)
    }

    /// Full report for the current attempt, with per-token distances.
    pub fn evaluate(&self, stored: &[PlacedToken]) -> Result<ValidationReport> {
        evaluate(&self.board, &self.submission(), stored, self.solution_answer.as_deref())
    }

    // ========================
    // Solution overlay
    // ========================

    /// Hand over the fetched solution diff, unlocking the overlay.
    pub fn set_stored_solution(&mut self, solution: Vec<PlacedToken>) {
        debug!("Stored solution received, {} entries", solution.len());
        self.stored_solution = Some(solution);
    }

    pub fn stored_solution(&self) -> Option<&[PlacedToken]> {
        self.stored_solution.as_deref()
    }

    /// Toggle the solution overlay. No-op until a solution is available;
    /// dragging is suspended while shown.
    pub fn toggle_solution_view(&mut self) -> bool {
        if self.stored_solution.is_some() {
            self.showing_solution = !self.showing_solution;
        }
        self.showing_solution
    }

    pub fn showing_solution(&self) -> bool {
        self.showing_solution
    }

    /// Positions to render: current positions, with the stored solution
    /// overlaid while the overlay is on.
    pub fn display_positions(&self) -> Vec<Token> {
        let mut tokens = self.board.tokens().to_vec();
        if self.showing_solution {
            if let Some(solution) = &self.stored_solution {
                for entry in solution {
                    if let Some(token) = tokens.iter_mut().find(|t| t.id == entry.token_id) {
                        token.cell = entry.cell;
                    }
                }
            }
        }
        tokens
    }

    /// Abandon the attempt: every token back to the baseline.
    pub fn reset(&mut self) {
        self.board.restore(&self.baseline);
        self.showing_solution = false;
    }
}
