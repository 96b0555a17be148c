//! Drag interaction state machine
//!
//! One controller per pointer surface, driving token relocation:
//!
//! ```text
//! Idle --press--> Dragging(id) --release/pointer_left--> Idle
//! ```
//!
//! A press is rejected while a drag is already active (single-owner guard),
//! when the token is locked, or when the caller's drag-permission predicate
//! denies it. Move events against an occupied cell are silently ignored;
//! whatever cell was last accepted is final on release.

use crate::board::{Board, MoveOutcome};
use crate::grid::NormPos;
use crate::models::token::Token;

/// Controller state, a tagged variant rather than an implicit flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(String),
}

/// Why a press did or did not start a drag. Rejections are values; the
/// controller simply stays Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    Started,
    LockedToken,
    Denied,
    /// Another drag is already active on this surface.
    AlreadyDragging,
    UnknownToken,
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Id of the token being dragged, if any.
    pub fn dragging(&self) -> Option<&str> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(id),
        }
    }

    /// Pointer-down on a token. `permit` is the caller-supplied
    /// drag-permission hook; the lock check is intrinsic and runs first.
    pub fn press(
        &mut self,
        board: &Board,
        id: &str,
        permit: impl Fn(&Token) -> bool,
    ) -> PressOutcome {
        if self.state != DragState::Idle {
            return PressOutcome::AlreadyDragging;
        }

        let Some(token) = board.token(id) else {
            return PressOutcome::UnknownToken;
        };

        if token.locked {
            return PressOutcome::LockedToken;
        }
        if !permit(token) {
            return PressOutcome::Denied;
        }

        self.state = DragState::Dragging(id.to_string());
        PressOutcome::Started
    }

    /// Pointer-move while dragging. Maps the pointer to a cell and attempts
    /// the relocation; returns `None` when no drag is active.
    ///
    /// A blocked attempt leaves the token where it was, and the next event
    /// is evaluated against the then-current occupancy.
    pub fn drag_to(&self, board: &mut Board, pos: NormPos) -> Option<MoveOutcome> {
        let DragState::Dragging(id) = &self.state else {
            return None;
        };

        let cell = board.grid().cell_at_norm(pos);
        Some(board.move_token(id, cell))
    }

    /// Pointer-up: end the drag. The last accepted cell is final; nothing
    /// reverts. Returns the released token id.
    pub fn release(&mut self) -> Option<String> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(id),
        }
    }

    /// Pointer left the interactive surface; same terminal behavior as
    /// release.
    pub fn pointer_left(&mut self) -> Option<String> {
        self.release()
    }
}
