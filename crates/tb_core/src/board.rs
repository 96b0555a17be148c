//! Board state
//!
//! Holds the tokens of one board instance. Positions change only through
//! [`move_token`](Board::move_token) (driven by the drag controller); lock
//! and role flags change through two independent toggles that bypass the
//! drag path. Every accepted change is recorded as a [`BoardEvent`] for
//! observers to drain.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::grid::{CellId, GridSpec};
use crate::models::token::{RoleIndicator, Token};
use crate::solution::PlacedToken;

/// A published board change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    TokenMoved { id: String, from: CellId, to: CellId },
    LockToggled { id: String, locked: bool },
    RoleCycled { id: String, role: RoleIndicator },
}

/// Result of one relocation attempt.
///
/// Rejections are values, not errors: a blocked move leaves the token at
/// its last accepted cell and the next attempt is evaluated independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: CellId, to: CellId },
    /// Another token already occupies the target cell.
    Occupied { by: String },
    /// Target cell equals the current cell; nothing to do.
    Unchanged,
    UnknownToken,
}

/// Immutable position capture, the reference point for diffing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Snapshot {
    cells: HashMap<String, CellId>,
}

impl Snapshot {
    pub fn cell_of(&self, id: &str) -> Option<CellId> {
        self.cells.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, CellId)> {
        self.cells.iter().map(|(id, cell)| (id.as_str(), *cell))
    }

    /// Overlay a diff onto this snapshot. Entries for unknown tokens are
    /// ignored.
    pub fn apply(&self, diff: &[PlacedToken]) -> Snapshot {
        let mut cells = self.cells.clone();
        for entry in diff {
            if let Some(cell) = cells.get_mut(&entry.token_id) {
                *cell = entry.cell;
            }
        }
        Snapshot { cells }
    }
}

/// One board instance: an ordered token collection plus its event journal.
///
/// Token order is display order only, never semantics.
#[derive(Debug, Clone)]
pub struct Board {
    grid: GridSpec,
    tokens: Vec<Token>,
    events: Vec<BoardEvent>,
}

impl Board {
    /// Build a board from an initial layout.
    ///
    /// Fails on duplicate ids, off-board cells, or more than one ball
    /// carrier. This is the only fallible step; all later mutation absorbs
    /// bad input instead of erroring.
    pub fn new(grid: GridSpec, tokens: Vec<Token>) -> Result<Self> {
        let mut seen = HashSet::new();
        for token in &tokens {
            if !seen.insert(token.id.clone()) {
                return Err(BoardError::DuplicateToken(token.id.clone()));
            }
            if !grid.contains(token.cell) {
                return Err(BoardError::InvalidCell { cell: token.cell, total: grid.total() });
            }
        }

        let carriers = tokens.iter().filter(|t| t.has_possession).count();
        if carriers > 1 {
            return Err(BoardError::MultipleBallCarriers { found: carriers });
        }

        Ok(Self { grid, tokens, events: Vec::new() })
    }

    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token(&self, id: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id == id)
    }

    /// The token on a cell, if any.
    pub fn occupant(&self, cell: CellId) -> Option<&Token> {
        self.tokens.iter().find(|t| t.cell == cell)
    }

    /// The unique ball carrier, if the layout has one.
    pub fn ball_carrier(&self) -> Option<&Token> {
        self.tokens.iter().find(|t| t.has_possession)
    }

    /// Attempt to relocate a token. Off-board targets clamp onto the board.
    ///
    /// Does not consult the `locked` flag: lock enforcement lives at the
    /// drag-begin boundary, so a locked token never reaches this call
    /// through the drag path.
    pub fn move_token(&mut self, id: &str, cell: CellId) -> MoveOutcome {
        let cell = cell.clamp(1, self.grid.total());

        let Some(idx) = self.tokens.iter().position(|t| t.id == id) else {
            return MoveOutcome::UnknownToken;
        };

        let from = self.tokens[idx].cell;
        if from == cell {
            return MoveOutcome::Unchanged;
        }

        if let Some(other) = self.tokens.iter().find(|t| t.id != id && t.cell == cell) {
            return MoveOutcome::Occupied { by: other.id.clone() };
        }

        self.tokens[idx].cell = cell;
        self.events.push(BoardEvent::TokenMoved { id: id.to_string(), from, to: cell });
        MoveOutcome::Moved { from, to: cell }
    }

    /// Flip a token's lock flag. Returns the new state, or `None` for an
    /// unknown token.
    pub fn toggle_lock(&mut self, id: &str) -> Option<bool> {
        let token = self.tokens.iter_mut().find(|t| t.id == id)?;
        token.locked = !token.locked;
        let locked = token.locked;
        self.events.push(BoardEvent::LockToggled { id: id.to_string(), locked });
        Some(locked)
    }

    /// Cycle a token's role indicator. Returns the new role, or `None` for
    /// an unknown token.
    pub fn cycle_role(&mut self, id: &str) -> Option<RoleIndicator> {
        let token = self.tokens.iter_mut().find(|t| t.id == id)?;
        token.role = token.role.next();
        let role = token.role;
        self.events.push(BoardEvent::RoleCycled { id: id.to_string(), role });
        Some(role)
    }

    /// Capture current positions as an immutable snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.tokens.iter().map(|t| (t.id.clone(), t.cell)).collect(),
        }
    }

    /// Put every token back to its snapshot position. Emits no events;
    /// this is a wholesale reset, not a drag.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        for token in &mut self.tokens {
            if let Some(cell) = snapshot.cell_of(&token.id) {
                token.cell = cell;
            }
        }
    }

    /// Drain pending change events, oldest first.
    pub fn take_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }
}
