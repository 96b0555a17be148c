//! # tb_core - Tactical Board State & Move-Validation Engine
//!
//! This library drives a discretized tactics board: tokens are placed on a
//! grid, dragged between cells under lock and occupancy rules, and their
//! final positions are diffed against a stored solution for exact-match
//! validation.
//!
//! ## Features
//! - Pure, total grid coordinate mapping (out-of-range input clamps)
//! - Explicit drag state machine with lock/occupancy/permission rules
//! - Possession marker that sticks to the token it shares a cell with
//! - Minimal position diffs and exact-set-equality validation
//! - In-memory judging with per-player distance feedback
//!
//! The core runs single-threaded inside the caller's event loop. It owns
//! no transport, persistence or rendering: payloads cross the boundary as
//! plain data (see [`api`]).

pub mod api;
pub mod ball;
pub mod board;
pub mod drag;
pub mod error;
pub mod grid;
pub mod models;
pub mod prefs;
pub mod puzzle;
pub mod solution;

// Re-export main API functions
pub use api::{
    solution_from_json, solve_session_from_detail_json, submission_json, validate_submission_json,
};
pub use error::{BoardError, Result};

// Re-export board system types
pub use ball::BallMarker;
pub use board::{Board, BoardEvent, MoveOutcome, Snapshot};
pub use drag::{DragController, DragState, PressOutcome};
pub use grid::{CellId, GridSpec, NormPos, GRID_4V4};
pub use models::{default_4v4_tokens, Format, Mode, Puzzle, PuzzleDraft, PuzzleMeta};
pub use models::{RoleIndicator, Team, Token};

// Re-export session types
pub use prefs::{FilePrefsStore, PrefsStore, SearchPrefs};
pub use puzzle::{EditorStep, Playground, PuzzleEditor, SolveSession};
pub use solution::{diff, evaluate, is_correct, PlacedToken, TokenFeedback, ValidationReport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
