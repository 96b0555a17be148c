//! Puzzle metadata and authoring payloads
//!
//! The core never persists puzzles itself; these types are the plain data
//! it receives from and hands to its callers.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::grid::CellId;
use crate::models::token::{RoleIndicator, Team, Token};
use crate::solution::PlacedToken;

/// Board format. Only 4v4 exists today.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub enum Format {
    #[default]
    #[serde(rename = "4v4")]
    FourVFour,
}

/// Whether the puzzle poses an attacking or a defending question.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Attacking,
    Defending,
}

/// Descriptive fields of a puzzle, independent of any position data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PuzzleMeta {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub team_name: String,
    /// Shown to solvers on request.
    #[serde(default)]
    pub hint: Option<String>,
    /// Shown to solvers after a correct submission.
    #[serde(default)]
    pub solution_answer: Option<String>,
    #[serde(default)]
    pub format: Format,
    #[serde(default)]
    pub mode: Mode,
    pub team_a_color: String,
    pub team_b_color: String,
}

/// A stored puzzle as the caller's persistence layer sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Puzzle {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub meta: PuzzleMeta,
}

impl Puzzle {
    pub fn new(meta: PuzzleMeta) -> Self {
        Self { id: Uuid::new_v4(), created_at: Utc::now(), meta }
    }
}

/// A starting position entry, carrying the role indicator set at authoring
/// time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StartingPosition {
    pub token_id: String,
    pub cell: CellId,
    #[serde(default)]
    pub role: RoleIndicator,
}

/// Everything the editor produces for one authored puzzle.
///
/// `solution_positions` is a diff against the starting layout: tokens that
/// need not move are implicit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PuzzleDraft {
    pub meta: PuzzleMeta,
    /// (team, token id) for every piece on the board.
    pub players: Vec<(Team, String)>,
    pub starting_positions: Vec<StartingPosition>,
    pub locked_positions: Vec<PlacedToken>,
    pub solution_positions: Vec<PlacedToken>,
    pub ball_carrier: String,
}

/// Default 4v4 kickoff layout. Red Player 1 carries the ball.
static DEFAULT_4V4: Lazy<Vec<Token>> = Lazy::new(|| {
    vec![
        Token::new("A1", Team::A, "1", 11).with_possession(),
        Token::new("A2", Team::A, "2", 16),
        Token::new("A3", Team::A, "3", 20),
        Token::new("A4", Team::A, "4", 25),
        Token::new("B1", Team::B, "1", 53),
        Token::new("B2", Team::B, "2", 44),
        Token::new("B3", Team::B, "3", 48),
        Token::new("B4", Team::B, "4", 39),
    ]
});

/// Fresh copy of the default 4v4 layout.
pub fn default_4v4_tokens() -> Vec<Token> {
    DEFAULT_4V4.clone()
}
