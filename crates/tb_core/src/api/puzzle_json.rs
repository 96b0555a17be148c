//! JSON boundary for the board core
//!
//! The core itself trades in plain data; these entry points parse the
//! payloads callers exchange with their transport layer and render the
//! ones the core hands back. Validation is entirely in-memory: given two
//! diffs and a roster, [`validate_submission_json`] judges a submission
//! with no network dependency.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BoardError, Result};
use crate::grid::{CellId, GridSpec};
use crate::models::puzzle::{Format, Mode};
use crate::models::token::{RoleIndicator, Team, Token};
use crate::puzzle::solver::SolveSession;
use crate::solution::{evaluate, PlacedToken};
use crate::SCHEMA_VERSION;

/// One (player, cell) entry on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PositionDto {
    pub player_label: String,
    pub square_id: CellId,
}

impl From<&PlacedToken> for PositionDto {
    fn from(p: &PlacedToken) -> Self {
        Self { player_label: p.token_id.clone(), square_id: p.cell }
    }
}

impl From<PositionDto> for PlacedToken {
    fn from(dto: PositionDto) -> Self {
        PlacedToken::new(dto.player_label, dto.square_id)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct GridDto {
    pub rows: u8,
    pub cols: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_squares: Option<u16>,
}

impl GridDto {
    fn to_spec(self) -> Result<GridSpec> {
        if self.rows == 0 || self.cols == 0 {
            return Err(BoardError::ValidationError(format!(
                "grid must have positive dimensions, got {}x{}",
                self.cols, self.rows
            )));
        }
        Ok(GridSpec { cols: self.cols, rows: self.rows })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PuzzlePlayerDto {
    pub label: String,
    pub start_square: CellId,
    #[serde(default)]
    pub has_ball: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator: Option<RoleIndicator>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TeamDto {
    pub color: String,
    pub players: Vec<PuzzlePlayerDto>,
}

/// The puzzle detail payload a caller fetched for solving.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PuzzleDetailDto {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub team_name: String,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub format: Format,
    #[serde(default)]
    pub mode: Mode,
    pub grid: GridDto,
    pub teams: BTreeMap<Team, TeamDto>,
}

/// The submission payload a caller sends for checking.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SubmissionRequestDto {
    pub positions: Vec<PositionDto>,
}

/// Roster entry for in-memory validation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RosterPlayerDto {
    pub label: String,
    pub team: Team,
    pub start_square: CellId,
}

/// Everything needed to judge a submission without any transport.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ValidateSubmissionRequest {
    pub schema_version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridDto>,
    pub players: Vec<RosterPlayerDto>,
    pub submitted: Vec<PositionDto>,
    pub solution: Vec<PositionDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_answer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PlayerFeedbackDto {
    pub player_label: String,
    pub distance: u16,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ValidateSubmissionResponse {
    pub schema_version: u8,
    pub correct: bool,
    pub feedback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_answer: Option<String>,
    pub player_feedback: Vec<PlayerFeedbackDto>,
}

/// Strip the team prefix for display: "A1" -> "1".
fn display_label(label: &str) -> String {
    label.trim_start_matches(|c: char| c.is_ascii_uppercase()).to_string()
}

/// Build a solve session from a fetched puzzle detail payload.
pub fn solve_session_from_detail_json(json: &str) -> Result<SolveSession> {
    let detail: PuzzleDetailDto = serde_json::from_str(json)?;
    debug!(puzzle_id = %detail.id, "Building solve session from detail payload");

    let grid = detail.grid.to_spec()?;
    let mut tokens = Vec::new();
    for (team, roster) in &detail.teams {
        for player in &roster.players {
            let mut token = Token::new(
                player.label.clone(),
                *team,
                display_label(&player.label),
                player.start_square,
            );
            token.locked = player.locked;
            token.has_possession = player.has_ball;
            token.role = player.indicator.unwrap_or_default();
            tokens.push(token);
        }
    }

    SolveSession::new(grid, tokens)
}

/// Parse a stored solution payload: a bare array of position entries.
pub fn solution_from_json(json: &str) -> Result<Vec<PlacedToken>> {
    let positions: Vec<PositionDto> = serde_json::from_str(json)?;
    Ok(positions.into_iter().map(PlacedToken::from).collect())
}

/// Render a submission diff as the wire payload for checking.
pub fn submission_json(submission: &[PlacedToken]) -> Result<String> {
    let dto = SubmissionRequestDto {
        positions: submission.iter().map(PositionDto::from).collect(),
    };
    Ok(serde_json::to_string(&dto)?)
}

/// Judge a submission against a stored solution, entirely in memory.
pub fn validate_submission_json(request_json: &str) -> Result<String> {
    let request: ValidateSubmissionRequest = serde_json::from_str(request_json)?;
    debug!(
        submitted = request.submitted.len(),
        solution = request.solution.len(),
        "Validating submission"
    );

    let grid = match request.grid {
        Some(dto) => dto.to_spec()?,
        None => GridSpec::default(),
    };

    let tokens: Vec<Token> = request
        .players
        .iter()
        .map(|p| Token::new(p.label.clone(), p.team, display_label(&p.label), p.start_square))
        .collect();
    let board = crate::board::Board::new(grid, tokens)?;

    let submitted: Vec<PlacedToken> =
        request.submitted.into_iter().map(PlacedToken::from).collect();
    let solution: Vec<PlacedToken> =
        request.solution.into_iter().map(PlacedToken::from).collect();

    let report = evaluate(&board, &submitted, &solution, request.solution_answer.as_deref())?;

    let response = ValidateSubmissionResponse {
        schema_version: SCHEMA_VERSION,
        correct: report.correct,
        feedback: report.feedback,
        solution_answer: report.solution_answer,
        player_feedback: report
            .token_feedback
            .iter()
            .map(|f| PlayerFeedbackDto {
                player_label: f.token_id.clone(),
                distance: f.distance,
                is_correct: f.is_correct,
            })
            .collect(),
    };

    Ok(serde_json::to_string(&response)?)
}
