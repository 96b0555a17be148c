//! Solution diff and validation
//!
//! A submission is the minimal set of changed positions relative to the
//! baseline snapshot; tokens that need not move are implicit. Correctness
//! is exact set equality against the stored solution diff: every required
//! token at exactly the required cell, nothing extra, nothing missing. No
//! partial credit.
//!
//! [`evaluate`] additionally produces the human feedback report (per-token
//! Manhattan distances and a composed sentence); it is pure in-memory and
//! needs no transport.

use std::collections::{HashMap, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Snapshot};
use crate::error::{BoardError, Result};
use crate::grid::CellId;

/// One diff entry: a token and the cell it moved to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct PlacedToken {
    pub token_id: String,
    pub cell: CellId,
}

impl PlacedToken {
    pub fn new(token_id: impl Into<String>, cell: CellId) -> Self {
        Self { token_id: token_id.into(), cell }
    }
}

/// Per-token verdict in a validation report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenFeedback {
    pub token_id: String,
    /// Manhattan distance from the required cell, in cell steps.
    pub distance: u16,
    pub is_correct: bool,
}

/// Outcome of judging a submission, with explanatory text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub correct: bool,
    pub feedback: String,
    pub token_feedback: Vec<TokenFeedback>,
    /// The author's explanation, revealed only on a correct submission.
    pub solution_answer: Option<String>,
}

/// Tokens whose cell differs from the baseline, in board order.
///
/// Locked tokens never appear: the drag controller refuses to move them,
/// so their cell always matches the baseline.
pub fn diff(baseline: &Snapshot, board: &Board) -> Vec<PlacedToken> {
    board
        .tokens()
        .iter()
        .filter(|t| baseline.cell_of(&t.id) != Some(t.cell))
        .map(|t| PlacedToken::new(t.id.clone(), t.cell))
        .collect()
}

/// Exact set equality of (token, cell) pairs. Order never matters; any
/// wrong cell, missing token or extra token fails.
pub fn is_correct(submitted: &[PlacedToken], stored: &[PlacedToken]) -> bool {
    let submitted: HashSet<(&str, CellId)> =
        submitted.iter().map(|p| (p.token_id.as_str(), p.cell)).collect();
    let stored: HashSet<(&str, CellId)> =
        stored.iter().map(|p| (p.token_id.as_str(), p.cell)).collect();
    submitted == stored
}

/// Judge a submission and compose the feedback report.
///
/// Fails only on diff entries naming tokens that are not on the board;
/// a wrong answer is a negative result, not an error.
pub fn evaluate(
    board: &Board,
    submitted: &[PlacedToken],
    stored: &[PlacedToken],
    solution_answer: Option<&str>,
) -> Result<ValidationReport> {
    for entry in submitted.iter().chain(stored) {
        if board.token(&entry.token_id).is_none() {
            return Err(BoardError::UnknownToken(entry.token_id.clone()));
        }
    }

    let submitted_cells: HashMap<&str, CellId> =
        submitted.iter().map(|p| (p.token_id.as_str(), p.cell)).collect();
    let stored_ids: HashSet<&str> = stored.iter().map(|p| p.token_id.as_str()).collect();

    // Every token the solution requires to move must have been positioned
    if stored.iter().any(|p| !submitted_cells.contains_key(p.token_id.as_str())) {
        return Ok(ValidationReport {
            correct: false,
            feedback: "Not all players have been positioned.".to_string(),
            token_feedback: Vec::new(),
            solution_answer: None,
        });
    }

    let grid = board.grid();
    let token_feedback: Vec<TokenFeedback> = stored
        .iter()
        .map(|required| {
            let placed = submitted_cells[required.token_id.as_str()];
            let distance = grid.manhattan_distance(placed, required.cell);
            TokenFeedback {
                token_id: required.token_id.clone(),
                distance,
                is_correct: distance == 0,
            }
        })
        .collect();

    // Submitted movers the solution never asked for
    let extras: Vec<&str> = submitted
        .iter()
        .map(|p| p.token_id.as_str())
        .filter(|id| !stored_ids.contains(id))
        .collect();

    let correct = is_correct(submitted, stored);
    let feedback = if correct {
        "Perfect! All players are in the correct positions.".to_string()
    } else {
        compose_feedback(board, &token_feedback, &extras)
    };

    Ok(ValidationReport {
        correct,
        feedback,
        token_feedback,
        solution_answer: if correct { solution_answer.map(str::to_string) } else { None },
    })
}

fn display_name(board: &Board, id: &str) -> String {
    board.token(id).map(|t| t.display_name()).unwrap_or_else(|| id.to_string())
}

fn square_word(distance: u16) -> &'static str {
    if distance == 1 {
        "square"
    } else {
        "squares"
    }
}

/// "A", "A and B", "A, B and C"
fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

fn compose_feedback(board: &Board, token_feedback: &[TokenFeedback], extras: &[&str]) -> String {
    let incorrect: Vec<&TokenFeedback> =
        token_feedback.iter().filter(|f| !f.is_correct).collect();
    let correct_names: Vec<String> = token_feedback
        .iter()
        .filter(|f| f.is_correct)
        .map(|f| display_name(board, &f.token_id))
        .collect();
    let extra_names: Vec<String> = extras.iter().map(|id| display_name(board, id)).collect();

    let mut sentences = Vec::new();

    if !incorrect.is_empty() {
        let parts: Vec<String> = incorrect
            .iter()
            .map(|f| {
                format!(
                    "{} is {} {}",
                    display_name(board, &f.token_id),
                    f.distance,
                    square_word(f.distance)
                )
            })
            .collect();
        let main = format!("{} from the ideal solution", parts.join(", and "));

        if correct_names.is_empty() {
            sentences.push(format!("{}.", main));
        } else {
            let verb = if correct_names.len() == 1 { "is" } else { "are" };
            sentences.push(format!("{} {} correct, but {}.", join_names(&correct_names), verb, main));
        }
    }

    if sentences.is_empty() && extra_names.is_empty() {
        // Degenerate payloads (e.g. one token submitted twice) can fail the
        // set check while every distance reads zero
        return "The submission does not match the solution exactly.".to_string();
    }

    if !extra_names.is_empty() {
        let verb = if extra_names.len() == 1 { "was" } else { "were" };
        if incorrect.is_empty() {
            sentences.push(format!(
                "All required players are in position, but {} {} not expected to move.",
                join_names(&extra_names),
                verb
            ));
        } else {
            sentences.push(format!(
                "{} {} not expected to move.",
                join_names(&extra_names),
                verb
            ));
        }
    }

    sentences.join(" ")
}
