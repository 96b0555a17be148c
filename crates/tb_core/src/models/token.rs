//! Token (player piece) model
//!
//! A token is a placeable, possibly-locked piece on the board. At most one
//! token per board carries the ball; that attribute is fixed at creation
//! and never reassigned by the drag path.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::grid::CellId;

/// Which side a token belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Team {
    A,
    B,
}

impl Team {
    /// Display color name used in validation feedback.
    pub fn color_name(&self) -> &'static str {
        match self {
            Team::A => "Red",
            Team::B => "Blue",
        }
    }
}

impl std::str::FromStr for Team {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Team::A),
            "B" => Ok(Team::B),
            other => Err(crate::error::BoardError::ValidationError(format!(
                "unknown team: {}",
                other
            ))),
        }
    }
}

/// Informational role marker, cycled independently of position.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum RoleIndicator {
    #[default]
    None,
    Attack,
    Defend,
}

impl RoleIndicator {
    /// Advance to the next indicator: none -> attack -> defend -> none.
    pub fn next(&self) -> Self {
        match self {
            RoleIndicator::None => RoleIndicator::Attack,
            RoleIndicator::Attack => RoleIndicator::Defend,
            RoleIndicator::Defend => RoleIndicator::None,
        }
    }
}

/// A placeable piece on the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// Stable identifier, unique within a board, never reused.
    pub id: String,
    pub team: Team,
    /// Display text, independent of the id.
    pub label: String,
    /// Current cell index; always a valid grid cell.
    pub cell: CellId,
    /// Immovable by the drag controller while set.
    #[serde(default)]
    pub locked: bool,
    /// Ball carrier flag; at most one per board, fixed at creation.
    #[serde(default)]
    pub has_possession: bool,
    #[serde(default)]
    pub role: RoleIndicator,
}

impl Token {
    pub fn new(id: impl Into<String>, team: Team, label: impl Into<String>, cell: CellId) -> Self {
        Self {
            id: id.into(),
            team,
            label: label.into(),
            cell,
            locked: false,
            has_possession: false,
            role: RoleIndicator::None,
        }
    }

    pub fn with_possession(mut self) -> Self {
        self.has_possession = true;
        self
    }

    /// Human-readable name used in validation feedback, e.g. "Red Player 3".
    pub fn display_name(&self) -> String {
        format!("{} Player {}", self.team.color_name(), self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_role_cycle_closes() {
        // Cycling three times returns to the start, whatever the start
        for role in RoleIndicator::iter() {
            assert_eq!(role.next().next().next(), role);
        }
    }

    #[test]
    fn test_role_cycle_order() {
        assert_eq!(RoleIndicator::None.next(), RoleIndicator::Attack);
        assert_eq!(RoleIndicator::Attack.next(), RoleIndicator::Defend);
        assert_eq!(RoleIndicator::Defend.next(), RoleIndicator::None);
    }

    #[test]
    fn test_team_parse() {
        for team in Team::iter() {
            let s = match team {
                Team::A => "A",
                Team::B => "B",
            };
            assert_eq!(s.parse::<Team>().unwrap(), team);
        }
        assert!("C".parse::<Team>().is_err());
    }

    #[test]
    fn test_display_name() {
        let token = Token::new("A3", Team::A, "3", 20);
        assert_eq!(token.display_name(), "Red Player 3");
        let token = Token::new("B1", Team::B, "1", 53);
        assert_eq!(token.display_name(), "Blue Player 1");
    }

    #[test]
    fn test_token_serde_defaults() {
        // Older payloads omit locked/has_possession/role
        let token: Token = serde_json::from_str(
            r#"{"id":"A1","team":"A","label":"1","cell":11}"#,
        )
        .unwrap();
        assert!(!token.locked);
        assert!(!token.has_possession);
        assert_eq!(token.role, RoleIndicator::None);
    }
}
