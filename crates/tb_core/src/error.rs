use std::fmt;

#[derive(Debug)]
pub enum BoardError {
    InvalidCell { cell: u16, total: u16 },
    DuplicateToken(String),
    UnknownToken(String),
    MultipleBallCarriers { found: usize },
    InvalidBallCarrier(String),
    ValidationError(String),
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::InvalidCell { cell, total } => {
                write!(f, "Invalid cell: {} (grid has {} cells)", cell, total)
            }
            BoardError::DuplicateToken(id) => {
                write!(f, "Duplicate token id: {}", id)
            }
            BoardError::UnknownToken(id) => {
                write!(f, "Unknown token: {}", id)
            }
            BoardError::MultipleBallCarriers { found } => {
                write!(f, "At most one token may carry the ball, found {}", found)
            }
            BoardError::InvalidBallCarrier(label) => {
                write!(f, "Invalid ball carrier: {}", label)
            }
            BoardError::ValidationError(msg) => {
                write!(f, "Validation error: {}", msg)
            }
            BoardError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            BoardError::DeserializationError(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for BoardError {}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            BoardError::DeserializationError(err.to_string())
        } else {
            BoardError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
