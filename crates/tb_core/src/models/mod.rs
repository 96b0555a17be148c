pub mod puzzle;
pub mod token;

pub use puzzle::{
    default_4v4_tokens, Format, Mode, Puzzle, PuzzleDraft, PuzzleMeta, StartingPosition,
};
pub use token::{RoleIndicator, Team, Token};
