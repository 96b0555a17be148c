//! Puzzle sessions: authoring, solving, free play.

pub mod editor;
pub mod playground;
pub mod solver;


pub use editor::{EditorStep, PuzzleEditor};
pub use playground::Playground;
pub use solver::SolveSession;
