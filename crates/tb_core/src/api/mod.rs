pub mod puzzle_json;

pub use puzzle_json::{
    solution_from_json, solve_session_from_detail_json, submission_json, validate_submission_json,
    PuzzleDetailDto, ValidateSubmissionRequest, ValidateSubmissionResponse,
};
