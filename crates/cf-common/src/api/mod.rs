pub mod filter_request;
pub mod filter_response;

pub use filter_request::{FilterRequest, ScoreRequest, DEFAULT_MIN_SCORE};
pub use filter_response::{FilterResponse, ScoreResult};
