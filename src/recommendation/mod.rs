pub mod reasoning;
pub mod scorer;
pub mod types;

pub use scorer::{due_for_shorter_drive, recommend_court};
pub use types::{Recommendation, ScoredCourt, ScoringContext};
