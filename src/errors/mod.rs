use thiserror::Error;

/// Failures of the planning core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error("no courts to rank")]
    EmptyCandidateSet,
    #[error("unknown court: {0}")]
    UnknownCourt(String),
}

/// Add context to store errors
pub fn store_context(operation: &str, path: &std::path::Path) -> String {
    format!("Failed to {} state file: {}", operation, path.display())
}

/// Add context to weather errors
pub fn weather_context(url: &str) -> String {
    format!("Failed to fetch weather from: {}", url)
}
