use serde::Serialize;

use crate::domain::{Court, DriveMinutes, PlayerId};

/// Inputs shared by every candidate during one ranking pass
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringContext {
    pub totals: DriveMinutes,
    /// Player owed the shorter drive, if the history says so
    pub due_player: Option<PlayerId>,
    pub rainy: bool,
}

/// A candidate court with its cost (lower is better)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCourt {
    pub court: Court,
    pub score: f64,
    pub balance_diff: u32,
    pub combined: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub court: Court,
    pub reasoning: String,
    pub ranked: Vec<ScoredCourt>,
}
