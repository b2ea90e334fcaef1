use std::fmt;

use serde::{Serialize, Serializer};

use super::format::format_minutes;
use crate::domain::{DriveMinutes, PlayerId, Session};

/// Who has driven more so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lead {
    Even,
    Ahead(PlayerId),
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lead::Even => f.write_str("Even"),
            Lead::Ahead(player) => f.write_str(player.name()),
        }
    }
}

impl Serialize for Lead {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FairnessSummary {
    pub totals: DriveMinutes,
    pub diff: u32,
    pub lead: Lead,
    pub summary: String,
}

/// Per-player drive minutes summed over the whole history
pub fn calculate_totals(sessions: &[Session]) -> DriveMinutes {
    sessions
        .iter()
        .fold(DriveMinutes::default(), |acc, session| acc.plus(session.drive))
}

/// The session with the latest date.
///
/// Sessions sharing the latest date resolve to the one that comes first in
/// `sessions`.
pub fn most_recent_session(sessions: &[Session]) -> Option<&Session> {
    sessions.iter().fold(None, |latest: Option<&Session>, session| match latest {
        Some(current) if current.date >= session.date => Some(current),
        _ => Some(session),
    })
}

pub fn fairness_summary(sessions: &[Session]) -> FairnessSummary {
    let totals = calculate_totals(sessions);
    let diff = totals.difference();
    let lead = totals.longer_for().map_or(Lead::Even, Lead::Ahead);

    FairnessSummary {
        totals,
        diff,
        lead,
        summary: format!(
            "{} vs {} (diff {})",
            format_minutes(totals.andrey),
            format_minutes(totals.lucas),
            format_minutes(diff)
        ),
    }
}
