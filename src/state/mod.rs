use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::{Court, Surface};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CourtFilter {
    #[default]
    All,
    Indoor,
    Clay,
    Hard,
}

impl CourtFilter {
    pub fn matches(&self, court: &Court) -> bool {
        match self {
            CourtFilter::All => true,
            CourtFilter::Indoor => court.is_indoor(),
            CourtFilter::Clay => court.surface == Surface::Clay,
            CourtFilter::Hard => court.surface == Surface::Hard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    SetFilter(CourtFilter),
    SetQuery(String),
    SelectCourt(String),
}

/// Snapshot of what the court browser shows.
///
/// Transitions go through [`ViewState::apply`], which returns a new snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub filter: CourtFilter,
    /// Stored lowercased
    pub query: String,
    pub active_court_id: Option<String>,
}

impl ViewState {
    pub fn initial(courts: &[Court]) -> Self {
        Self {
            active_court_id: courts.first().map(|c| c.id.clone()),
            ..Self::default()
        }
    }

    pub fn apply(self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::SetFilter(filter) => Self { filter, ..self },
            ViewEvent::SetQuery(query) => Self {
                query: query.to_lowercase(),
                ..self
            },
            ViewEvent::SelectCourt(id) => Self {
                active_court_id: Some(id),
                ..self
            },
        }
    }

    pub fn filtered_courts<'a>(&self, courts: &'a [Court]) -> Vec<&'a Court> {
        let search = self.query.trim();
        courts
            .iter()
            .filter(|court| self.filter.matches(court))
            .filter(|court| {
                search.is_empty()
                    || format!("{} {}", court.name, court.address)
                        .to_lowercase()
                        .contains(search)
            })
            .collect()
    }

    /// Selected court, or the first catalog court when nothing valid is selected
    pub fn active_court<'a>(&self, courts: &'a [Court]) -> Option<&'a Court> {
        self.active_court_id
            .as_deref()
            .and_then(|id| courts.iter().find(|c| c.id == id))
            .or_else(|| courts.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::get_courts;

    fn ids<'a>(courts: &[&'a Court]) -> Vec<&'a str> {
        courts.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_initial_state_selects_first_court() {
        let courts = get_courts();
        let state = ViewState::initial(&courts);

        assert_eq!(state.active_court_id.as_deref(), Some("316-tennis"));
        assert_eq!(state.filtered_courts(&courts).len(), 3);
    }

    #[test]
    fn test_apply_returns_new_snapshot() {
        let courts = get_courts();
        let before = ViewState::initial(&courts);
        let after = before.clone().apply(ViewEvent::SelectCourt("adams".into()));

        assert_eq!(before.active_court_id.as_deref(), Some("316-tennis"));
        assert_eq!(after.active_court(&courts).map(|c| c.id.as_str()), Some("adams"));
        assert_eq!(after.filter, before.filter);
    }

    #[test]
    fn test_filters() {
        let courts = get_courts();
        let state = ViewState::initial(&courts);

        let indoor = state.clone().apply(ViewEvent::SetFilter(CourtFilter::Indoor));
        assert_eq!(ids(&indoor.filtered_courts(&courts)), vec!["316-tennis"]);

        let clay = state.clone().apply(ViewEvent::SetFilter(CourtFilter::Clay));
        assert_eq!(ids(&clay.filtered_courts(&courts)), vec!["farm-forge"]);

        let hard = state.apply(ViewEvent::SetFilter(CourtFilter::Hard));
        assert_eq!(ids(&hard.filtered_courts(&courts)), vec!["316-tennis", "adams"]);
    }

    #[test]
    fn test_query_matches_name_and_address_case_insensitively() {
        let courts = get_courts();
        let state = ViewState::initial(&courts).apply(ViewEvent::SetQuery("  MURFREESBORO ".into()));

        // 316 Tennis sits on Murfreesboro Rd, Adams is in Murfreesboro.
        assert_eq!(ids(&state.filtered_courts(&courts)), vec!["316-tennis", "adams"]);

        let state = state.apply(ViewEvent::SetQuery("forge".into()));
        assert_eq!(ids(&state.filtered_courts(&courts)), vec!["farm-forge"]);
    }

    #[test]
    fn test_unknown_selection_falls_back_to_first_court() {
        let courts = get_courts();
        let state = ViewState::default().apply(ViewEvent::SelectCourt("gone".into()));

        assert_eq!(state.active_court(&courts).map(|c| c.id.as_str()), Some("316-tennis"));
        assert!(state.active_court(&[]).is_none());
    }
}
