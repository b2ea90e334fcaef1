use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use log::info;

use crate::config::settings::AppConfig;
use crate::config::{find_court, get_courts};
use crate::domain::{Court, PlayerId, Session, Weather};
use crate::errors::PlannerError;
use crate::fairness::{self, FairnessSummary};
use crate::recommendation::{self, Recommendation};
use crate::scheduling::{self, Suggestion};
use crate::state::{ViewEvent, ViewState};
use crate::storage::{StateStore, StoredState};

/// Ties the court catalog, the stored history and the scoring together
pub struct PlanningService {
    config: AppConfig,
    courts: Vec<Court>,
    store: StateStore,
}

impl PlanningService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let store = StateStore::new(storage_dir())?;
        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: AppConfig, store: StateStore) -> Self {
        Self {
            config,
            courts: get_courts(),
            store,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn courts(&self) -> &[Court] {
        &self.courts
    }

    pub fn sessions(&self) -> Result<Vec<Session>> {
        Ok(self.load()?.sessions)
    }

    pub fn fairness(&self) -> Result<FairnessSummary> {
        let state = self.load()?;
        Ok(fairness::fairness_summary(&state.sessions))
    }

    pub fn recommend(&self, weather: Option<&Weather>) -> Result<Recommendation> {
        let state = self.load()?;
        info!(
            "Scoring {} courts against {} logged sessions (forecast: {})",
            self.courts.len(),
            state.sessions.len(),
            if weather.is_some() { "yes" } else { "none" }
        );

        let recommendation = recommendation::recommend_court(
            &self.courts,
            &state.sessions,
            weather,
            &self.config.scoring,
        )?;
        Ok(recommendation)
    }

    pub fn suggestions(&self, weather: Option<&Weather>) -> Result<Vec<Suggestion>> {
        let roster = self.load()?.roster();
        let find = |id: PlayerId| {
            roster
                .iter()
                .find(|p| p.id == id)
                .ok_or_else(|| anyhow!("{} is missing from the roster", id))
        };
        let first = find(PlayerId::Andrey)?;
        let second = find(PlayerId::Lucas)?;

        Ok(scheduling::build_suggestions(
            first,
            second,
            &self.courts,
            weather,
            &self.config.scheduling,
        ))
    }

    /// Record a session at `court_id`, taking drive minutes from the catalog
    pub fn log_session(&self, court_id: &str, date: NaiveDate) -> Result<Session> {
        let court = find_court(&self.courts, court_id)
            .ok_or_else(|| PlannerError::UnknownCourt(court_id.to_string()))?;
        let session = Session::at_court(court, date);

        self.store.append_session(session.clone())?;
        Ok(session)
    }

    /// Apply view events on top of the saved view and persist the result
    pub fn update_view(&self, events: Vec<ViewEvent>) -> Result<ViewState> {
        let courts = &self.courts;
        let state = self.store.update_state(|state| {
            let start = if state.view.active_court_id.is_none() {
                ViewState::initial(courts)
            } else {
                std::mem::take(&mut state.view)
            };
            state.view = events.into_iter().fold(start, ViewState::apply);
        })?;
        Ok(state.view)
    }

    fn load(&self) -> Result<StoredState> {
        Ok(self.store.load_state()?.unwrap_or_default())
    }
}

pub fn storage_dir() -> String {
    std::env::var("STORAGE_DIR").unwrap_or_else(|_| "data".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CourtFilter;

    fn service(name: &str) -> PlanningService {
        let dir = std::env::temp_dir().join(format!("court_picker_planning_{}_{}", name, std::process::id()));
        let store = StateStore::new(&dir).unwrap();
        store.clear().unwrap();
        PlanningService::with_store(AppConfig::new(), store)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_logged_sessions_feed_the_recommendation() {
        let service = service("feed");

        let before = service.recommend(None).unwrap();
        assert_eq!(before.court.id, "316-tennis");

        service.log_session("316-tennis", date("2024-01-01")).unwrap();
        let after = service.recommend(None).unwrap();
        assert_eq!(after.court.id, "adams");

        let summary = service.fairness().unwrap();
        assert_eq!(summary.totals.andrey, 8);
        assert_eq!(summary.totals.lucas, 25);
    }

    #[test]
    fn test_unknown_court_is_rejected() {
        let service = service("unknown");
        let err = service.log_session("nowhere", date("2024-01-01")).unwrap_err();

        assert_eq!(
            err.downcast_ref::<PlannerError>(),
            Some(&PlannerError::UnknownCourt("nowhere".into()))
        );
        assert!(service.sessions().unwrap().is_empty());
    }

    #[test]
    fn test_view_survives_between_calls() {
        let service = service("view");

        let view = service
            .update_view(vec![ViewEvent::SetFilter(CourtFilter::Clay)])
            .unwrap();
        assert_eq!(view.active_court_id.as_deref(), Some("316-tennis"));

        let view = service
            .update_view(vec![ViewEvent::SetQuery("Franklin".into())])
            .unwrap();
        assert_eq!(view.filter, CourtFilter::Clay);
        assert_eq!(view.query, "franklin");
    }

    #[test]
    fn test_suggestions_use_default_roster() {
        let service = service("suggest");
        let suggestions = service.suggestions(None).unwrap();

        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions[0].court_id, "316-tennis");
    }
}
