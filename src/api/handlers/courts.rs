use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use chrono::Local;
use std::sync::Arc;

use crate::api::models::{CourtListItem, CourtListResponse, CourtParams};
use crate::domain::hours::{availability_status, next_open_time};
use crate::state::{ViewEvent, ViewState};
use super::AppState;

pub async fn get_courts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CourtParams>,
) -> impl IntoResponse {
    let courts = state.planner.courts();
    let now = Local::now().naive_local();

    let mut view = ViewState::initial(courts);
    if let Some(filter) = params.filter {
        view = view.apply(ViewEvent::SetFilter(filter));
    }
    if let Some(query) = params.query {
        view = view.apply(ViewEvent::SetQuery(query));
    }
    if let Some(selected) = params.selected {
        view = view.apply(ViewEvent::SelectCourt(selected));
    }

    let active_id = view.active_court(courts).map(|c| c.id.clone());
    let items: Vec<CourtListItem> = view
        .filtered_courts(courts)
        .into_iter()
        .map(|court| CourtListItem {
            court: court.clone(),
            status: availability_status(court, now),
            next_open: next_open_time(court, now),
            selected: active_id.as_deref() == Some(court.id.as_str()),
        })
        .collect();

    Json(CourtListResponse {
        total: items.len(),
        items,
    })
}
