use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Local;
use log::error;
use std::sync::Arc;

use crate::api::models::{ForecastParams, NewSession, WeatherResponse};
use crate::errors::PlannerError;
use super::AppState;

pub async fn get_fairness(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.with_planner(|planner| planner.fairness()).await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => internal_error("fairness", e),
    }
}

pub async fn get_recommendation(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ForecastParams>,
) -> impl IntoResponse {
    let weather = state.forecast(params.offline).await;

    let result = state
        .with_planner(move |planner| planner.recommend(weather.as_ref()))
        .await;

    match result {
        Ok(recommendation) => Json(recommendation).into_response(),
        Err(e) => match e.downcast_ref::<PlannerError>() {
            Some(PlannerError::EmptyCandidateSet) => {
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response()
            }
            _ => internal_error("recommendation", e),
        },
    }
}

pub async fn get_suggestions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ForecastParams>,
) -> impl IntoResponse {
    let weather = state.forecast(params.offline).await;

    let result = state
        .with_planner(move |planner| planner.suggestions(weather.as_ref()))
        .await;

    match result {
        Ok(suggestions) => Json(suggestions).into_response(),
        Err(e) => internal_error("suggestions", e),
    }
}

pub async fn get_sessions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.with_planner(|planner| planner.sessions()).await {
        Ok(sessions) => Json(sessions).into_response(),
        Err(e) => internal_error("sessions", e),
    }
}

pub async fn post_session(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewSession>,
) -> impl IntoResponse {
    let date = payload.date.unwrap_or_else(|| Local::now().date_naive());

    let result = state
        .with_planner(move |planner| planner.log_session(&payload.court_id, date))
        .await;

    match result {
        Ok(session) => (StatusCode::CREATED, Json(session)).into_response(),
        Err(e) => match e.downcast_ref::<PlannerError>() {
            Some(PlannerError::UnknownCourt(_)) => {
                (StatusCode::NOT_FOUND, e.to_string()).into_response()
            }
            _ => internal_error("session logging", e),
        },
    }
}

pub async fn get_weather(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let threshold = state.planner.config().scoring.rain_threshold;
    let weather = state.forecast(false).await;

    Json(WeatherResponse {
        rainy: weather.as_ref().is_some_and(|w| w.is_rainy(threshold)),
        advice: weather.as_ref().map(|w| w.advice(threshold)),
        weather,
    })
}

fn internal_error(what: &str, e: anyhow::Error) -> axum::response::Response {
    error!("Failed to build {}: {:?}", what, e);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to build {}", what)).into_response()
}
