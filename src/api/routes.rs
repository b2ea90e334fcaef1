use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{
    courts::get_courts,
    planning::{get_fairness, get_recommendation, get_sessions, get_suggestions, get_weather, post_session},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/courts", get(get_courts))
        .route("/api/fairness", get(get_fairness))
        .route("/api/recommendation", get(get_recommendation))
        .route("/api/suggestions", get(get_suggestions))
        .route("/api/sessions", get(get_sessions).post(post_session))
        .route("/api/weather", get(get_weather))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::settings::{AppConfig, WeatherSettings};
    use crate::services::planning::PlanningService;
    use crate::storage::StateStore;
    use crate::weather::WeatherClient;

    fn app(name: &str) -> Router {
        let dir = std::env::temp_dir().join(format!("court_picker_api_{}_{}", name, std::process::id()));
        let store = StateStore::new(&dir).unwrap();
        store.clear().unwrap();

        let unreachable = WeatherSettings {
            base_url: "http://127.0.0.1:9",
            timeout_secs: 2,
            ..WeatherSettings::default()
        };
        let state = Arc::new(AppState {
            planner: PlanningService::with_store(AppConfig::new(), store),
            weather: WeatherClient::new(&unreachable, "Franklin,TN").unwrap(),
        });
        create_router(state)
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_session_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/sessions")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_courts_filter() {
        let response = app("courts")
            .oneshot(get_request("/api/courts?filter=indoor"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["items"][0]["court"]["id"], "316-tennis");
        assert_eq!(body["items"][0]["selected"], true);
    }

    #[tokio::test]
    async fn test_recommendation_without_forecast() {
        let response = app("recommend")
            .oneshot(get_request("/api/recommendation?offline=true"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["court"]["id"], "316-tennis");
        assert_eq!(body["ranked"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_weather_outage_is_not_an_error() {
        let response = app("weather").oneshot(get_request("/api/weather")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["weather"].is_null());
        assert_eq!(body["rainy"], false);
    }

    #[tokio::test]
    async fn test_logging_a_session_updates_fairness() {
        let app = app("log");

        let response = app
            .clone()
            .oneshot(post_session_request(r#"{"courtId":"adams","date":"2024-04-02"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app.oneshot(get_request("/api/fairness")).await.unwrap();
        let body = json_body(response).await;
        assert_eq!(body["totals"]["andrey"], 30);
        assert_eq!(body["totals"]["lucas"], 8);
        assert_eq!(body["lead"], "Andrey");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_session_posts_are_all_kept() {
        let app = app("concurrent");

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let app = app.clone();
                tokio::spawn(async move {
                    app.oneshot(post_session_request(r#"{"courtId":"316-tennis","date":"2024-04-02"}"#))
                        .await
                        .unwrap()
                        .status()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.await.unwrap(), StatusCode::CREATED);
        }

        let response = app.oneshot(get_request("/api/sessions")).await.unwrap();
        let body = json_body(response).await;
        assert_eq!(body.as_array().unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_unknown_court_is_not_found() {
        let response = app("unknown")
            .oneshot(post_session_request(r#"{"courtId":"nowhere"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
