//! Health-check endpoint for container orchestration.
//!
//! Load balancers and orchestrators (ALB target groups, ECS, Kubernetes) poll
//! this to decide whether the task receives traffic. It has no dependencies
//! and never blocks, so a failing probe means the process itself is gone.

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::state::AppState;

/// JSON body returned by `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    /// Current wall-clock time, RFC 3339 UTC with millisecond precision.
    timestamp: String,
    /// Seconds since process start, fractional.
    uptime: f64,
    environment: String,
}

/// `GET /health` — liveness probe with basic runtime facts.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.uptime().as_secs_f64(),
        environment: state.config.health_environment().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt; // oneshot

    use crate::{config::Config, state::AppState};

    fn state_with_env(environment: Option<&str>) -> Arc<AppState> {
        let config = Config::from_vars(None, environment.map(String::from));
        Arc::new(AppState::new(config))
    }

    async fn fetch_health(state: Arc<AppState>) -> (StatusCode, serde_json::Value) {
        let app = crate::api::router(state);
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn returns_200_with_json_content_type() {
        let app = crate::api::router(state_with_env(None));
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("application/json"));
    }

    #[tokio::test]
    async fn reports_healthy_status_and_non_negative_uptime() {
        let (status, json) = fetch_health(state_with_env(None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert!(json["uptime"].as_f64().unwrap() >= 0.0);
    }

    #[tokio::test]
    async fn timestamp_is_valid_rfc3339_utc() {
        let (_, json) = fetch_health(state_with_env(None)).await;

        let ts = json["timestamp"].as_str().unwrap();
        assert!(ts.ends_with('Z'), "not UTC-suffixed: {ts}");
        chrono::DateTime::parse_from_rfc3339(ts).expect("timestamp should parse");
    }

    #[tokio::test]
    async fn environment_defaults_to_development_when_unset() {
        let (_, json) = fetch_health(state_with_env(None)).await;
        assert_eq!(json["environment"], "development");
    }

    #[tokio::test]
    async fn environment_reflects_configured_label() {
        let (_, json) = fetch_health(state_with_env(Some("test"))).await;
        assert_eq!(json["environment"], "test");
    }

    #[tokio::test]
    async fn uptime_never_decreases_across_requests() {
        let state = state_with_env(None);
        let (_, first) = fetch_health(Arc::clone(&state)).await;
        let (_, second) = fetch_health(state).await;

        assert!(second["uptime"].as_f64().unwrap() >= first["uptime"].as_f64().unwrap());
    }
}
