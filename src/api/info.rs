//! API descriptor endpoint.
//!
//! A fixed JSON document enumerating the service's routes, so clients can
//! discover the surface without out-of-band documentation. Every field is a
//! compile-time constant; the response never varies between requests.

use axum::Json;
use serde::Serialize;

/// JSON body returned by `GET /api/info`.
#[derive(Serialize)]
pub struct ApiInfo {
    message: &'static str,
    version: &'static str,
    endpoints: Endpoints,
}

#[derive(Serialize)]
struct Endpoints {
    health: &'static str,
    info: &'static str,
    root: &'static str,
}

/// `GET /api/info` — static service descriptor.
pub async fn info() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Welcome to AWS Fargate API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            health: "/health",
            info: "/api/info",
            root: "/",
        },
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt; // oneshot

    use crate::{config::Config, state::AppState};

    #[tokio::test]
    async fn returns_exact_descriptor_document() {
        let app = crate::api::router(Arc::new(AppState::new(Config::from_vars(None, None))));
        let req = Request::builder()
            .uri("/api/info")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({
                "message": "Welcome to AWS Fargate API",
                "version": "1.0.0",
                "endpoints": {
                    "health": "/health",
                    "info": "/api/info",
                    "root": "/"
                }
            })
        );
    }
}
