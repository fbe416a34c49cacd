//! HTTP surface — three fixed GET routes plus framework-default 404 handling.
//!
//! Handlers are intentionally thin: each one reads the immutable
//! [`AppState`](crate::state::AppState) and the clock, and writes a response.
//! No handler performs I/O or touches mutable state.

pub mod health;
pub mod info;
pub mod landing;
pub mod request_id;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Build the axum router with all routes.
///
/// Anything not registered here gets axum's default `404 Not Found`; a wrong
/// method on a registered path gets the default `405 Method Not Allowed`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(landing::index))
        .route("/health", get(health::health))
        .route("/api/info", get(info::info))
        .with_state(state)
}
