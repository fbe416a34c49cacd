//! Shared application state.
//!
//! Built once in `main` and handed to every handler as `Arc<AppState>`.
//! Nothing in here is mutated after startup, so handlers need no locking.

use std::time::{Duration, Instant};

use crate::config::Config;

/// Process-wide immutable state shared across all routes.
pub struct AppState {
    /// Configuration snapshot taken at startup.
    pub config: Config,
    /// Process start time — used to compute uptime for `/health` and the
    /// landing page. `Instant` is monotonic, so reported uptime never goes
    /// backwards even if the wall clock is adjusted.
    started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            started_at: Instant::now(),
        }
    }

    /// Time elapsed since the process started.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
