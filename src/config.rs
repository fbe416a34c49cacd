//! Runtime configuration for fargate-web.
//!
//! Everything is read once from the process environment at startup and is
//! immutable afterwards. There is no config file: container platforms inject
//! these values as environment variables on the task definition.
//!
//! Recognized variables:
//!
//! - `PORT` — TCP port to listen on. Anything that does not parse as a valid
//!   port falls back to [`DEFAULT_PORT`]; a misconfigured port should leave
//!   the container reachable rather than crash-looping.
//! - `NODE_ENV` — deployment-tier label ("development", "production", ...).
//!   Kept under its original name so existing task definitions keep working.

/// Port used when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 8080;

/// Immutable process configuration, built once in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the listener binds on; also reported on the landing page.
    pub port: u16,
    /// Deployment-tier label. `None` when `NODE_ENV` is unset or empty;
    /// the per-route accessors below apply the defaults.
    pub environment: Option<String>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var("PORT").ok(), std::env::var("NODE_ENV").ok())
    }

    /// Build a config from raw variable values.
    ///
    /// Split out from [`from_env`][Self::from_env] so the defaulting rules can
    /// be tested without mutating the process environment.
    pub fn from_vars(port: Option<String>, environment: Option<String>) -> Self {
        let port = port
            .as_deref()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        // An empty string counts as unset, matching how the deployment
        // tooling treats empty env vars.
        let environment = environment.filter(|v| !v.is_empty());

        Self { port, environment }
    }

    // The health endpoint and the landing page disagree on the default label
    // when NODE_ENV is unset. Existing probes and dashboards depend on what
    // each route reports today, so neither default is changed to match the
    // other. When the variable IS set, both routes reflect it verbatim.

    /// Environment label as reported by `GET /health`.
    pub fn health_environment(&self) -> &str {
        self.environment.as_deref().unwrap_or("development")
    }

    /// Environment label as shown on the landing page.
    pub fn page_environment(&self) -> &str {
        self.environment.as_deref().unwrap_or("production")
    }
}
