//! HTML landing page.
//!
//! A human-facing status page for anyone who opens the service in a browser:
//! deployment details, current uptime, and a link to the health probe.
//! Rendering is a pure function of the config and an uptime reading, so the
//! markup can be tested without spinning up a server.

use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::{config::Config, state::AppState};

/// Name shown in the deployment-details block.
const DEPLOYMENT_NAME: &str = "fargate-web";

/// One-line description of what is running in the container.
const SERVICE_DESCRIPTION: &str = "Rust application on ECS Fargate";

/// Stylesheet for the landing page, inlined so the service stays a single
/// route with no static-asset handling.
const PAGE_STYLE: &str = "
    body {
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        margin: 0;
        padding: 0;
        display: flex;
        justify-content: center;
        align-items: center;
        min-height: 100vh;
        color: white;
    }
    .container {
        text-align: center;
        background: rgba(255, 255, 255, 0.1);
        padding: 40px;
        border-radius: 20px;
        box-shadow: 0 8px 32px 0 rgba(31, 38, 135, 0.37);
        backdrop-filter: blur(4px);
        border: 1px solid rgba(255, 255, 255, 0.18);
        max-width: 600px;
    }
    h1 {
        margin-bottom: 20px;
        font-size: 2.5em;
    }
    .info {
        background: rgba(255, 255, 255, 0.2);
        padding: 20px;
        border-radius: 10px;
        margin: 20px 0;
    }
    .status {
        display: inline-block;
        background: #4CAF50;
        padding: 10px 20px;
        border-radius: 25px;
        margin: 10px;
        font-weight: bold;
    }
    .details {
        text-align: left;
        margin-top: 20px;
    }
    .details p {
        margin: 10px 0;
    }
    .footer {
        margin-top: 30px;
        font-size: 0.9em;
        opacity: 0.8;
    }
";

/// `GET /` — render the landing page with the current uptime.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&state.config, state.uptime().as_secs()))
}

/// Render the full HTML document for the landing page.
///
/// `uptime_secs` is already floored to whole seconds; the page shows uptime
/// at second granularity.
pub fn render_page(config: &Config, uptime_secs: u64) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AWS Fargate Deployment</title>
    <style>{style}</style>
</head>
<body>
    <div class="container">
        <h1>AWS ECS Fargate</h1>
        <div class="status">Application Running Successfully</div>
        <div class="info">
            <h2>Deployment Information</h2>
            <div class="details">
                <p><strong>Deployment:</strong> {name}</p>
                <p><strong>Service:</strong> {service}</p>
                <p><strong>Port:</strong> {port}</p>
                <p><strong>Environment:</strong> {environment}</p>
                <p><strong>Uptime:</strong> {uptime} seconds</p>
                <p><strong>Health Check:</strong> <a href="/health" style="color: #FFD700;">/health</a></p>
            </div>
        </div>
        <p class="footer">Powered by AWS ECS Fargate | Terraform | GitHub Actions</p>
    </div>
</body>
</html>"#,
        style = PAGE_STYLE,
        name = DEPLOYMENT_NAME,
        service = SERVICE_DESCRIPTION,
        port = config.port,
        environment = config.page_environment(),
        uptime = uptime_secs,
    )
}
