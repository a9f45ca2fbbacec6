//! ClickUp API gateway.
//!
//! The two idempotent read operations the dashboard needs. Neither
//! mutates remote state; any non-2xx response, transport error, or
//! malformed payload is surfaced as one uniform failure per operation.

use crate::data::{Task, Workspace};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Shared HTTP client for all API requests to enable connection pooling
pub static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(5)
        .build()
        .expect("Failed to create HTTP client")
});

/// The two failure kinds the dashboard distinguishes.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Workspace listing failed: rejected token, transport error, or
    /// malformed payload, all treated the same.
    #[error("Invalid token or API error: {0}")]
    Auth(String),
    /// Task listing failed for an already-authenticated session.
    #[error("Error fetching tasks: {0}")]
    Fetch(String),
}

#[derive(Debug, Deserialize)]
struct TeamsResponse {
    #[serde(default)]
    teams: Vec<Workspace>,
}

#[derive(Debug, Deserialize)]
struct TasksResponse {
    #[serde(default)]
    tasks: Vec<Task>,
}

/// List workspaces visible to the token's principal.
///
/// ClickUp expects the raw token in the `Authorization` header, without a
/// `Bearer ` prefix.
pub async fn list_workspaces(base_url: &str, token: &str) -> Result<Vec<Workspace>, GatewayError> {
    let url = format!("{}/team", base_url.trim_end_matches('/'));

    let response = HTTP_CLIENT
        .get(&url)
        .header("Authorization", token)
        .send()
        .await
        .map_err(|e| GatewayError::Auth(e.to_string()))?;

    if !response.status().is_success() {
        return Err(GatewayError::Auth(format!("HTTP {}", response.status())));
    }

    let body: TeamsResponse = response
        .json()
        .await
        .map_err(|e| GatewayError::Auth(e.to_string()))?;

    Ok(body.teams)
}

/// List tasks for a workspace. An empty workspace id is a no-op.
pub async fn list_tasks(
    base_url: &str,
    token: &str,
    workspace_id: &str,
) -> Result<Vec<Task>, GatewayError> {
    if workspace_id.is_empty() {
        return Ok(Vec::new());
    }

    let url = format!(
        "{}/team/{}/task",
        base_url.trim_end_matches('/'),
        urlencoding::encode(workspace_id)
    );

    let response = HTTP_CLIENT
        .get(&url)
        .header("Authorization", token)
        .send()
        .await
        .map_err(|e| GatewayError::Fetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(GatewayError::Fetch(format!("HTTP {}", response.status())));
    }

    let body: TasksResponse = response
        .json()
        .await
        .map_err(|e| GatewayError::Fetch(e.to_string()))?;

    Ok(body.tasks)
}
