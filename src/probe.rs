//! Manual credential and tool testing
//!
//! Input problems (missing credentials, no tool name, bad JSON arguments)
//! are reported before any request is sent. Every path ends in a
//! `ProbeOutcome`; nothing here returns an error.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::client::{Credentials, ExecuteRequest, GatewayApi};
use crate::error::{ConsoleError, Result};

/// Kind of status line shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Error,
    Loading,
}

/// Message plus optional payload, shown inline after a probe
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    pub kind: OutcomeKind,
    pub message: String,
    /// Result payload; only rendered for successes
    pub data: Option<Value>,
    /// Gateway-reported execution time
    pub executed_at: Option<DateTime<Utc>>,
}

impl ProbeOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Success,
            message: message.into(),
            data: None,
            executed_at: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Error,
            message: message.into(),
            data: None,
            executed_at: None,
        }
    }

    pub fn loading(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Loading,
            message: message.into(),
            data: None,
            executed_at: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }
}

/// Parse tool arguments. Blank input means `{}`.
pub fn parse_args(raw: &str) -> Result<Value> {
    if raw.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(raw).map_err(|_| ConsoleError::InvalidInput("Invalid JSON in tool arguments".to_string()))
}

/// Check the credentials against `/health`
pub async fn test_connection<G: GatewayApi + ?Sized>(gateway: &G, credentials: &Credentials) -> ProbeOutcome {
    if !credentials.is_complete() {
        return ProbeOutcome::error("Please enter both API Key and Location ID");
    }

    match gateway.health(Some(credentials)).await {
        Ok(health) if health.is_healthy() => ProbeOutcome::success(format!(
            "Connection successful! Server is healthy with {} tools available.",
            health.tool_total()
        )),
        Ok(health) => ProbeOutcome::error(format!(
            "Connection failed: {}",
            health.message.as_deref().unwrap_or("Unknown error")
        )),
        Err(e) => ProbeOutcome::error(format!("Connection failed: {}", e.user_message())),
    }
}

/// Validate a manual tool run without touching the network
pub fn prepare_tool(
    credentials: &Credentials,
    tool_name: &str,
    raw_args: &str,
) -> std::result::Result<ExecuteRequest, ProbeOutcome> {
    if !credentials.is_complete() {
        return Err(ProbeOutcome::error("Please enter your credentials first"));
    }

    let tool_name = tool_name.trim();
    if tool_name.is_empty() {
        return Err(ProbeOutcome::error("Please select a tool to test"));
    }

    let args = parse_args(raw_args).map_err(|e| ProbeOutcome::error(e.user_message()))?;
    Ok(ExecuteRequest::new(tool_name, args))
}

/// Send a prepared request and report the result
pub async fn run_tool<G: GatewayApi + ?Sized>(
    gateway: &G,
    credentials: &Credentials,
    request: &ExecuteRequest,
) -> ProbeOutcome {
    log::info!("Executing {}...", request.tool_name);

    match gateway.execute_tool(request, credentials).await {
        Ok(response) if response.success => {
            let mut outcome = ProbeOutcome::success("Tool executed successfully!");
            outcome.executed_at = response.executed_at_time();
            match response.result {
                Some(result) => outcome.with_data(result),
                None => outcome,
            }
        }
        Ok(response) => ProbeOutcome::error(format!("Tool execution failed: {}", response.failure_message())),
        Err(e) => ProbeOutcome::error(format!("Tool execution failed: {}", e.user_message())),
    }
}

/// Execute one tool with raw JSON arguments
pub async fn test_tool<G: GatewayApi + ?Sized>(
    gateway: &G,
    credentials: &Credentials,
    tool_name: &str,
    raw_args: &str,
) -> ProbeOutcome {
    match prepare_tool(credentials, tool_name, raw_args) {
        Ok(request) => run_tool(gateway, credentials, &request).await,
        Err(outcome) => outcome,
    }
}
