//! Wire types for the gateway's REST endpoints

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::ToolDescriptor;
use crate::error::{ConsoleError, Result};
use crate::lenient::{or_default, vec_skipping_invalid};

/// Header carrying the Private Integrations API key
pub const API_KEY_HEADER: &str = "x-ghl-api-key";

/// Header carrying the location id
pub const LOCATION_ID_HEADER: &str = "x-ghl-location-id";

/// `GET /health` response body. Malformed fields read as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    #[serde(default, deserialize_with = "or_default")]
    pub status: String,
    #[serde(default, deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolTotals>,
    #[serde(default, deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(default, deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub multi_user: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolTotals {
    #[serde(default, deserialize_with = "or_default")]
    pub total: u64,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }

    /// Reported tool total, zero when absent
    pub fn tool_total(&self) -> u64 {
        self.tools.as_ref().map(|t| t.total).unwrap_or(0)
    }
}

/// `GET /tools` response body. Entries without a usable name are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsResponse {
    #[serde(default, deserialize_with = "vec_skipping_invalid")]
    pub tools: Vec<ToolDescriptor>,
    #[serde(default, deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub user_specific: Option<bool>,
}

/// `POST /execute-tool` request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteRequest {
    pub tool_name: String,
    pub args: Value,
}

impl ExecuteRequest {
    pub fn new(tool_name: impl Into<String>, args: Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            args,
        }
    }
}

/// `POST /execute-tool` response body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResponse {
    #[serde(default, deserialize_with = "or_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    #[serde(default, deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub executed_at: Option<String>,
    #[serde(default, deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecuteResponse {
    /// Failure text: `message`, then `error`, then a placeholder
    pub fn failure_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }

    /// Parsed `executedAt`, if present and RFC 3339
    pub fn executed_at_time(&self) -> Option<DateTime<Utc>> {
        self.executed_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// API key and location id sent with credentialed requests
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub location_id: Option<String>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, location_id: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            location_id: Some(location_id.into()),
        }
    }

    /// Both values present and non-empty
    pub fn is_complete(&self) -> bool {
        self.require().is_ok()
    }

    /// Borrow both values, or fail naming what is missing
    pub fn require(&self) -> Result<(&str, &str)> {
        let api_key = non_blank(&self.api_key);
        let location_id = non_blank(&self.location_id);
        match (api_key, location_id) {
            (Some(key), Some(loc)) => Ok((key, loc)),
            (None, Some(_)) => Err(ConsoleError::MissingCredentials("API key".to_string())),
            (Some(_), None) => Err(ConsoleError::MissingCredentials("location id".to_string())),
            (None, None) => Err(ConsoleError::MissingCredentials(
                "API key and location id".to_string(),
            )),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// Keep the API key out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("location_id", &self.location_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_health_full_body() {
        let health: HealthResponse = serde_json::from_value(json!({
            "status": "healthy",
            "server": "ghl-mcp-server",
            "version": "1.0.0",
            "tools": { "total": 269 },
            "multiUser": true
        }))
        .unwrap();

        assert!(health.is_healthy());
        assert_eq!(health.tool_total(), 269);
        assert_eq!(health.multi_user, Some(true));
    }

    #[test]
    fn test_health_sparse_body() {
        let health: HealthResponse = serde_json::from_value(json!({ "message": "down" })).unwrap();
        assert!(!health.is_healthy());
        assert_eq!(health.tool_total(), 0);
        assert_eq!(health.message.as_deref(), Some("down"));
    }

    #[test]
    fn test_tools_response_missing_tools() {
        let tools: ToolsResponse = serde_json::from_value(json!({ "count": 0 })).unwrap();
        assert!(tools.tools.is_empty());
    }

    #[test]
    fn test_health_null_total_reads_zero() {
        let health: HealthResponse = serde_json::from_value(json!({
            "status": "healthy",
            "tools": { "total": null },
            "version": 2
        }))
        .unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.tool_total(), 0);
        assert!(health.version.is_none());
    }

    #[test]
    fn test_tools_response_keeps_usable_entries() {
        let tools: ToolsResponse = serde_json::from_value(json!({
            "tools": [
                { "name": "get_contact", "description": null },
                { "name": null, "description": "nameless" },
                { "name": "send_sms", "description": 7, "inputSchema": null }
            ],
            "count": "2"
        }))
        .unwrap();

        let names: Vec<&str> = tools.tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["get_contact", "send_sms"]);
        assert_eq!(tools.tools[0].description, "");
        assert_eq!(tools.tools[1].description, "");
    }

    #[test]
    fn test_execute_response_null_fields() {
        let resp: ExecuteResponse = serde_json::from_value(json!({
            "success": null,
            "error": { "code": 500 },
            "message": "Rate limited"
        }))
        .unwrap();
        assert!(!resp.success);
        assert!(resp.error.is_none());
        assert_eq!(resp.failure_message(), "Rate limited");
    }

    #[test]
    fn test_execute_request_camel_case() {
        let req = ExecuteRequest::new("search_contacts", json!({ "query": "John" }));
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, json!({ "toolName": "search_contacts", "args": { "query": "John" } }));
    }

    #[test]
    fn test_execute_response_success() {
        let resp: ExecuteResponse = serde_json::from_value(json!({
            "success": true,
            "result": { "contacts": [] },
            "toolName": "search_contacts",
            "executedAt": "2024-01-01T00:00:00.000Z"
        }))
        .unwrap();

        assert!(resp.success);
        assert_eq!(resp.tool_name.as_deref(), Some("search_contacts"));
        let at = resp.executed_at_time().unwrap();
        assert_eq!(at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_execute_response_failure_message_fallbacks() {
        let with_message = ExecuteResponse {
            message: Some("bad args".to_string()),
            error: Some("ignored".to_string()),
            ..Default::default()
        };
        assert_eq!(with_message.failure_message(), "bad args");

        let with_error = ExecuteResponse {
            error: Some("Tool not found".to_string()),
            ..Default::default()
        };
        assert_eq!(with_error.failure_message(), "Tool not found");

        assert_eq!(ExecuteResponse::default().failure_message(), "Unknown error");
    }

    #[test]
    fn test_executed_at_unparseable() {
        let resp = ExecuteResponse {
            executed_at: Some("yesterday".to_string()),
            ..Default::default()
        };
        assert!(resp.executed_at_time().is_none());
    }

    #[test]
    fn test_credentials_require() {
        let creds = Credentials::new("key", "loc");
        assert_eq!(creds.require().unwrap(), ("key", "loc"));
        assert!(creds.is_complete());

        let empty = Credentials {
            api_key: Some(String::new()),
            location_id: Some("loc".to_string()),
        };
        assert!(matches!(empty.require(), Err(ConsoleError::MissingCredentials(_))));

        // only empty values count as missing; the gateway judges the rest
        let spaces = Credentials {
            api_key: Some("   ".to_string()),
            location_id: Some("loc".to_string()),
        };
        assert!(spaces.is_complete());

        assert!(!Credentials::default().is_complete());
    }

    #[test]
    fn test_credentials_debug_redacts_key() {
        let creds = Credentials::new("secret-key", "loc-1");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("loc-1"));
    }
}
