//! HTTP client for the gateway's REST endpoints
//!
//! Implements the `GatewayApi` trait over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ServerConfig;
use crate::error::{ConsoleError, Result};

use super::types::{
    API_KEY_HEADER, Credentials, ExecuteRequest, ExecuteResponse, HealthResponse, LOCATION_ID_HEADER,
    ToolsResponse,
};

/// The three calls the console makes against the gateway
#[async_trait]
pub trait GatewayApi: Send + Sync {
    /// `GET /health`, with credential headers when given
    async fn health(&self, credentials: Option<&Credentials>) -> Result<HealthResponse>;

    /// `GET /tools`
    async fn list_tools(&self) -> Result<ToolsResponse>;

    /// `POST /execute-tool`
    async fn execute_tool(&self, request: &ExecuteRequest, credentials: &Credentials) -> Result<ExecuteResponse>;
}

/// reqwest-backed gateway client
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Create a client against `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConsoleError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_millis(config.timeout_ms))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_credentials(builder: RequestBuilder, credentials: Option<&Credentials>) -> RequestBuilder {
        let Some(creds) = credentials else {
            return builder;
        };
        let mut builder = builder;
        if let Some(key) = &creds.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        if let Some(loc) = &creds.location_id {
            builder = builder.header(LOCATION_ID_HEADER, loc);
        }
        builder
    }

    /// Send and decode; non-2xx becomes `ConsoleError::Server` with the body's message
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder, path: &str) -> Result<T> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(path, error = %e, "Gateway request failed");
            ConsoleError::Transport(e.to_string())
        })?;

        let status = response.status();
        tracing::debug!(path, status = status.as_u16(), "Gateway responded");

        if !status.is_success() {
            let message = Self::error_message(response).await;
            return Err(ConsoleError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body)
            .map_err(|e| ConsoleError::InvalidResponse(format!("Failed to parse {} response: {}", path, e)))
    }

    /// Pull `message` or `error` out of an error body, else the raw text
    async fn error_message(response: Response) -> String {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        let from_json = serde_json::from_str::<Value>(&text).ok().and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        });

        match from_json {
            Some(msg) => msg,
            None if !text.trim().is_empty() => text.trim().to_string(),
            None => status.canonical_reason().unwrap_or("Unknown error").to_string(),
        }
    }
}

#[async_trait]
impl GatewayApi for HttpGateway {
    async fn health(&self, credentials: Option<&Credentials>) -> Result<HealthResponse> {
        let builder = Self::with_credentials(self.client.get(self.url("/health")), credentials);
        self.send(builder, "/health").await
    }

    async fn list_tools(&self) -> Result<ToolsResponse> {
        self.send(self.client.get(self.url("/tools")), "/tools").await
    }

    async fn execute_tool(&self, request: &ExecuteRequest, credentials: &Credentials) -> Result<ExecuteResponse> {
        tracing::info!(tool = %request.tool_name, "Executing tool");
        let builder = self.client.post(self.url("/execute-tool")).json(request);
        let builder = Self::with_credentials(builder, Some(credentials));
        self.send(builder, "/execute-tool").await
    }
}

impl std::fmt::Debug for HttpGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGateway").field("base_url", &self.base_url).finish()
    }
}
