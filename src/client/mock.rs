//! In-memory gateway for tests and offline rendering

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::catalog::ToolDescriptor;
use crate::error::{ConsoleError, Result};

use super::gateway::GatewayApi;
use super::types::{Credentials, ExecuteRequest, ExecuteResponse, HealthResponse, ToolTotals, ToolsResponse};

/// Gateway that answers from canned data and counts calls
#[derive(Debug, Default)]
pub struct MockGateway {
    tools: Vec<ToolDescriptor>,
    unreachable: bool,
    execute_response: Option<ExecuteResponse>,
    calls: AtomicUsize,
    executed: Mutex<Vec<(ExecuteRequest, Credentials)>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve this tool listing
    pub fn with_tools(mut self, tools: Vec<ToolDescriptor>) -> Self {
        self.tools = tools;
        self
    }

    /// Fail every call with a transport error
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Answer `execute_tool` with this response
    pub fn with_execute_response(mut self, response: ExecuteResponse) -> Self {
        self.execute_response = Some(response);
        self
    }

    /// Number of calls made so far, across all endpoints
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received by `execute_tool`
    pub fn executed(&self) -> Vec<(ExecuteRequest, Credentials)> {
        self.executed.lock().map(|e| e.clone()).unwrap_or_default()
    }

    fn record(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable {
            Err(ConsoleError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl GatewayApi for MockGateway {
    async fn health(&self, _credentials: Option<&Credentials>) -> Result<HealthResponse> {
        self.record()?;
        Ok(HealthResponse {
            status: "healthy".to_string(),
            tools: Some(ToolTotals {
                total: self.tools.len() as u64,
            }),
            server: Some("mock-gateway".to_string()),
            ..Default::default()
        })
    }

    async fn list_tools(&self) -> Result<ToolsResponse> {
        self.record()?;
        Ok(ToolsResponse {
            tools: self.tools.clone(),
            user_specific: None,
        })
    }

    async fn execute_tool(&self, request: &ExecuteRequest, credentials: &Credentials) -> Result<ExecuteResponse> {
        self.record()?;
        if let Ok(mut executed) = self.executed.lock() {
            executed.push((request.clone(), credentials.clone()));
        }
        Ok(self.execute_response.clone().unwrap_or_else(|| ExecuteResponse {
            success: true,
            result: Some(request.args.clone()),
            tool_name: Some(request.tool_name.clone()),
            ..Default::default()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_counts_calls() {
        let mock = MockGateway::new().with_tools(vec![ToolDescriptor::new("get_contact", "")]);
        assert_eq!(mock.call_count(), 0);

        let health = mock.health(None).await.unwrap();
        assert_eq!(health.tool_total(), 1);
        let tools = mock.list_tools().await.unwrap();
        assert_eq!(tools.tools.len(), 1);

        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_unreachable() {
        let mock = MockGateway::new().unreachable();
        assert!(matches!(mock.list_tools().await, Err(ConsoleError::Transport(_))));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_echoes_args() {
        let mock = MockGateway::new();
        let creds = Credentials::new("k", "l");
        let resp = mock
            .execute_tool(&ExecuteRequest::new("send_sms", json!({ "message": "hi" })), &creds)
            .await
            .unwrap();

        assert!(resp.success);
        assert_eq!(resp.result, Some(json!({ "message": "hi" })));
        assert_eq!(mock.executed().len(), 1);
        assert_eq!(mock.executed()[0].1, creds);
    }
}
