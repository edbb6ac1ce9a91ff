//! Application state for one console session
//!
//! State is an explicit value. Fetch handlers consume the current state and
//! return the updated one; render functions only read it.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::catalog::{CategorizedCatalog, ToolDescriptor, find_tool};
use crate::client::{Credentials, GatewayApi, HealthResponse};
use crate::error::ConsoleError;

/// Top-level section being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Onboarding,
    Tools,
    Docs,
    Testing,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Onboarding => "onboarding",
            Section::Tools => "tools",
            Section::Docs => "docs",
            Section::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Last known gateway health
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ServerStatus {
    /// Not checked yet
    #[default]
    Unknown,
    Online { tool_total: u64 },
    Offline { message: String },
}

impl ServerStatus {
    pub fn from_health(health: &HealthResponse) -> Self {
        if health.is_healthy() {
            ServerStatus::Online {
                tool_total: health.tool_total(),
            }
        } else {
            ServerStatus::Offline {
                message: health.message.clone().unwrap_or_else(|| "Unknown error".to_string()),
            }
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, ServerStatus::Online { .. })
    }
}

/// Everything the console knows during one run
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub section: Section,
    pub server_status: ServerStatus,
    pub tools: Vec<ToolDescriptor>,
    /// When `tools` was last replaced
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }

    /// Check status then load tools
    pub async fn initialize<G: GatewayApi + ?Sized>(gateway: &G, credentials: Option<&Credentials>) -> Self {
        Self::new()
            .check_server_status(gateway, credentials)
            .await
            .load_tools(gateway)
            .await
    }

    /// Refresh `server_status`. Failures become `Offline`; an error status keeps the gateway's message.
    pub async fn check_server_status<G: GatewayApi + ?Sized>(
        mut self,
        gateway: &G,
        credentials: Option<&Credentials>,
    ) -> Self {
        self.server_status = match gateway.health(credentials).await {
            Ok(health) => ServerStatus::from_health(&health),
            Err(e @ ConsoleError::Server { .. }) => {
                log::error!("Gateway reported unhealthy: {}", e);
                ServerStatus::Offline {
                    message: e.user_message(),
                }
            }
            Err(e) => {
                log::error!("Failed to check server status: {}", e);
                ServerStatus::Offline {
                    message: "Server unreachable".to_string(),
                }
            }
        };
        self
    }

    /// Replace the tool list. Failures leave an empty list.
    pub async fn load_tools<G: GatewayApi + ?Sized>(mut self, gateway: &G) -> Self {
        self.tools = match gateway.list_tools().await {
            Ok(response) => response.tools,
            Err(e) => {
                log::error!("Failed to load tools: {}", e);
                Vec::new()
            }
        };
        self.refreshed_at = Some(Utc::now());
        self
    }

    pub fn catalog(&self) -> CategorizedCatalog {
        CategorizedCatalog::build(&self.tools)
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    pub fn find_tool(&self, name: &str) -> Option<&ToolDescriptor> {
        find_tool(&self.tools, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::client::MockGateway;

    fn sample_tools() -> Vec<ToolDescriptor> {
        vec![
            ToolDescriptor::new("create_invoice", "Create invoice"),
            ToolDescriptor::new("get_contact", "Get contact"),
            ToolDescriptor::new("send_sms", "Send SMS"),
        ]
    }

    #[test]
    fn test_new_state_defaults() {
        let state = AppState::new();
        assert_eq!(state.section, Section::Onboarding);
        assert_eq!(state.server_status, ServerStatus::Unknown);
        assert!(state.tools.is_empty());
        assert!(state.refreshed_at.is_none());
    }

    #[test]
    fn test_status_from_health() {
        let healthy = HealthResponse {
            status: "healthy".to_string(),
            tools: Some(crate::client::ToolTotals { total: 12 }),
            ..Default::default()
        };
        assert_eq!(ServerStatus::from_health(&healthy), ServerStatus::Online { tool_total: 12 });

        let degraded = HealthResponse {
            status: "degraded".to_string(),
            ..Default::default()
        };
        let status = ServerStatus::from_health(&degraded);
        assert!(!status.is_online());
        assert_eq!(
            status,
            ServerStatus::Offline {
                message: "Unknown error".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_initialize_online() {
        let gateway = MockGateway::new().with_tools(sample_tools());
        let state = AppState::initialize(&gateway, None).await;

        assert!(state.server_status.is_online());
        assert_eq!(state.tool_count(), 3);
        assert!(state.refreshed_at.is_some());
        assert_eq!(
            state.catalog().categories(),
            vec![Category::ContactManagement, Category::Messaging, Category::Invoices]
        );
    }

    #[tokio::test]
    async fn test_initialize_unreachable_degrades() {
        let gateway = MockGateway::new().unreachable();
        let state = AppState::initialize(&gateway, None).await;

        assert_eq!(
            state.server_status,
            ServerStatus::Offline {
                message: "Server unreachable".to_string()
            }
        );
        assert!(state.tools.is_empty());
        assert!(state.catalog().is_empty());
    }

    #[tokio::test]
    async fn test_reload_overwrites_tools() {
        let first = MockGateway::new().with_tools(sample_tools());
        let second = MockGateway::new().with_tools(vec![ToolDescriptor::new("xyz_widget", "")]);

        let state = AppState::new().load_tools(&first).await;
        assert_eq!(state.tool_count(), 3);

        let state = state.load_tools(&second).await;
        assert_eq!(state.tool_count(), 1);
        assert!(state.find_tool("get_contact").is_none());
        assert!(state.find_tool("xyz_widget").is_some());
    }

    #[test]
    fn test_with_section() {
        let state = AppState::new().with_section(Section::Tools);
        assert_eq!(state.section, Section::Tools);
        assert_eq!(state.section.to_string(), "tools");

        assert_eq!(AppState::new().with_section(Section::Docs).section.to_string(), "docs");
        assert_eq!(AppState::new().with_section(Section::Testing).section.to_string(), "testing");
    }
}
