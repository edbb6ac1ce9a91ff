//! ghl-console - a terminal console for a GoHighLevel MCP gateway
//!
//! Fetches the gateway's tool listing, groups it into a fixed set of
//! categories, and renders the result. Also covers health checks,
//! manual tool execution with credentials, and built-in documentation.

pub mod catalog;
pub mod client;
pub mod config;
pub mod docs;
pub mod error;
mod lenient;
pub mod probe;
pub mod state;
pub mod view;

pub use error::{ConsoleError, Result};
