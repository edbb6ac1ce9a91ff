//! Error types for ghl-console
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur while talking to the gateway
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Request never produced a response (connect failure, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Gateway answered with a non-success HTTP status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Gateway answered but the body could not be understood
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// User input rejected before any request was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// API key or location id missing
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(String),
}

impl ConsoleError {
    /// Message suitable for an inline status line, without the variant prefix
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::Transport(msg)
            | ConsoleError::InvalidResponse(msg)
            | ConsoleError::InvalidInput(msg)
            | ConsoleError::MissingCredentials(msg)
            | ConsoleError::Config(msg) => msg.clone(),
            ConsoleError::Server { message, .. } => message.clone(),
        }
    }
}

impl From<reqwest::Error> for ConsoleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ConsoleError::InvalidResponse(err.to_string())
        } else {
            ConsoleError::Transport(err.to_string())
        }
    }
}

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;
