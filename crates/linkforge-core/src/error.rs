//! Error types for LinkForge

use thiserror::Error;

/// Main error type for LinkForge core operations.
///
/// Contract violations (out-of-range word positions, mismatched connectors)
/// are not represented here; they panic at the call site.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkForgeError {
    /// Connector text could not be parsed.
    #[error("Invalid connector '{text}': {reason}")]
    InvalidConnector { text: String, reason: String },

    /// Label pattern text could not be parsed.
    #[error("Invalid label pattern '{text}': {reason}")]
    InvalidPattern { text: String, reason: String },

    /// Rule reference text could not be parsed.
    #[error("Invalid rule reference '{0}'")]
    InvalidRuleRef(String),
}

/// Result type alias for LinkForge core operations
pub type Result<T> = std::result::Result<T, LinkForgeError>;
