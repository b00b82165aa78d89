//! Error taxonomy for the agent contract.
//!
//! Business-logic failures never surface here: an agent reports those through
//! [`ExecutionResult::success`](crate::ExecutionResult::success) and
//! `error_details`. These errors cover loading, parsing and configuration.

/// Errors produced by the agent contract library.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("missing required context field: {field}")]
    MissingContextField { field: String },

    #[error("unknown capability: {0}")]
    UnknownCapability(String),

    #[error("unknown scope: {0}")]
    UnknownScope(String),

    #[error("invalid config value for {key}: {value}")]
    InvalidConfig { key: String, value: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for agent contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
