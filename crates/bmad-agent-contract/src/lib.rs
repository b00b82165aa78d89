//! BMAD Agent Contract
//!
//! Interface and shared data shapes for pluggable agents driven by an
//! external orchestrator:
//!
//! - [`Capability`] / [`Scope`]: classification tags
//! - [`ExecutionContext`]: environment snapshot passed into every operation
//! - [`ExecutionResult`]: outcome of one operation
//! - [`Agent`]: the `analyze → plan → execute` contract with default helpers
//! - [`AgentCore`]: identity, logger, history and context every agent embeds

pub mod agent;
pub mod capability;
pub mod config;
pub mod context;
pub mod error;
pub mod history;
pub mod logger;
pub mod result;
pub mod telemetry;

pub use agent::{
    Agent, AgentCore, AgentState, BoxedAgent, DEFAULT_SUPPORTED_LANGUAGES,
    DEFAULT_TASK_CONFIDENCE,
};
pub use capability::{Capability, Scope};
pub use config::AgentConfig;
pub use context::{ExecutionContext, RequiredField};
pub use error::{ContractError, Result};
pub use history::ExecutionHistory;
pub use logger::{AgentLogger, DEFAULT_LOGGER_PREFIX};
pub use result::{ExecutionResult, Finding};
pub use telemetry::init_tracing;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
