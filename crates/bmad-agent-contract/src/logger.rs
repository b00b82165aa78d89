//! Named logger handle injected into each agent.
//!
//! An [`AgentLogger`] is a name, not a pre-built span. Each call to
//! [`AgentLogger::in_scope`] opens a fresh `agent{logger=...}` span under
//! whatever span is current at that moment. A long-lived agent therefore
//! logs under the caller of each operation rather than under whoever
//! constructed it, and an agent built before a subscriber is installed
//! (e.g. before [`init_tracing`](crate::telemetry::init_tracing)) still
//! tags later events with its logger name.

/// Prefix used when no logger is injected: `bmad.agent.<agent_id>`.
pub const DEFAULT_LOGGER_PREFIX: &str = "bmad.agent";

/// Logger handle carried by [`AgentCore`](crate::AgentCore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentLogger {
    name: String,
}

impl AgentLogger {
    /// Logger with an explicit name.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Deterministic logger name derived from the agent identity.
    ///
    /// ```
    /// use bmad_agent_contract::AgentLogger;
    ///
    /// let logger = AgentLogger::for_agent("bmad.agent", "analyst");
    /// assert_eq!(logger.name(), "bmad.agent.analyst");
    /// ```
    pub fn for_agent(prefix: &str, agent_id: &str) -> Self {
        Self::named(format!("{prefix}.{agent_id}"))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run `f` inside an `agent` span tagged with this logger's name.
    pub fn in_scope<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        tracing::info_span!("agent", logger = %self.name).in_scope(f)
    }
}
