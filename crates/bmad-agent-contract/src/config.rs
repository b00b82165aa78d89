//! Agent configuration.
//!
//! Defaults are fixed; [`AgentConfig::from_env`] layers environment overrides
//! on top:
//!
//! - `BMAD_AGENT_HISTORY_LIMIT`: maximum retained history entries
//!   (unset or empty means unbounded)
//! - `BMAD_AGENT_LOGGER_PREFIX`: prefix for derived logger names

use serde::{Deserialize, Serialize};

use crate::error::{ContractError, Result};
use crate::logger::DEFAULT_LOGGER_PREFIX;

pub const HISTORY_LIMIT_ENV: &str = "BMAD_AGENT_HISTORY_LIMIT";
pub const LOGGER_PREFIX_ENV: &str = "BMAD_AGENT_LOGGER_PREFIX";

/// Settings applied when building an [`AgentCore`](crate::AgentCore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Maximum history entries kept per agent. `None` keeps everything.
    pub history_limit: Option<usize>,
    /// Prefix for logger names derived from the agent id.
    pub logger_prefix: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            history_limit: None,
            logger_prefix: DEFAULT_LOGGER_PREFIX.to_string(),
        }
    }
}

impl AgentConfig {
    /// Defaults overridden by process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(HISTORY_LIMIT_ENV) {
            let raw = raw.trim();
            if !raw.is_empty() {
                let limit = raw.parse::<usize>().map_err(|_| ContractError::InvalidConfig {
                    key: HISTORY_LIMIT_ENV.to_string(),
                    value: raw.to_string(),
                })?;
                config.history_limit = Some(limit);
            }
        }

        if let Some(prefix) = lookup(LOGGER_PREFIX_ENV) {
            let prefix = prefix.trim();
            if !prefix.is_empty() {
                config.logger_prefix = prefix.to_string();
            }
        }

        Ok(config)
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    pub fn with_logger_prefix(mut self, prefix: &str) -> Self {
        self.logger_prefix = prefix.to_string();
        self
    }
}
