//! Outcome record for a single agent operation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::capability::Capability;

/// One structured finding: a JSON object keyed by field name.
pub type Finding = serde_json::Map<String, serde_json::Value>;

/// Result of one `analyze`, `plan` or `execute` call.
///
/// The record does not tie `success` to `error_details`. Agents should build
/// results with [`ExecutionResult::succeeded`] or [`ExecutionResult::failed`],
/// which keep the two consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub success: bool,
    pub agent_id: String,
    pub capability: Capability,
    /// Wall-clock seconds.
    pub execution_time: f64,
    /// Expected in `0.0..=1.0`; not enforced.
    pub confidence_score: f64,
    pub findings: Vec<Finding>,
    pub recommendations: Vec<String>,
    pub artifacts_created: Vec<String>,
    pub next_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
    #[serde(default)]
    pub requires_human_review: bool,
}

impl ExecutionResult {
    /// Successful result with no findings yet.
    pub fn succeeded(agent_id: impl Into<String>, capability: Capability, confidence: f64) -> Self {
        Self {
            success: true,
            agent_id: agent_id.into(),
            capability,
            execution_time: 0.0,
            confidence_score: confidence,
            findings: Vec::new(),
            recommendations: Vec::new(),
            artifacts_created: Vec::new(),
            next_steps: Vec::new(),
            error_details: None,
            requires_human_review: false,
        }
    }

    /// Failed result carrying `error`; confidence is zero.
    pub fn failed(
        agent_id: impl Into<String>,
        capability: Capability,
        error: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            confidence_score: 0.0,
            error_details: Some(error.into()),
            ..Self::succeeded(agent_id, capability, 0.0)
        }
    }

    pub fn with_execution_time(mut self, elapsed: Duration) -> Self {
        self.execution_time = elapsed.as_secs_f64();
        self
    }

    /// Append a finding built from `(field, value)` pairs.
    pub fn with_finding<I, K>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, serde_json::Value)>,
        K: Into<String>,
    {
        self.findings
            .push(fields.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendations.push(recommendation.into());
        self
    }

    pub fn with_artifact(mut self, path: impl Into<String>) -> Self {
        self.artifacts_created.push(path.into());
        self
    }

    pub fn with_next_step(mut self, step: impl Into<String>) -> Self {
        self.next_steps.push(step.into());
        self
    }

    pub fn requiring_human_review(mut self) -> Self {
        self.requires_human_review = true;
        self
    }
}
