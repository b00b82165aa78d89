//! Execution context handed to every agent operation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ContractError, Result};

/// Fields an agent needs before it can do anything useful with a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    ProjectPath,
    ProjectType,
    CurrentTask,
}

impl RequiredField {
    /// Checked in this order; validation reports the first one missing.
    pub const ALL: [RequiredField; 3] = [
        RequiredField::ProjectPath,
        RequiredField::ProjectType,
        RequiredField::CurrentTask,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::ProjectPath => "project_path",
            RequiredField::ProjectType => "project_type",
            RequiredField::CurrentTask => "current_task",
        }
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the environment an agent runs in.
///
/// Treated as immutable once handed to an agent. The three required fields
/// are optional at the type level: a context can be built or deserialized
/// without them, and [`validate_context`](crate::Agent::validate_context)
/// decides whether it is usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionContext {
    pub project_path: Option<String>,
    pub project_type: Option<String>,
    pub languages_detected: Vec<String>,
    pub frameworks_detected: Vec<String>,
    pub current_task: Option<String>,
    pub safety_constraints: Vec<String>,
    pub execution_phase: String,
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl ExecutionContext {
    /// Context with all three required fields present and everything else empty.
    pub fn new(
        project_path: impl Into<String>,
        project_type: impl Into<String>,
        current_task: impl Into<String>,
    ) -> Self {
        Self {
            project_path: Some(project_path.into()),
            project_type: Some(project_type.into()),
            current_task: Some(current_task.into()),
            ..Self::default()
        }
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages_detected = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_frameworks<I, S>(mut self, frameworks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.frameworks_detected = frameworks.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_safety_constraints<I, S>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.safety_constraints = constraints.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.execution_phase = phase.into();
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// First required field that is absent, if any.
    pub fn missing_required_field(&self) -> Option<RequiredField> {
        RequiredField::ALL.into_iter().find(|field| {
            let value = match field {
                RequiredField::ProjectPath => &self.project_path,
                RequiredField::ProjectType => &self.project_type,
                RequiredField::CurrentTask => &self.current_task,
            };
            value.is_none()
        })
    }

    /// Like [`missing_required_field`](Self::missing_required_field), but as a `Result`.
    pub fn require_fields(&self) -> Result<()> {
        match self.missing_required_field() {
            Some(field) => Err(ContractError::MissingContextField {
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_context_has_required_fields() {
        let ctx = ExecutionContext::new("/srv/app", "web", "add login");
        assert_eq!(ctx.missing_required_field(), None);
        assert!(ctx.require_fields().is_ok());
        assert!(ctx.languages_detected.is_empty());
        assert!(ctx.metadata.is_empty());
    }

    #[test]
    fn test_missing_field_reports_first_in_order() {
        let ctx = ExecutionContext {
            project_type: None,
            current_task: None,
            ..ExecutionContext::new("/srv/app", "web", "task")
        };
        assert_eq!(ctx.missing_required_field(), Some(RequiredField::ProjectType));

        let empty = ExecutionContext::default();
        assert_eq!(empty.missing_required_field(), Some(RequiredField::ProjectPath));
    }

    #[test]
    fn test_require_fields_error_names_field() {
        let ctx = ExecutionContext {
            current_task: None,
            ..ExecutionContext::new("/srv/app", "web", "task")
        };
        match ctx.require_fields() {
            Err(ContractError::MissingContextField { field }) => assert_eq!(field, "current_task"),
            other => panic!("Expected MissingContextField, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_strings_count_as_present() {
        let ctx = ExecutionContext::new("", "", "");
        assert_eq!(ctx.missing_required_field(), None);
    }

    #[test]
    fn test_builders_populate_collections() {
        let ctx = ExecutionContext::new("/srv/app", "library", "refactor")
            .with_languages(["rust", "python"])
            .with_frameworks(vec!["axum".to_string()])
            .with_safety_constraints(["no_network"])
            .with_phase("analysis")
            .with_metadata("ticket", json!(42));

        assert_eq!(ctx.languages_detected, vec!["rust", "python"]);
        assert_eq!(ctx.frameworks_detected, vec!["axum"]);
        assert_eq!(ctx.safety_constraints, vec!["no_network"]);
        assert_eq!(ctx.execution_phase, "analysis");
        assert_eq!(ctx.metadata.get("ticket"), Some(&json!(42)));
    }

    #[test]
    fn test_json_with_missing_keys_loads_with_defaults() {
        let ctx = ExecutionContext::from_json_str(
            r#"{"project_type": "cli", "current_task": "fix bug", "languages_detected": ["go"]}"#,
        )
        .unwrap();
        assert_eq!(ctx.project_path, None);
        assert_eq!(ctx.languages_detected, vec!["go"]);
        assert_eq!(ctx.execution_phase, "");
        assert_eq!(ctx.missing_required_field(), Some(RequiredField::ProjectPath));
    }

    #[test]
    fn test_json_null_is_treated_as_missing() {
        let ctx = ExecutionContext::from_json_str(
            r#"{"project_path": null, "project_type": "cli", "current_task": "x"}"#,
        )
        .unwrap();
        assert_eq!(ctx.missing_required_field(), Some(RequiredField::ProjectPath));
    }

    #[test]
    fn test_from_json_file_reads_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("context.json");
        let ctx = ExecutionContext::new("/srv/app", "web", "ship it").with_phase("execution");
        std::fs::write(&path, serde_json::to_string_pretty(&ctx).unwrap()).unwrap();

        let loaded = ExecutionContext::from_json_file(&path).unwrap();
        assert_eq!(loaded, ctx);
    }

    #[test]
    fn test_from_json_file_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ExecutionContext::from_json_file(dir.path().join("nope.json"));
        assert!(matches!(result, Err(ContractError::Io(_))));
    }
}
