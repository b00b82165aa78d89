//! Classification tags: what an agent does ([`Capability`]) and how broadly
//! it operates ([`Scope`]).
//!
//! Both sets are closed. Adding a tag means adding a variant here.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Kind of work an agent performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Analysis,
    Planning,
    Implementation,
    QualityAssurance,
    Documentation,
    Architecture,
    Devops,
    Security,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Capability; 8] = [
        Capability::Analysis,
        Capability::Planning,
        Capability::Implementation,
        Capability::QualityAssurance,
        Capability::Documentation,
        Capability::Architecture,
        Capability::Devops,
        Capability::Security,
    ];

    /// Wire tag, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Analysis => "analysis",
            Capability::Planning => "planning",
            Capability::Implementation => "implementation",
            Capability::QualityAssurance => "quality_assurance",
            Capability::Documentation => "documentation",
            Capability::Architecture => "architecture",
            Capability::Devops => "devops",
            Capability::Security => "security",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ContractError::UnknownCapability(s.to_string()))
    }
}

/// Breadth at which an agent is intended to operate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    ProjectWide,
    ModuleSpecific,
    FileSpecific,
    CrossProject,
}

impl Scope {
    pub const ALL: [Scope; 4] = [
        Scope::ProjectWide,
        Scope::ModuleSpecific,
        Scope::FileSpecific,
        Scope::CrossProject,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::ProjectWide => "project_wide",
            Scope::ModuleSpecific => "module_specific",
            Scope::FileSpecific => "file_specific",
            Scope::CrossProject => "cross_project",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::ALL
            .into_iter()
            .find(|sc| sc.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ContractError::UnknownScope(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_serde_uses_snake_case_tags() {
        let json = serde_json::to_string(&Capability::QualityAssurance).unwrap();
        assert_eq!(json, "\"quality_assurance\"");

        let parsed: Capability = serde_json::from_str("\"devops\"").unwrap();
        assert_eq!(parsed, Capability::Devops);
    }

    #[test]
    fn test_capability_display_matches_serde_tag() {
        for cap in Capability::ALL {
            let json = serde_json::to_string(&cap).unwrap();
            assert_eq!(json, format!("\"{cap}\""));
        }
    }

    #[test]
    fn test_capability_from_str_is_case_insensitive() {
        assert_eq!(
            "Quality_Assurance".parse::<Capability>().unwrap(),
            Capability::QualityAssurance
        );
        assert_eq!(" SECURITY ".parse::<Capability>().unwrap(), Capability::Security);
    }

    #[test]
    fn test_capability_from_str_rejects_unknown_tag() {
        match "telepathy".parse::<Capability>() {
            Err(ContractError::UnknownCapability(tag)) => assert_eq!(tag, "telepathy"),
            other => panic!("Expected UnknownCapability, got {:?}", other),
        }
    }

    #[test]
    fn test_scope_tags() {
        assert_eq!(Scope::ProjectWide.to_string(), "project_wide");
        assert_eq!(
            "cross_project".parse::<Scope>().unwrap(),
            Scope::CrossProject
        );
        assert_eq!(
            serde_json::to_string(&Scope::FileSpecific).unwrap(),
            "\"file_specific\""
        );
        assert!(matches!(
            "galaxy_wide".parse::<Scope>(),
            Err(ContractError::UnknownScope(_))
        ));
    }
}
