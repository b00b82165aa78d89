//! Ensures every workspace crate inherits `version.workspace = true` and that
//! the compiled version matches the workspace manifest.

use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("crate lives two levels below the workspace root")
        .to_path_buf()
}

fn read_toml(path: &Path) -> toml::Value {
    let raw = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("read {}: {e}", path.display()));
    raw.parse()
        .unwrap_or_else(|e| panic!("parse {}: {e}", path.display()))
}

fn workspace_version() -> String {
    let doc = read_toml(&workspace_root().join("Cargo.toml"));
    doc["workspace"]["package"]["version"]
        .as_str()
        .unwrap()
        .to_string()
}

fn workspace_members() -> Vec<String> {
    let doc = read_toml(&workspace_root().join("Cargo.toml"));
    doc["workspace"]["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn all_members_inherit_workspace_version() {
    let root = workspace_root();
    let members = workspace_members();
    assert!(!members.is_empty());

    for member in members {
        let doc = read_toml(&root.join(&member).join("Cargo.toml"));
        let inherits = doc["package"]["version"]
            .as_table()
            .and_then(|t| t.get("workspace"))
            .and_then(toml::Value::as_bool);
        assert_eq!(
            inherits,
            Some(true),
            "{member} must use version.workspace = true"
        );
    }
}

#[test]
fn compiled_version_matches_workspace() {
    assert_eq!(bmad_agent_contract::VERSION, workspace_version());
}
