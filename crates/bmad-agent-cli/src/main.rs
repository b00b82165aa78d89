//! BMAD Agent CLI
//!
//! Operator tooling around the agent contract.
//!
//! ## Commands
//!
//! - `validate`: check that a context file carries the required fields
//! - `capabilities`: list capability tags
//! - `scopes`: list scope tags
//! - `config`: show the agent config resolved from the environment

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bmad_agent_contract::{AgentConfig, Capability, ExecutionContext, RequiredField, Scope};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "bmad-agent")]
#[command(author = "BMAD Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect BMAD agent contexts and contract tags", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an execution context JSON file
    Validate {
        /// Path to the context file
        context: PathBuf,
    },

    /// List capability tags
    Capabilities,

    /// List scope tags
    Scopes,

    /// Print the agent config resolved from BMAD_AGENT_* variables
    Config,
}

/// Output of `validate`.
#[derive(Debug, Serialize, PartialEq)]
struct ValidationReport {
    context: String,
    valid: bool,
    missing_field: Option<RequiredField>,
    languages_detected: usize,
    frameworks_detected: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    bmad_agent_contract::init_tracing(cli.json, level);

    match cli.command {
        Commands::Validate { context } => cmd_validate(&context),
        Commands::Capabilities => {
            print_tags(Capability::ALL.iter().map(Capability::as_str));
            Ok(())
        }
        Commands::Scopes => {
            print_tags(Scope::ALL.iter().map(Scope::as_str));
            Ok(())
        }
        Commands::Config => cmd_config(),
    }
}

fn cmd_validate(path: &Path) -> Result<()> {
    let report = validate_file(path)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(field) = report.missing_field {
        bail!("context {} is missing required field {}", path.display(), field);
    }
    Ok(())
}

fn validate_file(path: &Path) -> Result<ValidationReport> {
    let context = ExecutionContext::from_json_file(path)
        .with_context(|| format!("Failed to load context from {}", path.display()))?;
    debug!(path = %path.display(), "loaded execution context");

    let missing_field = context.missing_required_field();
    Ok(ValidationReport {
        context: path.display().to_string(),
        valid: missing_field.is_none(),
        missing_field,
        languages_detected: context.languages_detected.len(),
        frameworks_detected: context.frameworks_detected.len(),
    })
}

fn cmd_config() -> Result<()> {
    let config = AgentConfig::from_env().context("Invalid BMAD_AGENT_* environment")?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn print_tags<'a>(tags: impl Iterator<Item = &'a str>) {
    for tag in tags {
        println!("{tag}");
    }
}
