//! Subscriber setup for binaries that host agents.
//!
//! Agents only emit events; nothing here runs unless a binary calls
//! [`init_tracing`]. `BMAD_AGENT_LOG` takes precedence over `RUST_LOG` so an
//! embedding application can tune agent verbosity without rewriting the
//! filter it already ships in `RUST_LOG`.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable checked before `RUST_LOG`.
pub const LOG_FILTER_ENV: &str = "BMAD_AGENT_LOG";

/// Filter directives by precedence: `BMAD_AGENT_LOG`, `RUST_LOG`, `level`.
/// Blank values are skipped.
pub fn filter_directives<F>(lookup: F, level: Level) -> String
where
    F: Fn(&str) -> Option<String>,
{
    [LOG_FILTER_ENV, EnvFilter::DEFAULT_ENV]
        .into_iter()
        .filter_map(|key| lookup(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| level.as_str().to_string())
}

/// Install the global subscriber.
///
/// Filter precedence: `BMAD_AGENT_LOG`, then `RUST_LOG`, then `level`.
/// With `json`, lines are newline-delimited JSON. Later calls are no-ops.
pub fn init_tracing(json: bool, level: Level) {
    let directives = filter_directives(|key| std::env::var(key).ok(), level);
    let env_filter =
        EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .ok();
    }
}
