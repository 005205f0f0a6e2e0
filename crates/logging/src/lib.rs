#![warn(missing_docs)]

//! Shared logging helpers and CLI argument definitions for the winswap workspace.
//!
//! Binaries flatten [`LogArgs`] into their CLI, turn it into a filter spec with
//! [`compute_spec`], and install a subscriber with [`init`].

use std::{env, io};

use clap::Args;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, registry};

/// Logging controls for CLI apps.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Set global log level to trace (our crates only)
    #[arg(long, conflicts_with_all = ["debug", "log_level", "log_filter"])]
    pub trace: bool,

    /// Set global log level to debug (our crates only)
    #[arg(long, conflicts_with_all = ["trace", "log_level", "log_filter"])]
    pub debug: bool,

    /// Set a single global log level for our crates (error|warn|info|debug|trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Set an explicit tracing filter directive (overrides other flags)
    /// e.g. "winswap_core=trace,mac_winops=debug"
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl LogArgs {
    /// Filter spec for these flags, falling back to `RUST_LOG`.
    pub fn spec(&self) -> String {
        compute_spec(
            self.trace,
            self.debug,
            self.log_level.as_deref(),
            self.log_filter.as_deref(),
        )
    }
}

/// List of crate targets that constitute "our" logs.
pub fn our_crates() -> &'static [&'static str] {
    &[
        // App and core
        "winswap",
        "winswap_core",
        // macOS integration
        "mac_winops",
        "permissions",
        // Utilities
        "logging",
    ]
}

/// Build a filter directive string that sets the same `level` for all of our crates.
pub fn level_spec_for(level: &str) -> String {
    let lvl = level.to_ascii_lowercase();
    our_crates()
        .iter()
        .map(|t| format!("{t}={lvl}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Compute the final filter spec string with precedence:
/// - `log_filter`
/// - `trace`/`debug`/`log_level` (crate-scoped)
/// - `RUST_LOG` env
/// - default to crate-scoped `info`
pub fn compute_spec(
    trace: bool,
    debug: bool,
    log_level: Option<&str>,
    log_filter: Option<&str>,
) -> String {
    resolve_spec(
        trace,
        debug,
        log_level,
        log_filter,
        env::var("RUST_LOG").ok(),
    )
}

/// [`compute_spec`] with the environment value passed in.
fn resolve_spec(
    trace: bool,
    debug: bool,
    log_level: Option<&str>,
    log_filter: Option<&str>,
    rust_log: Option<String>,
) -> String {
    if let Some(spec) = log_filter {
        return spec.to_string();
    }
    if trace {
        return level_spec_for("trace");
    }
    if debug {
        return level_spec_for("debug");
    }
    if let Some(lvl) = log_level {
        return level_spec_for(lvl);
    }
    rust_log
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| level_spec_for("info"))
}

/// Create an `EnvFilter` from a spec string.
pub fn env_filter_from_spec(spec: &str) -> EnvFilter {
    EnvFilter::new(spec)
}

/// Install a stderr subscriber for `spec`. Repeated calls are no-ops.
pub fn init(spec: &str) {
    registry()
        .with(env_filter_from_spec(spec))
        .with(fmt::layer().with_writer(io::stderr).without_time())
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_spec_covers_every_crate() {
        let spec = level_spec_for("DEBUG");
        assert_eq!(spec.split(',').count(), our_crates().len());
        assert!(spec.contains("winswap_core=debug"));
        assert!(spec.contains("mac_winops=debug"));
    }

    #[test]
    fn explicit_filter_wins() {
        let spec = resolve_spec(false, false, Some("warn"), Some("mac_winops=trace"), None);
        assert_eq!(spec, "mac_winops=trace");
    }

    #[test]
    fn flags_beat_environment() {
        let env = Some("info".to_string());
        assert_eq!(
            resolve_spec(true, false, None, None, env.clone()),
            level_spec_for("trace")
        );
        assert_eq!(
            resolve_spec(false, false, Some("error"), None, env),
            level_spec_for("error")
        );
    }

    #[test]
    fn environment_then_default() {
        assert_eq!(
            resolve_spec(false, false, None, None, Some("winswap=warn".into())),
            "winswap=warn"
        );
        assert_eq!(
            resolve_spec(false, false, None, None, Some("  ".into())),
            level_spec_for("info")
        );
        assert_eq!(
            resolve_spec(false, false, None, None, None),
            level_spec_for("info")
        );
    }

    #[test]
    fn log_args_spec_uses_flags() {
        let args = LogArgs {
            debug: true,
            ..LogArgs::default()
        };
        assert_eq!(args.spec(), level_spec_for("debug"));
    }
}
