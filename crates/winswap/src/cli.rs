//! Command-line interface definitions for winswap.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;
use winswap_core::WindowId;

/// Command-line interface for the `winswap` binary.
#[derive(Parser, Debug)]
#[command(
    name = "winswap",
    about = "Find the front window on each display and swap windows across two displays",
    version
)]
pub struct Cli {
    /// Logging controls shared across workspace binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List displays with their front window.
    Detect(DetectArgs),
    /// Swap the front windows of two displays.
    Swap(SwapArgs),
    /// Swap two windows chosen by window id.
    SwapIds(SwapIdsArgs),
    /// Check whether each window can be moved through Accessibility.
    Diagnose(DiagnoseArgs),
    /// Show permission status, optionally asking macOS to prompt.
    Permissions(PermissionsArgs),
}

/// Arguments for `detect`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DetectArgs {
    /// Also list every top-level window, front to back.
    #[arg(long)]
    pub all: bool,

    /// Maximum number of windows listed with `--all`.
    #[arg(long, default_value_t = 10, value_name = "N")]
    pub limit: usize,
}

/// Arguments for `swap`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SwapArgs {
    /// Time to let windows settle before showing the new configuration.
    #[arg(
        long,
        value_parser = humantime::parse_duration,
        default_value = "500ms",
        value_name = "DURATION"
    )]
    pub settle: Duration,
}

/// Arguments for `swap-ids`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SwapIdsArgs {
    /// Window moved first.
    #[arg(value_name = "FIRST")]
    pub first: WindowId,

    /// Window moved second.
    #[arg(value_name = "SECOND")]
    pub second: WindowId,
}

/// Arguments for `diagnose`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DiagnoseArgs {
    /// Maximum number of windows to probe.
    #[arg(long, default_value_t = 10, value_name = "N")]
    pub limit: usize,
}

/// Arguments for `permissions`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PermissionsArgs {
    /// Show the system Accessibility prompt when access is missing.
    #[arg(long)]
    pub prompt: bool,
}
