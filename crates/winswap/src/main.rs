#![warn(missing_docs)]

//! Entry point for the `winswap` binary.

mod cli;
mod commands;
mod error;
mod report;

use std::{io, process};

use clap::Parser;
use mac_winops::SystemWindowService;
use tracing::error;

use crate::{
    cli::{Cli, Commands},
    error::Result,
};

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and dispatch to the chosen subcommand.
fn run() -> Result<()> {
    let Cli { log, command } = Cli::parse();
    logging::init(&log.spec());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Commands::Permissions(args) = &command {
        return commands::show_permissions(args, &mut out);
    }
    let svc = SystemWindowService::new()?;
    match command {
        Commands::Detect(args) => commands::detect(&svc, &args, &mut out),
        Commands::Swap(args) => commands::swap(&svc, &args, &mut out),
        Commands::SwapIds(args) => commands::swap_ids(&svc, &args, &mut out),
        Commands::Diagnose(args) => commands::diagnose(&svc, &args, &mut out),
        Commands::Permissions(args) => commands::show_permissions(&args, &mut out),
    }
}
