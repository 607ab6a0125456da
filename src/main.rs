//! UPC Labeler - scan product codes, look them up, print shelf labels.
//!
//! Reads scanned UPC codes from stdin, resolves each against the
//! UPCitemdb catalog, composes a printable label image (name,
//! attributes, Code 128 barcode, optional product photo) and submits
//! it to a CUPS print queue. One-shot subcommands cover lookups,
//! single labels and tool checks.

pub mod barcode;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod label;
pub mod printing;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("upc_labeler=info".parse().unwrap()))
        .init();

    // Try to run a CLI command
    if cli::run_command(&args)? {
        // A command was executed, exit normally
        return Ok(());
    }

    // No command specified, run the interactive scan loop
    let rt = tokio::runtime::Runtime::new()?;
    cli::cmd_scan(&rt, None, false)
}
