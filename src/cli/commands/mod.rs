//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `scan`: the interactive scan loop and the per-scan pipeline
//! - `lookup`: one-shot catalog lookup
//! - `label`: compose a single label without entering the loop
//! - `tools`: spooler/font checks and config bootstrapping

mod label;
mod lookup;
mod scan;
mod tools;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

pub use label::cmd_label;
pub use lookup::cmd_lookup;
pub use scan::cmd_scan;
pub use tools::{cmd_check_tools, cmd_init_config};

/// UPC Labeler CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Read codes from stdin and print a label per scan
    Scan {
        /// Printer queue to submit labels to (overrides the config)
        #[arg(short, long, env = "UPC_LABELER_PRINTER")]
        printer: Option<String>,
        /// Compose labels but skip print submission
        #[arg(long)]
        no_print: bool,
    },
    /// Look up a single code and print the record
    Lookup {
        /// The scanned code
        code: String,
    },
    /// Compose a label for a single code
    Label {
        /// The scanned code
        code: String,
        /// Where to write the label image (default: label.png in the
        /// configured work directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also submit the label to the configured printer
        #[arg(long)]
        print: bool,
    },
    /// Check if the print spooler and a label font are available
    CheckTools,
    /// Write a default config file to edit
    InitConfig,
}

/// Run the specified CLI command.
///
/// Returns `Ok(true)` if a command was run, `Ok(false)` if no command
/// was specified (meaning the interactive scan loop should start).
pub fn run_command(cli: &Cli) -> anyhow::Result<bool> {
    let rt = Runtime::new()?;

    match &cli.command {
        Some(Commands::Scan { printer, no_print }) => {
            cmd_scan(&rt, printer.as_deref(), *no_print)?;
            Ok(true)
        }
        Some(Commands::Lookup { code }) => {
            cmd_lookup(&rt, code)?;
            Ok(true)
        }
        Some(Commands::Label {
            code,
            output,
            print,
        }) => {
            cmd_label(&rt, code, output.as_deref(), *print)?;
            Ok(true)
        }
        Some(Commands::CheckTools) => {
            cmd_check_tools()?;
            Ok(true)
        }
        Some(Commands::InitConfig) => {
            cmd_init_config()?;
            Ok(true)
        }
        None => Ok(false),
    }
}
