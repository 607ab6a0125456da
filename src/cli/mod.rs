//! Command-line interface for upc-labeler.
//!
//! This module provides one-shot commands for lookups, label rendering,
//! and tool checks; with no command the binary drops into the
//! interactive scan loop.

mod commands;

pub use commands::{cmd_scan, run_command, Cli, Commands};
