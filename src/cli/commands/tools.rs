//! Tool availability checks and config bootstrapping.

use crate::{config, label, printing};

/// Check if the print spooler and a label font are available.
pub fn cmd_check_tools() -> anyhow::Result<()> {
    let config = config::load();

    println!("Checking label tools...\n");

    if printing::is_spooler_available() {
        println!("✓ lp: found");
    } else {
        println!("✗ lp: NOT FOUND");
        eprintln!("Install CUPS:");
        eprintln!("  macOS:   preinstalled (enable Printer Sharing)");
        eprintln!("  Linux:   apt install cups-client");
    }

    if label::font::is_font_available(config.label.font_path.as_deref()) {
        println!("✓ label font: found");
    } else {
        println!("✗ label font: NOT FOUND");
        eprintln!("Install a TrueType font (e.g. DejaVu Sans) or set");
        eprintln!("font_path under [label] in the config file.");
    }

    println!();
    println!("Printer queue: {}", config.printer.queue);
    match config::config_path() {
        Some(path) if path.exists() => println!("Config: {:?}", path),
        Some(path) => println!("Config: {:?} (not created yet, using defaults)", path),
        None => println!("Config: no config directory available"),
    }

    Ok(())
}

/// Write the current config (defaults plus anything already set) to
/// the config file so it can be edited.
pub fn cmd_init_config() -> anyhow::Result<()> {
    let config = config::load();
    config::save(&config)?;

    match config::config_path() {
        Some(path) => println!("Wrote config to {:?}", path),
        None => println!("Wrote config"),
    }
    Ok(())
}
