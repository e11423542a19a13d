//! Yubikey Rule Generator - Karabiner rules for Dvorak/Qwerty remapping
//!
//! Reads a JSON mapping of Dvorak key codes to Qwerty key codes and prints
//! Karabiner `complex_modifications` rules scoped to a Yubikey, ready to be
//! incorporated into ~/.config/karabiner/karabiner.json.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use yubikey_gen_rules::constants::APP_BINARY_NAME;
use yubikey_gen_rules::generator;
use yubikey_gen_rules::parser;

/// Generate Karabiner rules mapping Dvorak keys to Qwerty for a Yubikey
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to JSON file mapping Dvorak key codes to Qwerty key codes
    #[arg(value_name = "FILE")]
    remaps_path: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Validate the file path before attempting to load
    if !cli.remaps_path.exists() {
        eprintln!(
            "Error: Remap file not found: {}",
            cli.remaps_path.display()
        );
        eprintln!();
        eprintln!("Please provide a valid path to a JSON remap file.");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} remaps.json", APP_BINARY_NAME);
        eprintln!("  {} path/to/dvorak-to-qwerty.json", APP_BINARY_NAME);
        eprintln!();
        eprintln!("For more options, run:");
        eprintln!("  {} --help", APP_BINARY_NAME);
        std::process::exit(1);
    }

    let entries = parser::parse_remap_file(&cli.remaps_path)?;
    let rules = generator::generate_rules(&entries);

    println!("{}", generator::render_rules_json(&rules)?);

    Ok(())
}
