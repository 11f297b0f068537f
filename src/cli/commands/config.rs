//! Config command handler for the tracker's settings
//!
//! Keys cover logging (`level`, `file`, `verbose`) and where record files
//! live by default (`records_dir`).

use crate::args::ConfigSubcommand;
use cgpa_tracker::config::Config;
use std::io::{self, Write};

/// Keys accepted by `config get/set/unset`
const VALID_KEYS: &str = "level, file, verbose, records_dir";

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<String>) {
    if let Some(k) = key {
        // Print specific config value
        match config.get(&k) {
            Some(value) => println!("{value}"),
            None => eprintln!("Unknown config key: '{k}' (valid keys: {VALID_KEYS})"),
        }
    } else {
        // Print all config values
        println!("\n=== CgpaTracker Configuration ===\n");
        print!("{config}");
        println!("\nNew record files default to records_dir; see `cgpatracker init`.");
    }
}

/// Handle the config set subcommand
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        eprintln!("{e} (valid keys: {VALID_KEYS})");
        std::process::exit(1);
    }

    persist(config);
    println!("✓ Set {key} = {value}");
}

/// Handle the config unset subcommand
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("{e} (valid keys: {VALID_KEYS})");
        std::process::exit(1);
    }

    persist(config);
    println!("✓ Reset {key} to default");
}

/// Handle the config reset subcommand
pub fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    // Record files are untouched; only the config file is removed
    print!("Reset CgpaTracker config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            eprintln!("Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}

/// Save the config file, exiting with an error message on failure
fn persist(config: &Config) {
    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }
}
