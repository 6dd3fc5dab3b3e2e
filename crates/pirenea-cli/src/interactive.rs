use std::path::PathBuf;

use anyhow::Result;
use dialoguer::{Input, Select};

use pirenea_core::config::{Config, ConfigPaths};
use pirenea_core::setup::SetupCode;
use prefix_manager::{ConsoleSink, PrefixManager};

/// Prompt loop used when no subcommand is given: ask for the data root, an
/// add-or-remove choice and a setup code, then run the pass. Configuration
/// and validation errors are printed, not propagated.
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let paths = ConfigPaths::resolve()?;
    let config_path = config_path.unwrap_or(paths.config_path);
    let config = Config::load_or_default(&config_path)?;

    let root: String = Input::new()
        .with_prompt("Root directory for PIRENEA data")
        .default(config.default_root().to_string_lossy().to_string())
        .interact_text()?;

    let manager = match PrefixManager::new(root.trim()) {
        Ok(manager) => manager,
        Err(err) => {
            println!("Error: {err}");
            return Ok(());
        }
    };
    println!("Working directory is {}", manager.root().display());

    let actions = ["Add a prefix", "Remove a prefix"];
    let action = Select::new()
        .with_prompt("Add or remove a prefix")
        .items(&actions)
        .default(0)
        .interact()?;

    let entry: String = Input::new()
        .with_prompt("Setup code (P0, P1, P2)")
        .interact_text()?;
    let code = match SetupCode::parse(entry.trim()) {
        Ok(code) => code,
        Err(err) => {
            println!("Error: {err}");
            return Ok(());
        }
    };

    let mut sink = ConsoleSink;
    if action == 0 {
        manager.add_prefix(code, &mut sink)?;
        println!("Renaming with prefix {code} is done.");
    } else {
        manager.remove_prefix(code, &mut sink)?;
        println!("Removing prefix {code} is done.");
    }
    Ok(())
}
