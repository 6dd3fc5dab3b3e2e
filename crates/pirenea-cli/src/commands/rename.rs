use std::path::PathBuf;

use anyhow::Result;

use pirenea_core::setup::SetupCode;
use prefix_manager::{ConsoleSink, PrefixManager};

#[derive(Debug)]
pub enum RenameAction {
    Add { root: Option<PathBuf>, code: SetupCode },
    Remove { root: Option<PathBuf>, code: SetupCode },
}

pub fn execute(config_path: Option<PathBuf>, action: RenameAction) -> Result<()> {
    let mut sink = ConsoleSink;
    match action {
        RenameAction::Add { root, code } => {
            let (_, root) = super::resolve_root(config_path, root)?;
            let manager = PrefixManager::new(root)?;
            println!("Working directory is {}", manager.root().display());
            manager.add_prefix(code, &mut sink)?;
            println!("Renaming with prefix {code} is done.");
        }
        RenameAction::Remove { root, code } => {
            let (_, root) = super::resolve_root(config_path, root)?;
            let manager = PrefixManager::new(root)?;
            println!("Working directory is {}", manager.root().display());
            manager.remove_prefix(code, &mut sink)?;
            println!("Removing prefix {code} is done.");
        }
    }
    Ok(())
}
