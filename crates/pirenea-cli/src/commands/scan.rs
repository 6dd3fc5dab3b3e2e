use std::path::PathBuf;

use anyhow::Result;

use prefix_manager::{report, PrefixManager};

pub fn execute(config_path: Option<PathBuf>, root: Option<PathBuf>, json: bool) -> Result<()> {
    let (config, root) = super::resolve_root(config_path, root)?;
    let manager = PrefixManager::new(root)?;
    let prefix_report = manager.scan()?;
    if json || config.reporting.structured_json {
        println!("{}", report::render_json(&prefix_report));
    } else {
        println!("{}", report::summarize(&prefix_report));
    }
    Ok(())
}
