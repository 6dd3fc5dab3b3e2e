pub mod config;
pub mod rename;
pub mod scan;

use std::path::PathBuf;

use anyhow::Result;

use pirenea_core::config::{Config, ConfigPaths};

/// Loads the effective config and resolves the data root for an operation:
/// the `--root` flag when given, the config's expanded default otherwise.
pub fn resolve_root(config_path: Option<PathBuf>, root: Option<PathBuf>) -> Result<(Config, PathBuf)> {
    let paths = ConfigPaths::resolve()?;
    let config_path = config_path.unwrap_or(paths.config_path);
    let config = Config::load_or_default(&config_path)?;
    let root = root.unwrap_or_else(|| config.default_root());
    Ok((config, root))
}
