use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub rename: RenameConfig,
    pub reporting: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameConfig {
    /// Template for the data root used when no `--root` is given.
    /// Supports `${HOME}` expansion.
    pub default_root: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub structured_json: bool,
}

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_path: PathBuf,
}

impl Config {
    pub fn default_config() -> Self {
        Self {
            rename: RenameConfig {
                default_root: "${HOME}/PIRENEA/DATA_1".to_string(),
            },
            reporting: ReportConfig {
                structured_json: false,
            },
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("parse config TOML")?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        let output = toml::to_string_pretty(self).context("render config TOML")?;
        Ok(output)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read config at {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    /// Falls back to the built-in defaults when no config file exists yet.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        let contents = self.to_toml_string()?;
        fs::write(path, contents).with_context(|| format!("write config at {}", path.display()))?;
        Ok(())
    }

    /// The default data root with `${HOME}` expanded.
    pub fn default_root(&self) -> PathBuf {
        expand_root_template(&self.rename.default_root)
    }
}

impl ConfigPaths {
    pub fn resolve() -> Result<Self> {
        let project_dirs = ProjectDirs::from("fr", "irap", "pirenea-files")
            .ok_or_else(|| anyhow::anyhow!("unable to determine project directories"))?;
        let config_dir = project_dirs.config_dir();
        Ok(Self {
            config_path: config_dir.join("config.toml"),
        })
    }
}

pub fn expand_root_template(template: &str) -> PathBuf {
    let home_dir = std::env::var("HOME").unwrap_or_else(|_| "/".to_string());
    let replaced = template.replace("${HOME}", &home_dir);
    PathBuf::from(replaced)
}
