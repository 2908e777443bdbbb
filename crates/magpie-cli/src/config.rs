use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Vault configuration
    #[serde(default)]
    pub vault: VaultConfig,

    /// Collection configuration
    #[serde(default)]
    pub collect: CollectConfig,
}

/// Vault configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Path to the vault root
    #[serde(default = "default_vault_path")]
    pub path: PathBuf,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            path: default_vault_path(),
        }
    }
}

/// Collection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectConfig {
    /// Flatten callout bodies to a single line
    #[serde(default = "default_flatten")]
    pub flatten: bool,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            flatten: default_flatten(),
        }
    }
}

fn default_vault_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_flatten() -> bool {
    true
}

impl CliConfig {
    /// Load configuration with CLI overrides.
    ///
    /// An explicitly given config path must exist; the default location is
    /// used only when present. CLI flags override file values.
    pub fn load(config_path: Option<PathBuf>, vault_override: Option<PathBuf>) -> Result<Self> {
        let mut config = if let Some(path) = config_path {
            Self::from_file(&path)?
        } else if let Some(path) = default_config_path().filter(|p| p.exists()) {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        if let Some(vault) = vault_override {
            config.vault.path = vault;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("magpie").join("config.toml"))
}
