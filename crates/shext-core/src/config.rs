use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::random::{RandomStringOptions, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};

/// Defaults for generated strings (optional `[random]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Shortest generated length (inclusive).
    pub min_length: usize,
    /// Longest generated length (exclusive).
    pub max_length: usize,
    /// Include upper- and lowercase letters.
    pub letters: bool,
    /// Include digits.
    pub numbers: bool,
    /// Include punctuation.
    pub special_chars: bool,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            letters: true,
            numbers: false,
            special_chars: false,
        }
    }
}

impl RandomConfig {
    pub fn options(&self) -> RandomStringOptions {
        let mut opts = RandomStringOptions::empty();
        if self.letters {
            opts |= RandomStringOptions::LETTERS;
        }
        if self.numbers {
            opts |= RandomStringOptions::NUMBERS;
        }
        if self.special_chars {
            opts |= RandomStringOptions::SPECIAL_CHARS;
        }
        opts
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_length >= self.max_length {
            bail!(
                "random.min_length ({}) must be less than random.max_length ({})",
                self.min_length,
                self.max_length
            );
        }
        Ok(())
    }
}

/// Defaults for file listing (optional `[listing]` section).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// File name pattern used when none is given on the command line.
    pub pattern: Option<String>,
}

/// XML output layout (optional `[xml]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XmlConfig {
    /// Spaces per nesting level; 0 = single line.
    pub indent: usize,
    /// Emit `<?xml version="1.0" encoding="utf-8"?>` first.
    pub declaration: bool,
}

impl Default for XmlConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            declaration: true,
        }
    }
}

/// Global configuration loaded from `~/.config/shext/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShextConfig {
    pub random: RandomConfig,
    pub listing: ListingConfig,
    pub xml: XmlConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("shext")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ShextConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ShextConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load and validate configuration from a specific file.
pub fn load_from_path(path: &Path) -> Result<ShextConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ShextConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.random.validate()?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
