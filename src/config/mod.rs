//! Configuration loading for vidscore

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".vidscorerc.json";

/// File-based defaults, overridden by CLI flags. Every field is
/// optional; hard-coded defaults apply last.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// YouTube Data API key. Prefer the YOUTUBE_API_KEY environment
    /// variable so the key stays out of version control.
    pub api_key: Option<String>,
    /// How many worst performers to keep.
    pub limit: Option<usize>,
    /// Recency window in months.
    pub months: Option<u32>,
    /// Exit 1 when the channel's average score falls below this.
    pub min_score: Option<u8>,
}

impl Config {
    /// CLI flags override config file values
    pub fn merge_with_cli(
        mut self,
        api_key: Option<String>,
        limit: Option<usize>,
        months: Option<u32>,
        min_score: Option<u8>,
    ) -> Self {
        if api_key.is_some() {
            self.api_key = api_key;
        }
        if limit.is_some() {
            self.limit = limit;
        }
        if months.is_some() {
            self.months = months;
        }
        if min_score.is_some() {
            self.min_score = min_score;
        }
        self
    }

    /// API key resolution: an explicit flag or config value first, the
    /// environment as the fallback.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key.clone().or_else(|| {
            std::env::var(crate::youtube::ENV_API_KEY)
                .ok()
                .filter(|key| !key.is_empty())
        })
    }
}

/// Find and load the config file. Searches the working directory then
/// its parents; a missing file means defaults, an unreadable or invalid
/// one is an error.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Some(path)
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in config: {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

/// Search for .vidscorerc.json in a directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Write a starter config into `dir` and return its path
pub fn write_default_config(dir: &Path, min_score: Option<u8>) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILENAME);
    let config = Config {
        api_key: None,
        limit: Some(10),
        months: Some(3),
        min_score,
    };
    let content = serde_json::to_string_pretty(&config)?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    Ok(path)
}
