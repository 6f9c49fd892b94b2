use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".uninitckrc.json";

/// Optional project configuration, loaded from `.uninitckrc.json` in the
/// working directory. Every field has a default, so the file is fully
/// optional and may specify any subset.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Default use-detection policy; `--noisy` on the command line wins.
    #[serde(default)]
    pub noisy: bool,
    /// Extra declaration keywords appended to the built-in primitive set
    /// (e.g. `size_t`, `ssize_t`, typedef names used like primitives).
    #[serde(default)]
    pub type_keywords: Vec<String>,
    /// Glob patterns excluded when a directory argument is expanded.
    /// Explicitly listed files are always scanned.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// File extensions collected when a directory argument is expanded.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    ["c", "h", "cc", "cpp", "cxx", "hh", "hpp"]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            noisy: false,
            type_keywords: Vec::new(),
            ignores: Vec::new(),
            extensions: default_extensions(),
        }
    }
}

impl Config {
    /// Load the config from the working directory, falling back to
    /// defaults when no file exists. A file that exists but does not parse
    /// is an error, not a silent fallback.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject invalid glob patterns up front instead of failing mid-walk.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }
}
