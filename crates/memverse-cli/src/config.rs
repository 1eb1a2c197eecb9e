//! Drill configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level memverse configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemverseConfig {
    /// Passage library file or directory.
    #[serde(default = "default_library")]
    pub library: PathBuf,
    /// Fixed RNG seed for reproducible drills.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Words to hide per Enter press.
    #[serde(default = "default_words_per_step")]
    pub words_per_step: usize,
    /// Clear the terminal before each round.
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

fn default_library() -> PathBuf {
    PathBuf::from("./passages")
}
fn default_words_per_step() -> usize {
    1
}
fn default_true() -> bool {
    true
}

impl Default for MemverseConfig {
    fn default() -> Self {
        Self {
            library: default_library(),
            seed: None,
            words_per_step: default_words_per_step(),
            clear_screen: true,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `memverse.toml` in the current directory
/// 2. `~/.config/memverse/config.toml`
///
/// `MEMVERSE_SEED` overrides the configured seed.
pub fn load_config_from(path: Option<&Path>) -> Result<MemverseConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("memverse.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => MemverseConfig::default(),
    };

    if let Ok(seed) = std::env::var("MEMVERSE_SEED") {
        config.seed = Some(
            seed.trim()
                .parse()
                .with_context(|| format!("MEMVERSE_SEED is not a valid u64: {seed}"))?,
        );
    }

    Ok(config)
}

/// Parse and check a config document.
pub fn parse_config(content: &str) -> Result<MemverseConfig> {
    let mut config: MemverseConfig = toml::from_str(content)?;
    anyhow::ensure!(
        config.words_per_step >= 1,
        "words_per_step must be at least 1"
    );
    config.library = PathBuf::from(resolve_env_vars(&config.library.to_string_lossy()));
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("memverse"))
}
