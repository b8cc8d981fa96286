//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::PolicyArgs;
use crate::infra::SlugBehavior;

/// Application configuration loaded from config file.
///
/// ```toml
/// [behavior]
/// source_attr = "headline"
/// id_attr = "id"
/// max_chars = 60
/// lowercase = true
/// avoid_id_prefixing = false
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default slug behavior for every command
    pub behavior: SlugBehavior,
}

impl Config {
    /// Load configuration, from `path` if given, else the default location.
    ///
    /// A missing file at the default location yields the default config; a
    /// missing file at an explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let config_path = Self::config_path();
                if !config_path.exists() {
                    return Ok(Self::default());
                }
                Self::load_from(&config_path)
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/recslug/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recslug")
            .join("config.toml")
    }

    /// Resolve the slug behavior, with CLI flags taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI flags (`--source-attr`, `--max-length`, ...)
    /// 2. Config file `[behavior]` table
    /// 3. Built-in defaults
    pub fn behavior(
        &self,
        policy: &PolicyArgs,
        source_attr: Option<&str>,
        id_attr: Option<&str>,
    ) -> SlugBehavior {
        let mut behavior = self.behavior.clone();
        if let Some(attr) = source_attr {
            behavior.source_attr = attr.to_string();
        }
        if let Some(attr) = id_attr {
            behavior.id_attr = attr.to_string();
        }
        if let Some(max) = policy.max_length {
            behavior.max_chars = max;
        }
        behavior.avoid_id_prefixing |= policy.no_prefix;
        behavior.lowercase &= !policy.keep_case;
        behavior
    }
}
