//! Runtime configuration from defaults and environment variables

use std::path::PathBuf;

use crate::config_error;
use crate::error::Result;
use crate::theme::Theme;
use crate::types::{DEFAULT_MAX_ENTRIES, DEFAULT_MAX_VARIANTS, DEFAULT_OUTPUT_FILE};
use crate::wordlist::parse_max_entries;

pub const ENV_MAX_ENTRIES: &str = "PW_TOOLKIT_MAX_ENTRIES";
pub const ENV_MAX_VARIANTS: &str = "PW_TOOLKIT_MAX_VARIANTS";
pub const ENV_OUTPUT: &str = "PW_TOOLKIT_OUTPUT";
pub const ENV_THEME: &str = "PW_TOOLKIT_THEME";

/// Toolkit configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolkitConfig {
    pub max_entries: usize,
    pub max_variants_per_word: usize,
    pub output_path: PathBuf,
    pub theme: Theme,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            max_variants_per_word: DEFAULT_MAX_VARIANTS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            theme: Theme::default(),
        }
    }
}

impl ToolkitConfig {
    /// Defaults overridden by `PW_TOOLKIT_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_MAX_ENTRIES) {
            config.max_entries = parse_max_entries(&value)
                .map_err(|e| config_error!("{}: {}", ENV_MAX_ENTRIES, e))?;
        }

        if let Some(value) = lookup(ENV_MAX_VARIANTS) {
            config.max_variants_per_word = parse_max_entries(&value)
                .map_err(|e| config_error!("{}: {}", ENV_MAX_VARIANTS, e))?;
        }

        if let Some(value) = lookup(ENV_OUTPUT).filter(|v| !v.trim().is_empty()) {
            config.output_path = PathBuf::from(value.trim());
        }

        if let Some(value) = lookup(ENV_THEME) {
            config.theme = value
                .parse::<Theme>()
                .map_err(|e| config_error!("{}: {}", ENV_THEME, e))?;
        }

        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }
}
