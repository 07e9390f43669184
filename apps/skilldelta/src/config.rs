//! # Configuration
//!
//! Optional TOML file tuning the rendered output.
//!
//! ```toml
//! [labels]
//! team_prefix = "Team SP"
//! arrow = "->"
//!
//! [languages]
//! sv = "Svenska"
//! ```
//!
//! The path comes from `--config` or `SKILLDELTA_CONFIG`. Without a path the
//! defaults apply; a path that does not exist is an error.

use serde::Deserialize;
use skilldelta_core::{LabelStyle, LanguageCatalog, SkillDeltaError};
use std::collections::BTreeMap;
use std::path::Path;

/// Maximum config file size (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

/// Parsed configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Overrides for label words and glyphs.
    pub labels: LabelStyle,
    /// Extra or replacement language names, keyed by code.
    pub languages: BTreeMap<String, String>,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, SkillDeltaError> {
        toml::from_str(text).map_err(|e| SkillDeltaError::Config(e.to_string()))
    }

    /// Load configuration, falling back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, SkillDeltaError> {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let metadata = std::fs::metadata(path).map_err(|e| {
            SkillDeltaError::Io(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(SkillDeltaError::Config(format!(
                "Config file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path)
            .map_err(|e| SkillDeltaError::Io(format!("Read config: {}", e)))?;

        tracing::info!("Loaded config from {}", path.display());
        Self::from_toml(&text)
    }

    /// Built-in languages extended with the configured ones.
    #[must_use]
    pub fn catalog(&self) -> LanguageCatalog {
        self.languages
            .iter()
            .fold(LanguageCatalog::default(), |catalog, (code, name)| {
                catalog.with_entry(code.clone(), name.clone())
            })
    }
}
