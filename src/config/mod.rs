//! User configuration from `~/.tex2any.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [author] [footer] [output] [engine]
//! ├── types/         # ConfigError, global snapshot + CLI overrides
//! ├── util.rs        # path expansion, lenient field deserializers
//! └── mod.rs         # Tex2AnyConfig (this file)
//! ```
//!
//! A missing file yields built-in defaults. A file that can't be read or
//! parsed is reported as a warning and the defaults are kept; conversion
//! never fails because of the config file.

pub mod section;
pub mod types;
mod util;

pub use section::{AuthorConfig, EngineConfig, FooterConfig, FooterData, OutputConfig};
pub use types::{ConfigError, ConfigOverrides, apply_overrides, cfg, init_config};
pub use util::expand_path;

use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config location (tilde-expanded at load time).
pub const DEFAULT_CONFIG_PATH: &str = "~/.tex2any.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `~/.tex2any.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tex2AnyConfig {
    /// Author settings
    pub author: AuthorConfig,

    /// Footer component settings
    pub footer: FooterConfig,

    /// Output defaults
    pub output: OutputConfig,

    /// External tool settings
    pub engine: EngineConfig,
}

impl Tex2AnyConfig {
    /// Load configuration, falling back to defaults on any problem.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(err) => {
                log!("warning"; "Error loading config from {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Load configuration, `Ok(None)` if the file does not exist.
    pub fn try_load(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(Some(config))
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {} are ignored: {}", path.display(), fields.join(", "));
    }

    /// Footer record for the `footer` component.
    pub fn footer_data(&self) -> FooterData {
        FooterData {
            author_name: self.author.name.clone(),
            author_email: self.author.email.clone(),
            copyright_year: self.footer.copyright_year.clone(),
            license: self.footer.license.clone(),
            custom_text: self.footer.custom_text.clone(),
        }
    }
}

/// Resolve the config path: explicit `--config` or the per-user default.
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => expand_path(&path.to_string_lossy()),
        None => expand_path(DEFAULT_CONFIG_PATH),
    }
}

/// Parse a config snippet for tests, failing on unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> Tex2AnyConfig {
    let (parsed, ignored) = Tex2AnyConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
