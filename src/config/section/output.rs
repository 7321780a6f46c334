//! `[output]` configuration.
//!
//! # Example
//!
//! ```toml
//! [output]
//! default_theme = "academic"
//! default_formats = ["html5", "markdown"]
//! default_components = ["reading-time", "back-to-top", "theme-toggle"]
//! minify = false
//! ```

use crate::config::util::one_or_many;
use serde::{Deserialize, Serialize};

/// Defaults applied when the command line leaves them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Theme used when `--theme` is absent. Empty means no theme.
    pub default_theme: String,
    /// Formats used when `--format` is absent. A single string is accepted.
    #[serde(deserialize_with = "one_or_many")]
    pub default_formats: Vec<String>,
    /// Components used when `--components` is absent.
    #[serde(deserialize_with = "one_or_many")]
    pub default_components: Vec<String>,
    /// Minify injected theme and component assets.
    pub minify: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_theme: "academic".into(),
            default_formats: vec!["html5".into()],
            default_components: Vec::new(),
            minify: false,
        }
    }
}

impl OutputConfig {
    /// Default theme, `None` when configured as empty.
    pub fn theme(&self) -> Option<&str> {
        let theme = self.default_theme.trim();
        (!theme.is_empty()).then_some(theme)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.output.default_theme, "academic");
        assert_eq!(config.output.default_formats, vec!["html5"]);
        assert!(config.output.default_components.is_empty());
        assert!(!config.output.minify);
    }

    #[test]
    fn test_formats_list() {
        let config = test_parse_config(
            r#"
[output]
default_formats = ["html5", "markdown", "epub"]
default_components = ["reading-time", "back-to-top"]
"#,
        );
        assert_eq!(
            config.output.default_formats,
            vec!["html5", "markdown", "epub"]
        );
        assert_eq!(
            config.output.default_components,
            vec!["reading-time", "back-to-top"]
        );
    }

    #[test]
    fn test_single_format_string() {
        let config = test_parse_config("[output]\ndefault_formats = \"markdown\"");
        assert_eq!(config.output.default_formats, vec!["markdown"]);
    }

    #[test]
    fn test_empty_theme_means_none() {
        let config = test_parse_config("[output]\ndefault_theme = \"\"");
        assert_eq!(config.output.theme(), None);
        assert_eq!(test_parse_config("").output.theme(), Some("academic"));
    }
}
