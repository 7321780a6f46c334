//! `[footer]` configuration.
//!
//! # Example
//!
//! ```toml
//! [footer]
//! copyright_year = "2025"
//! license = "CC BY 4.0"
//! custom_text = "Preprint, do not cite."
//! ```

use crate::config::util::string_or_number;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Copyright year. Accepts `"2025"` as well as `2025`.
    #[serde(deserialize_with = "string_or_number")]
    pub copyright_year: String,
    /// License name or short notice.
    pub license: String,
    /// Free-form text appended to the footer.
    pub custom_text: String,
}

/// Footer settings as handed to the `footer` component.
///
/// Serialized to JSON into `<meta name="tex2any-footer-config">`; field
/// order is the order the component script reads them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterData {
    pub author_name: String,
    pub author_email: String,
    pub copyright_year: String,
    pub license: String,
    pub custom_text: String,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_copyright_year_as_string() {
        let config = test_parse_config("[footer]\ncopyright_year = \"2024\"");
        assert_eq!(config.footer.copyright_year, "2024");
    }

    #[test]
    fn test_copyright_year_as_integer() {
        let config = test_parse_config("[footer]\ncopyright_year = 2025\nlicense = \"MIT\"");
        assert_eq!(config.footer.copyright_year, "2025");
        assert_eq!(config.footer.license, "MIT");
    }
}
