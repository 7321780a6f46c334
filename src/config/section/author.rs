//! `[author]` configuration.

use serde::{Deserialize, Serialize};

/// Document author, shown by the footer and citation components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    /// Author name.
    pub name: String,
    /// Author email.
    pub email: String,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults_are_empty() {
        let config = test_parse_config("");
        assert!(config.author.name.is_empty());
        assert!(config.author.email.is_empty());
    }

    #[test]
    fn test_partial_section() {
        let config = test_parse_config("[author]\nname = \"Ada Lovelace\"");
        assert_eq!(config.author.name, "Ada Lovelace");
        assert!(config.author.email.is_empty());
    }
}
