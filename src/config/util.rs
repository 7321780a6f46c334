//! Configuration utility functions.

use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

/// Expand a leading `~` (and `~user`-less home shorthand) in a path.
///
/// # Examples
/// ```ignore
/// expand_path("~/.tex2any.toml") -> "/home/ada/.tex2any.toml"
/// expand_path("custom.toml")     -> "custom.toml"
/// ```
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Integer(i64),
    Float(f64),
}

/// Accept either a TOML string or number, storing it as a string.
///
/// `copyright_year = 2025` and `copyright_year = "2025"` are both common.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Integer(n) => n.to_string(),
        StringOrNumber::Float(n) => n.to_string(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Accept either a single string or a list of strings.
pub fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_plain() {
        assert_eq!(expand_path("custom.toml"), PathBuf::from("custom.toml"));
    }

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path("~/.tex2any.toml");
        assert!(expanded.ends_with(".tex2any.toml"));
        if std::env::var_os("HOME").is_some() {
            assert!(!expanded.starts_with("~"));
        }
    }
}
