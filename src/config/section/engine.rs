//! `[engine]` configuration.
//!
//! # Example
//!
//! ```toml
//! [engine]
//! latexmlc = "latexmlc"       # executable used for HTML/JSON output
//! latexml = "latexml"         # executable used for XML output
//! pandoc = "pandoc"           # second stage for markdown/txt/epub
//! timeout = 900               # hard limit for one engine run, seconds
//! engine_timeout = 600        # passed to latexmlc as --timeout
//! converter_timeout = 300     # hard limit for one pandoc run, seconds
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub latexmlc: String,
    pub latexml: String,
    pub pandoc: String,
    /// Wall-clock bound for a LaTeXML process, in seconds.
    pub timeout: u64,
    /// LaTeXML's own `--timeout`, in seconds.
    pub engine_timeout: u64,
    /// Wall-clock bound for a pandoc process, in seconds.
    pub converter_timeout: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            latexmlc: "latexmlc".into(),
            latexml: "latexml".into(),
            pandoc: "pandoc".into(),
            timeout: 900,
            engine_timeout: 600,
            converter_timeout: 300,
        }
    }
}

impl EngineConfig {
    pub const fn engine_limit(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub const fn converter_limit(&self) -> Duration {
        Duration::from_secs(self.converter_timeout)
    }
}
