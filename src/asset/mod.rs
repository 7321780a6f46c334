//! Injected asset handling.

pub mod minify;

use std::fmt;

/// Kind of an inlined asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Css,
    Js,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Css => "CSS",
            Self::Js => "JS",
        })
    }
}
