//! Resource loading with fallback search.
//!
//! Lookup order for `(category, name)`:
//!
//! 1. assets compiled into the binary ([`crate::embed`])
//! 2. `$TEX2ANY_DATA_DIR/<category>/<name>`
//! 3. `<exe dir>/data/<category>/<name>`
//! 4. `<exe dir>/../share/tex2any/<category>/<name>`
//!
//! Reads only; nothing is cached or written.

use crate::embed;
use crate::error::{Error, Result};
use std::{
    borrow::Cow,
    env, fs,
    path::{Path, PathBuf},
};

/// Environment variable naming an extra data directory.
pub const DATA_DIR_ENV: &str = "TEX2ANY_DATA_DIR";

/// Resource category, mapped to a subdirectory of the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Themes,
    Components,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Themes => "themes",
            Self::Components => "components",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load `category/name` as text.
pub fn load(category: Category, name: &str) -> Result<Cow<'static, str>> {
    if let Some(content) = embed::lookup(category, name) {
        return Ok(Cow::Borrowed(content));
    }

    for path in candidates(category, name) {
        if path.is_file() {
            return fs::read_to_string(&path)
                .map(Cow::Owned)
                .map_err(|err| Error::io("read", &path, err));
        }
    }

    Err(not_found(category, name))
}

/// Whether `category/name` can be loaded.
pub fn exists(category: Category, name: &str) -> bool {
    embed::lookup(category, name).is_some()
        || candidates(category, name).iter().any(|p| p.is_file())
}

/// Filesystem locations searched after the embedded set, in order.
pub fn candidates(category: Category, name: &str) -> Vec<PathBuf> {
    let data_dir = env::var_os(DATA_DIR_ENV).map(PathBuf::from);
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    candidates_in(data_dir.as_deref(), exe_dir.as_deref(), category, name)
}

fn candidates_in(
    data_dir: Option<&Path>,
    exe_dir: Option<&Path>,
    category: Category,
    name: &str,
) -> Vec<PathBuf> {
    let sub = category.as_str();
    let mut paths = Vec::with_capacity(3);
    if let Some(dir) = data_dir {
        paths.push(dir.join(sub).join(name));
    }
    if let Some(dir) = exe_dir {
        paths.push(dir.join("data").join(sub).join(name));
        paths.push(dir.join("..").join("share").join("tex2any").join(sub).join(name));
    }
    paths
}

fn not_found(category: Category, name: &str) -> Error {
    Error::ResourceNotFound {
        category: category.as_str(),
        name: name.to_string(),
    }
}
