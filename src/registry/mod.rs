//! Theme and component catalogues.
//!
//! Both are immutable [`Table`]s built once by [`Registry::builtin`] and
//! passed by reference; there is no global registry.
//!
//! ```ignore
//! let registry = Registry::builtin();
//! let theme = registry.themes.get("academic")?;
//! for component in registry.components.list() {
//!     println!("{}: {}", component.name, component.description);
//! }
//! ```

mod check;
mod component;
mod theme;

pub use check::{missing_resources, self_check};
pub use component::{Component, LayoutSlot, Resource, Structure};
pub use theme::Theme;

use crate::error::{Error, Result};
use rustc_hash::FxHashMap;

/// A named registry entry.
pub trait Entry {
    /// Singular noun used in error messages (`theme`, `component`).
    const KIND: &'static str;

    fn name(&self) -> &'static str;
}

/// Ordered lookup table keyed by entry name.
#[derive(Debug)]
pub struct Table<T> {
    entries: Vec<T>,
    index: FxHashMap<&'static str, usize>,
}

impl<T: Entry> Table<T> {
    pub fn new(entries: Vec<T>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.name(), i))
            .collect();
        Self { entries, index }
    }

    /// Look up an entry, failing with the list of available names.
    pub fn get(&self, name: &str) -> Result<&T> {
        self.find(name).ok_or_else(|| Error::UnknownName {
            kind: T::KIND,
            name: name.to_string(),
            available: self.names().join(", "),
        })
    }

    pub fn find(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Entries in registration order.
    pub fn list(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(Entry::name).collect()
    }
}

/// Every theme and component known to the program.
#[derive(Debug)]
pub struct Registry {
    pub themes: Table<Theme>,
    pub components: Table<Component>,
}

impl Registry {
    /// The catalogue shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            themes: Table::new(theme::builtin()),
            components: Table::new(component::builtin()),
        }
    }
}
