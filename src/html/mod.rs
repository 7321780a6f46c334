//! HTML post-processing.
//!
//! # Module Structure
//!
//! ```text
//! html/
//! ├── escape.rs   # attribute escaping, JSON-in-attribute
//! ├── inject.rs   # case-insensitive tag location and splicing
//! ├── layout.rs   # structural body rewrites (sidebar-right)
//! └── compose.rs  # Composer: theme/component injection over a file
//! ```

pub mod compose;
pub mod escape;
pub mod inject;
pub mod layout;

pub use compose::Composer;
