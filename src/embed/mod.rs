//! Theme and component assets compiled into the binary.
//!
//! # Layout
//!
//! ```text
//! embed/
//! ├── themes/<name>.css
//! └── components/<name>.css, <name>.js
//! ```
//!
//! Files are keyed by their file name (`academic.css`, `toc.js`), the same
//! key the filesystem fallback in [`crate::resource`] uses.

use crate::resource::Category;

/// Build a `(file name, contents)` table from paths relative to this module.
macro_rules! embedded {
    ($dir:literal: $($file:literal),* $(,)?) => {
        &[$(($file, include_str!(concat!($dir, "/", $file)))),*]
    };
}

/// Theme stylesheets.
pub const THEMES: &[(&str, &str)] = embedded!("themes":
    "academic.css",
    "clean.css",
    "dark.css",
    "minimal.css",
    "serif.css",
    "modern.css",
);

/// Component stylesheets and scripts.
pub const COMPONENTS: &[(&str, &str)] = embedded!("components":
    "toc.css", "toc.js",
    "floating-toc.css", "floating-toc.js",
    "search.css", "search.js",
    "footer.css", "footer.js",
    "sidebar-right.css", "sidebar-right.js",
    "theme-toggle.css", "theme-toggle.js",
    "reading-progress.css", "reading-progress.js",
    "back-to-top.css", "back-to-top.js",
    "sidenotes.css", "sidenotes.js",
    "equation-numbers.css", "equation-numbers.js",
    "copy-code.css", "copy-code.js",
    "share-buttons.css", "share-buttons.js",
    "citation-generator.css", "citation-generator.js",
    "reading-time.css", "reading-time.js",
    "document-stats.css", "document-stats.js",
    "hugo-frontmatter.css", "hugo-frontmatter.js",
    "hugo-shortcodes.css", "hugo-shortcodes.js",
    "annotations.css", "annotations.js",
    "bookmark-progress.css", "bookmark-progress.js",
    "collapsible-proofs.css", "collapsible-proofs.js",
    "cross-references.css", "cross-references.js",
    "seo-meta.css", "seo-meta.js",
    "glossary-tooltips.css", "glossary-tooltips.js",
);

const fn table(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::Themes => THEMES,
        Category::Components => COMPONENTS,
    }
}

/// Embedded contents of `category/name`, if compiled in.
pub fn lookup(category: Category, name: &str) -> Option<&'static str> {
    table(category)
        .iter()
        .find(|(file, _)| *file == name)
        .map(|(_, content)| *content)
}
