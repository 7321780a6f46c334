//! Component descriptors.
//!
//! A component always ships a stylesheet. It may also ship a script, sit in
//! a layout slot, and restructure the body (see [`Structure`]).

use super::Entry;
use crate::error::Result;
use crate::resource::{self, Category};
use std::{borrow::Cow, fmt};

/// A file under `components/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub file: &'static str,
}

impl Resource {
    pub const fn new(file: &'static str) -> Self {
        Self { file }
    }

    pub fn load(&self) -> Result<Cow<'static, str>> {
        resource::load(Category::Components, self.file)
    }

    pub fn exists(&self) -> bool {
        resource::exists(Category::Components, self.file)
    }
}

/// Where a component places itself on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutSlot {
    Left,
    Right,
    Header,
    Footer,
    None,
}

impl LayoutSlot {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Header => "header",
            Self::Footer => "footer",
            Self::None => "none",
        }
    }
}

impl fmt::Display for LayoutSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural rewrite of the document body applied before styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    /// Two-column layout with a right-hand aside.
    SidebarRight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: &'static str,
    pub description: &'static str,
    pub css: Resource,
    pub script: Option<Resource>,
    pub slot: LayoutSlot,
    /// Meaningless outside HTML output; dropped for other formats.
    pub html_only: bool,
    pub structure: Option<Structure>,
}

impl Component {
    pub fn css(&self) -> Result<Cow<'static, str>> {
        self.css.load()
    }
}

impl Entry for Component {
    const KIND: &'static str = "component";

    fn name(&self) -> &'static str {
        self.name
    }
}

macro_rules! component {
    (@structure) => { None };
    (@structure $structure:ident) => { Some(Structure::$structure) };
    ($name:literal, $description:literal, $slot:ident, html_only = $html_only:literal $(, $structure:ident)?) => {
        Component {
            name: $name,
            description: $description,
            css: Resource::new(concat!($name, ".css")),
            script: Some(Resource::new(concat!($name, ".js"))),
            slot: LayoutSlot::$slot,
            html_only: $html_only,
            structure: component!(@structure $($structure)?),
        }
    };
}

pub(super) fn builtin() -> Vec<Component> {
    vec![
        component!("toc", "Inline table of contents", None, html_only = false),
        component!(
            "floating-toc",
            "Floating sidebar table of contents (left)",
            Left,
            html_only = true
        ),
        component!(
            "search",
            "Full-text search functionality",
            Header,
            html_only = true
        ),
        component!(
            "footer",
            "Document footer with navigation and info",
            Footer,
            html_only = false
        ),
        component!(
            "sidebar-right",
            "Right sidebar for notes, annotations, or quick links",
            Right,
            html_only = true,
            SidebarRight
        ),
        component!(
            "theme-toggle",
            "Light/dark mode toggle button",
            None,
            html_only = true
        ),
        component!(
            "reading-progress",
            "Progress bar showing scroll position",
            Header,
            html_only = true
        ),
        component!(
            "back-to-top",
            "Floating button to scroll to top",
            None,
            html_only = true
        ),
        component!(
            "sidenotes",
            "Convert footnotes to margin notes",
            None,
            html_only = false
        ),
        component!(
            "equation-numbers",
            "Automatic numbering for equations",
            None,
            html_only = false
        ),
        component!(
            "copy-code",
            "Add copy button to code blocks",
            None,
            html_only = true
        ),
        component!(
            "share-buttons",
            "Floating share menu (Twitter, email, link)",
            None,
            html_only = true
        ),
        component!(
            "citation-generator",
            "Generate BibTeX/APA citation from document metadata",
            None,
            html_only = true
        ),
        component!(
            "reading-time",
            "Display estimated reading time",
            Header,
            html_only = false
        ),
        component!(
            "document-stats",
            "Show word count and section count",
            Footer,
            html_only = false
        ),
        component!(
            "hugo-frontmatter",
            "Generate YAML front matter from LaTeX metadata for Hugo",
            None,
            html_only = false
        ),
        component!(
            "hugo-shortcodes",
            "Wrap LaTeX elements in Hugo shortcode syntax",
            None,
            html_only = false
        ),
        component!(
            "annotations",
            "Personal highlights and notes with localStorage",
            None,
            html_only = true
        ),
        component!(
            "bookmark-progress",
            "Remember reading position with localStorage",
            None,
            html_only = true
        ),
        component!(
            "collapsible-proofs",
            "Toggle visibility of theorem proofs and derivations",
            None,
            html_only = true
        ),
        component!(
            "cross-references",
            "Enhanced equation/theorem/figure cross-references with previews",
            None,
            html_only = false
        ),
        component!(
            "seo-meta",
            "Comprehensive SEO meta tags (Open Graph, Twitter Card, JSON-LD)",
            None,
            html_only = false
        ),
        component!(
            "glossary-tooltips",
            "Hover tooltips for technical terms with definitions",
            None,
            html_only = true
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_name(name: &str) -> Component {
        builtin().into_iter().find(|c| c.name == name).unwrap()
    }

    #[test]
    fn test_every_component_has_script() {
        for component in builtin() {
            assert!(component.script.is_some(), "{}", component.name);
            assert_eq!(component.css.file, format!("{}.css", component.name));
        }
    }

    #[test]
    fn test_slots() {
        assert_eq!(by_name("floating-toc").slot, LayoutSlot::Left);
        assert_eq!(by_name("sidebar-right").slot, LayoutSlot::Right);
        assert_eq!(by_name("search").slot, LayoutSlot::Header);
        assert_eq!(by_name("document-stats").slot, LayoutSlot::Footer);
        assert_eq!(by_name("toc").slot, LayoutSlot::None);
        assert_eq!(LayoutSlot::Header.to_string(), "header");
    }

    #[test]
    fn test_only_sidebar_restructures() {
        let structured: Vec<_> = builtin()
            .into_iter()
            .filter(|c| c.structure.is_some())
            .map(|c| c.name)
            .collect();
        assert_eq!(structured, vec!["sidebar-right"]);
        assert_eq!(by_name("sidebar-right").structure, Some(Structure::SidebarRight));
    }

    #[test]
    fn test_html_only_flags() {
        assert!(by_name("floating-toc").html_only);
        assert!(by_name("search").html_only);
        assert!(!by_name("toc").html_only);
        assert!(!by_name("footer").html_only);
        assert!(!by_name("reading-time").html_only);
    }

    #[test]
    fn test_load_css_and_script() {
        let toc = by_name("toc");
        assert!(toc.css().unwrap().contains(".tex2any-toc"));
        assert!(toc.script.unwrap().load().unwrap().contains("tex2any-toc"));
    }
}
