//! Theme descriptors.

use super::Entry;
use crate::error::Result;
use crate::resource::{self, Category};
use std::borrow::Cow;

/// A named stylesheet applied to the whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub description: &'static str,
    /// Stylesheet file under `themes/`.
    pub css_file: &'static str,
}

impl Theme {
    /// Load the theme stylesheet.
    pub fn css(&self) -> Result<Cow<'static, str>> {
        resource::load(Category::Themes, self.css_file)
    }
}

impl Entry for Theme {
    const KIND: &'static str = "theme";

    fn name(&self) -> &'static str {
        self.name
    }
}

macro_rules! theme {
    ($name:literal, $description:literal) => {
        Theme {
            name: $name,
            description: $description,
            css_file: concat!($name, ".css"),
        }
    };
}

pub(super) fn builtin() -> Vec<Theme> {
    vec![
        theme!(
            "academic",
            "Beautiful, minimalistic academic theme with excellent readability"
        ),
        theme!("clean", "Clean minimal theme with good readability"),
        theme!("dark", "Dark mode theme"),
        theme!(
            "minimal",
            "Ultra-minimal theme with maximum focus on content"
        ),
        theme!(
            "serif",
            "Classic serif typography for traditional academic papers"
        ),
        theme!("modern", "Modern, bold design with generous whitespace"),
    ]
}
