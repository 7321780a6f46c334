//! `--list-*` catalogue output.

use std::fmt::Write;

use crate::convert::Format;
use crate::registry::{LayoutSlot, Registry};

pub fn themes(registry: &Registry) -> String {
    let mut out = String::from("Available themes:\n");
    for theme in registry.themes.list() {
        writeln!(out, "  {:15} - {}", theme.name, theme.description).ok();
    }
    out
}

/// Components, with their layout slot when they occupy one.
pub fn components(registry: &Registry) -> String {
    let mut out = String::from("Available components:\n");
    for component in registry.components.list() {
        writeln!(out, "  {:15} - {}", component.name, component.description).ok();
        if component.slot != LayoutSlot::None {
            writeln!(out, "{:19}(Position: {})", "", component.slot).ok();
        }
    }
    out
}

pub fn formats() -> String {
    let mut out = String::from("Supported formats:\n");
    for format in Format::ALL {
        writeln!(out, "  {:12} - {}", format.name(), format.description()).ok();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_listing() {
        let out = themes(&Registry::builtin());
        assert!(out.starts_with("Available themes:\n"));
        assert!(out.contains("  academic        - "));
        assert_eq!(out.lines().count(), 7);
    }

    #[test]
    fn test_components_show_slot() {
        let out = components(&Registry::builtin());
        let lines: Vec<_> = out.lines().collect();
        let floating = lines
            .iter()
            .position(|l| l.starts_with("  floating-toc "))
            .unwrap();
        assert_eq!(lines[floating + 1], "                   (Position: left)");

        // slotless components have no position line
        let toc = lines.iter().position(|l| l.starts_with("  toc ")).unwrap();
        assert!(!lines[toc + 1].contains("Position"));
    }

    #[test]
    fn test_formats_listing() {
        let out = formats();
        assert_eq!(out.lines().count(), 1 + Format::ALL.len());
        assert!(out.contains("  markdown     - "));
    }
}
