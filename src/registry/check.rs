//! Startup check that every declared resource can be loaded.

use super::Registry;
use crate::log;
use crate::resource::{self, Category};

/// Declared resources that can't be found, as `category/file`.
pub fn missing_resources(registry: &Registry) -> Vec<String> {
    let mut missing = Vec::new();

    for theme in registry.themes.list() {
        if !resource::exists(Category::Themes, theme.css_file) {
            missing.push(format!("{}/{}", Category::Themes, theme.css_file));
        }
    }

    for component in registry.components.list() {
        let declared = std::iter::once(component.css).chain(component.script);
        for res in declared {
            if !res.exists() {
                missing.push(format!("{}/{}", Category::Components, res.file));
            }
        }
    }

    missing
}

/// Warn once about missing resources. Never fails.
pub fn self_check(registry: &Registry) {
    let missing = missing_resources(registry);
    if !missing.is_empty() {
        log!(
            "warning";
            "missing resource files: {}. These themes/components will fail when used.",
            missing.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Component, LayoutSlot, Resource, Table};

    #[test]
    fn test_builtin_catalogue_is_complete() {
        assert!(missing_resources(&Registry::builtin()).is_empty());
    }

    #[test]
    fn test_reports_missing_script() {
        let mut registry = Registry::builtin();
        registry.components = Table::new(vec![Component {
            name: "ghost",
            description: "no files",
            css: Resource::new("toc.css"),
            script: Some(Resource::new("ghost.js")),
            slot: LayoutSlot::None,
            html_only: false,
            structure: None,
        }]);

        assert_eq!(missing_resources(&registry), vec!["components/ghost.js"]);
        // warning only
        self_check(&registry);
    }
}
