//! Per-format component selection.

use super::Format;
use crate::registry::Registry;

const FLOATING_TOC: &str = "floating-toc";
const INLINE_TOC: &str = "toc";

/// Components that apply to `format`, `None` if nothing is left.
///
/// HTML output keeps the request untouched, unknown names included (the
/// composer rejects those). Other formats drop HTML-only and unknown
/// components; `floating-toc` turns into a leading `toc` where the format
/// has an inline table of contents.
pub fn filter_components(
    registry: &Registry,
    components: &[String],
    format: Format,
) -> Option<Vec<String>> {
    if format.is_html_family() {
        return non_empty(components.to_vec());
    }

    let mut kept: Vec<String> = components
        .iter()
        .filter(|name| {
            registry
                .components
                .find(name)
                .is_some_and(|component| !component.html_only)
        })
        .cloned()
        .collect();

    if format.has_inline_toc()
        && components.iter().any(|name| name == FLOATING_TOC)
        && !kept.iter().any(|name| name == INLINE_TOC)
    {
        kept.insert(0, INLINE_TOC.to_string());
    }

    non_empty(kept)
}

fn non_empty(list: Vec<String>) -> Option<Vec<String>> {
    (!list.is_empty()).then_some(list)
}
