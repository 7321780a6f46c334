//! Structural body rewrites.

use super::inject::replace_body;
use crate::registry::Structure;

/// Apply `structure` to the document. `None` if the body can't be located.
pub fn apply(doc: &str, structure: Structure) -> Option<String> {
    match structure {
        Structure::SidebarRight => wrap_sidebar_right(doc),
    }
}

/// Two-column layout: body content in `<main>`, an empty sidebar on the
/// right for the component script to fill.
pub fn wrap_sidebar_right(doc: &str) -> Option<String> {
    replace_body(doc, |content| {
        format!(
            r#"

<div class="tex2any-layout-with-sidebar-right">
  <main class="tex2any-main-content">
    {content}
  </main>
  <aside class="tex2any-sidebar-right">
    <section class="tex2any-sidebar-section">
      <h3>Quick Links</h3>
      <ul class="tex2any-quick-links">
        <!-- populated by sidebar-right.js -->
      </ul>
    </section>
    <section class="tex2any-sidebar-section">
      <h3>Metadata</h3>
      <dl class="tex2any-metadata">
        <!-- populated by sidebar-right.js -->
      </dl>
    </section>
  </aside>
</div>

"#,
            content = content.trim()
        )
    })
}
