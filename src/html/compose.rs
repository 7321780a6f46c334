//! Theme and component composition over a generated HTML file.
//!
//! Every public operation is a full read-modify-write of the target file.
//! Operations are not transactional with respect to each other: a layout
//! rewrite from [`Composer::inject_html_elements`] stays on disk even if the
//! following [`Composer::apply_theme_and_components`] fails.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use regex::Regex;

use super::{escape::escape_json_for_attribute, inject, layout};
use crate::asset::{AssetKind, minify::minify_or_keep};
use crate::config::{FooterData, cfg};
use crate::error::{Error, Result};
use crate::registry::{Component, Registry, Theme};
use crate::{debug, log};

/// Class of the `<div>` wrapping the original body content.
pub const CONTENT_WRAPPER_CLASS: &str = "tex2any-content-wrapper";

/// Name of the meta tag carrying footer settings.
pub const FOOTER_META_NAME: &str = "tex2any-footer-config";

const CONTAINER_CSS: &str = "/* Container for component positioning */
.tex2any-content-wrapper {
    position: relative;
    min-height: 100vh;
}";

/// Composer bound to one HTML file.
#[derive(Debug)]
pub struct Composer<'r> {
    path: PathBuf,
    registry: &'r Registry,
    footer: FooterData,
    minify: bool,
}

impl<'r> Composer<'r> {
    /// Bind to an existing HTML file.
    ///
    /// Footer settings default to the current config snapshot.
    pub fn open(path: impl AsRef<Path>, registry: &'r Registry) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::file_not_found("HTML file", path));
        }
        Ok(Self {
            path: path.to_path_buf(),
            registry,
            footer: cfg().footer_data(),
            minify: false,
        })
    }

    pub fn with_footer(mut self, footer: FooterData) -> Self {
        self.footer = footer;
        self
    }

    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Inject theme and component assets into the document.
    ///
    /// Fails without touching the file if any name is unknown.
    pub fn apply_theme_and_components(
        &self,
        theme: Option<&str>,
        components: &[String],
    ) -> Result<()> {
        let theme = theme.map(|name| self.registry.themes.get(name)).transpose()?;
        let components = components
            .iter()
            .map(|name| self.registry.components.get(name))
            .collect::<Result<Vec<_>>>()?;

        let doc = self.read()?;
        let doc = compose(&doc, theme, &components, &self.footer, self.minify)?;
        self.write(&doc)?;

        log!(
            "compose";
            "applied {} and {} component(s) to {}",
            theme.map_or("no theme", |t| t.name),
            components.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Apply structural rewrites declared by the requested components.
    ///
    /// Names without a rewrite, and unknown names, are ignored here.
    pub fn inject_html_elements(&self, components: &[String]) -> Result<()> {
        let structures: Vec<_> = components
            .iter()
            .filter_map(|name| self.registry.components.find(name))
            .filter_map(|component| component.structure.map(|s| (component.name, s)))
            .collect();
        if structures.is_empty() {
            return Ok(());
        }

        let mut doc = self.read()?;
        let mut changed = false;
        for (name, structure) in structures {
            match layout::apply(&doc, structure) {
                Some(rewritten) => {
                    doc = rewritten;
                    changed = true;
                }
                None => debug!("compose"; "no <body> to restructure for {}", name),
            }
        }

        if changed {
            self.write(&doc)?;
        }
        Ok(())
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|err| Error::io("read", &self.path, err))
    }

    fn write(&self, doc: &str) -> Result<()> {
        fs::write(&self.path, doc).map_err(|err| Error::io("write", &self.path, err))
    }
}

/// Whether `content` already holds the wrapper element.
///
/// Matches the opening tag only; scripts mentioning the class name don't count.
fn has_wrapper(content: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)<div\b[^>]*\bclass\s*=\s*["']tex2any-content-wrapper["']"#).unwrap()
    })
    .is_match(content)
}

/// Wrap the body content once. `None` if there's no body or it's wrapped.
fn wrap_in_container(doc: &str) -> Option<String> {
    let content = inject::body_content(doc)?;
    if has_wrapper(content) {
        return None;
    }
    inject::replace_body(doc, |content| {
        format!(
            "\n<div class=\"{CONTENT_WRAPPER_CLASS}\">\n{}\n</div>\n",
            content.trim()
        )
    })
}

fn footer_meta(footer: &FooterData) -> Result<String> {
    let content = escape_json_for_attribute(footer)
        .map_err(|err| Error::InvalidValue(format!("footer config: {err}")))?;
    Ok(format!(
        r#"<meta name="{FOOTER_META_NAME}" content="{content}">"#
    ))
}

/// Compose a document in memory.
fn compose(
    doc: &str,
    theme: Option<&Theme>,
    components: &[&Component],
    footer: &FooterData,
    minify: bool,
) -> Result<String> {
    let mut doc = doc.to_string();
    let mut css_parts = Vec::new();

    if let Some(wrapped) = wrap_in_container(&doc) {
        doc = wrapped;
        css_parts.push(CONTAINER_CSS.to_string());
    }

    if components.iter().any(|c| c.name == "footer")
        && !doc.contains(&format!(r#"name="{FOOTER_META_NAME}""#))
    {
        doc = inject::inject_into_head(&doc, &footer_meta(footer)?);
    }

    if let Some(theme) = theme {
        let css = theme.css()?;
        let css = prepare(AssetKind::Css, theme.name, &css, minify);
        css_parts.push(format!("/* Theme: {} */\n{}", theme.name, css));
    }

    for component in components {
        let css = component.css()?;
        let css = prepare(AssetKind::Css, component.name, &css, minify);
        css_parts.push(format!("/* Component: {} */\n{}", component.name, css));
    }

    if !css_parts.is_empty() {
        let style = format!("<style>\n{}\n</style>", css_parts.join("\n\n"));
        doc = inject::inject_into_head(&doc, &style);
    }

    let mut js_parts = Vec::new();
    for component in components {
        let Some(script) = component.script else {
            continue;
        };
        match script.load() {
            Ok(js) if !js.trim().is_empty() => {
                let js = prepare(AssetKind::Js, component.name, &js, minify);
                js_parts.push(format!("/* Component JS: {} */\n{}", component.name, js));
            }
            Ok(_) => {}
            Err(err) => debug!("compose"; "skipping script for {}: {}", component.name, err),
        }
    }

    if !js_parts.is_empty() {
        let script = format!("<script>\n{}\n</script>", js_parts.join("\n\n"));
        doc = inject::inject_before_body_close(&doc, &script);
    }

    Ok(doc)
}

fn prepare(kind: AssetKind, name: &str, source: &str, minify: bool) -> String {
    if minify {
        minify_or_keep(kind, name, source).into_owned()
    } else {
        source.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::html::escape::unescape;
    use tempfile::TempDir;

    const PRISTINE: &str = "<!DOCTYPE html>
<html>
<head>
<title>Paper</title>
</head>
<body>
<div class=\"ltx_page_main\"><h1 class=\"ltx_title_document\">Paper</h1></div>
</body>
</html>
";

    fn fixture(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.html");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn footer() -> FooterData {
        FooterData {
            author_name: "Jane \"JD\" Doe".into(),
            author_email: "jane@example.org".into(),
            copyright_year: "2025".into(),
            license: "CC BY 4.0".into(),
            custom_text: "<script>alert('x')</script>".into(),
        }
    }

    #[test]
    fn test_open_missing_file() {
        let registry = Registry::builtin();
        let err = Composer::open("/nonexistent/index.html", &registry).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().starts_with("HTML file not found: "));
    }

    #[test]
    fn test_pristine_with_theme_and_toc() {
        let (_temp, path) = fixture(PRISTINE);
        let registry = Registry::builtin();
        let composer = Composer::open(&path, &registry).unwrap();
        composer
            .apply_theme_and_components(Some("academic"), &names(&["toc"]))
            .unwrap();

        let out = fs::read_to_string(&path).unwrap();
        assert_eq!(out.matches("<div class=\"tex2any-content-wrapper\">").count(), 1);
        assert_eq!(out.matches("<style>").count(), 1);
        assert_eq!(out.matches("<script>").count(), 1);
        assert!(out.contains("/* Theme: academic */"));
        assert!(out.contains("/* Component: toc */"));
        assert!(out.contains("/* Component JS: toc */"));

        let style = out.find("<style>").unwrap();
        let head_close = out.find("</head>").unwrap();
        assert!(style < head_close);
        assert!(out.find("/* Theme: academic */").unwrap() < out.find("/* Component: toc */").unwrap());

        // wrapper closes, then scripts, then </body>
        assert!(out.contains("</div>\n<script>\n"));
        assert!(out.contains("</script>\n</body>"));
    }

    #[test]
    fn test_wrap_is_idempotent() {
        let (_temp, path) = fixture(PRISTINE);
        let registry = Registry::builtin();
        let composer = Composer::open(&path, &registry).unwrap();
        composer.apply_theme_and_components(None, &[]).unwrap();
        composer.apply_theme_and_components(Some("dark"), &[]).unwrap();

        let out = fs::read_to_string(&path).unwrap();
        assert_eq!(out.matches("<div class=\"tex2any-content-wrapper\">").count(), 1);
    }

    #[test]
    fn test_class_name_in_text_still_wraps() {
        let doc = "<html><head></head><body>\n<p>.tex2any-content-wrapper</p>\n\
                   <script>document.querySelector('.tex2any-content-wrapper');</script>\n</body></html>";
        let out = wrap_in_container(doc).unwrap();
        assert_eq!(out.matches("<div class=\"tex2any-content-wrapper\">").count(), 1);
        assert!(wrap_in_container(&out).is_none());
    }

    #[test]
    fn test_has_wrapper_matches_tag_only() {
        assert!(has_wrapper("<DIV id=\"x\" class='tex2any-content-wrapper'>"));
        assert!(!has_wrapper("var sel = '.tex2any-content-wrapper';"));
        assert!(!has_wrapper("<div class=\"tex2any-content-wrapper-extra\">"));
    }

    #[test]
    fn test_missing_body_does_not_fail() {
        let (_temp, path) = fixture("<html><head></head><p>fragment</p></html>");
        let registry = Registry::builtin();
        let composer = Composer::open(&path, &registry).unwrap();
        composer
            .apply_theme_and_components(Some("minimal"), &names(&["back-to-top"]))
            .unwrap();

        let out = fs::read_to_string(&path).unwrap();
        assert!(!out.contains("<div class=\"tex2any-content-wrapper\">"));
        assert!(out.contains("/* Theme: minimal */"));
        // no </body>: script appended at the end
        assert!(out.trim_end().ends_with("</script>"));
    }

    #[test]
    fn test_footer_meta() {
        let (_temp, path) = fixture(PRISTINE);
        let registry = Registry::builtin();
        let composer = Composer::open(&path, &registry)
            .unwrap()
            .with_footer(footer());
        composer
            .apply_theme_and_components(None, &names(&["footer"]))
            .unwrap();

        let out = fs::read_to_string(&path).unwrap();
        assert_eq!(out.matches(FOOTER_META_NAME).count(), 2); // meta + footer.js
        assert_eq!(out.matches("<meta name=\"tex2any-footer-config\"").count(), 1);

        let start = out.find("content=\"").unwrap() + "content=\"".len();
        let end = start + out[start..].find('"').unwrap();
        let raw = &out[start..end];
        assert!(!raw.contains("<script>"));
        let parsed: FooterData = serde_json::from_str(&unescape(raw)).unwrap();
        assert_eq!(parsed, footer());
    }

    #[test]
    fn test_footer_meta_injected_once() {
        let (_temp, path) = fixture(PRISTINE);
        let registry = Registry::builtin();
        let composer = Composer::open(&path, &registry).unwrap();
        for _ in 0..2 {
            composer
                .apply_theme_and_components(None, &names(&["footer"]))
                .unwrap();
        }

        let out = fs::read_to_string(&path).unwrap();
        assert_eq!(out.matches("<meta name=\"tex2any-footer-config\"").count(), 1);
        assert_eq!(out.matches("<div class=\"tex2any-content-wrapper\">").count(), 1);
    }

    #[test]
    fn test_no_footer_meta_without_footer() {
        let (_temp, path) = fixture(PRISTINE);
        let registry = Registry::builtin();
        Composer::open(&path, &registry)
            .unwrap()
            .apply_theme_and_components(None, &names(&["toc"]))
            .unwrap();
        let out = fs::read_to_string(&path).unwrap();
        assert!(!out.contains("<meta name=\"tex2any-footer-config\""));
    }

    #[test]
    fn test_unknown_theme_leaves_file_untouched() {
        let (_temp, path) = fixture(PRISTINE);
        let registry = Registry::builtin();
        let composer = Composer::open(&path, &registry).unwrap();
        let err = composer
            .apply_theme_and_components(Some("neon"), &[])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(fs::read_to_string(&path).unwrap(), PRISTINE);
    }

    #[test]
    fn test_unknown_component_after_layout_is_not_rolled_back() {
        let (_temp, path) = fixture(PRISTINE);
        let registry = Registry::builtin();
        let composer = Composer::open(&path, &registry).unwrap();
        let requested = names(&["sidebar-right", "does-not-exist"]);

        composer.inject_html_elements(&requested).unwrap();
        let err = composer
            .apply_theme_and_components(Some("academic"), &requested)
            .unwrap_err();
        assert!(err.to_string().starts_with("Unknown component: does-not-exist"));

        let out = fs::read_to_string(&path).unwrap();
        assert!(out.contains("tex2any-layout-with-sidebar-right"));
        assert!(!out.contains("<style>"));
        assert!(!out.contains(CONTENT_WRAPPER_CLASS));
    }

    #[test]
    fn test_inject_html_elements_ignores_plain_components() {
        let (_temp, path) = fixture(PRISTINE);
        let registry = Registry::builtin();
        let composer = Composer::open(&path, &registry).unwrap();
        composer
            .inject_html_elements(&names(&["toc", "unknown", "footer"]))
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), PRISTINE);
    }

    #[test]
    fn test_sidebar_then_compose() {
        let (_temp, path) = fixture(PRISTINE);
        let registry = Registry::builtin();
        let composer = Composer::open(&path, &registry).unwrap();
        let requested = names(&["sidebar-right"]);
        composer.inject_html_elements(&requested).unwrap();
        composer
            .apply_theme_and_components(Some("academic"), &requested)
            .unwrap();

        let out = fs::read_to_string(&path).unwrap();
        let wrapper = out.find("<div class=\"tex2any-content-wrapper\">").unwrap();
        let layout = out.find("<div class=\"tex2any-layout-with-sidebar-right\">").unwrap();
        assert!(wrapper < layout);
        assert!(out.contains("/* Component: sidebar-right */"));
    }

    #[test]
    fn test_minified_assets_keep_comments() {
        let registry = Registry::builtin();
        let theme = registry.themes.get("clean").unwrap();
        let toc = registry.components.get("toc").unwrap();
        let plain = compose(PRISTINE, Some(theme), &[toc], &FooterData::default(), false).unwrap();
        let min = compose(PRISTINE, Some(theme), &[toc], &FooterData::default(), true).unwrap();

        assert!(min.len() < plain.len());
        assert!(min.contains("/* Theme: clean */\n"));
        assert!(min.contains("/* Component: toc */\n"));
        assert!(min.contains("/* Component JS: toc */\n"));
        assert_eq!(min.matches("<style>").count(), 1);
    }

    #[test]
    fn test_uppercase_tags() {
        let registry = Registry::builtin();
        let toc = registry.components.get("toc").unwrap();
        let doc = "<HTML><HEAD></HEAD><BODY><P>x</P></BODY></HTML>";
        let out = compose(doc, None, &[toc], &FooterData::default(), false).unwrap();

        assert!(out.find("<style>").unwrap() < out.find("</HEAD>").unwrap());
        assert!(out.find("<script>").unwrap() < out.find("</BODY>").unwrap());
        assert!(out.contains("<div class=\"tex2any-content-wrapper\">\n<P>x</P>\n</div>"));
    }
}
