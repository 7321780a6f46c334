//! Text splicing at tag boundaries.
//!
//! No DOM: tags are located with case-insensitive regexes and the first
//! occurrence wins. Every function here is pure and returns a new string.

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

fn case_insensitive(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern).case_insensitive(true).build().ok()
}

/// Offset of the first `</tag>`.
pub fn find_closing_tag_position(doc: &str, tag: &str) -> Option<usize> {
    let re = case_insensitive(&format!("</{}>", regex::escape(tag)))?;
    re.find(doc).map(|m| m.start())
}

/// Offset just past the `>` of the first `<tag>` or `<tag attrs...>`.
pub fn find_opening_tag_end_position(doc: &str, tag: &str) -> Option<usize> {
    let re = case_insensitive(&format!(r"<{}(?:\s[^>]*)?>", regex::escape(tag)))?;
    re.find(doc).map(|m| m.end())
}

#[inline]
fn splice(doc: &str, at: usize, insert: &[&str]) -> String {
    let extra: usize = insert.iter().map(|s| s.len()).sum();
    let mut out = String::with_capacity(doc.len() + extra);
    out.push_str(&doc[..at]);
    for part in insert {
        out.push_str(part);
    }
    out.push_str(&doc[at..]);
    out
}

/// Insert `fragment` into the document head.
///
/// Before `</head>` if present, else right after `<body>`, else at the start.
pub fn inject_into_head(doc: &str, fragment: &str) -> String {
    if let Some(pos) = find_closing_tag_position(doc, "head") {
        return splice(doc, pos, &[fragment, "\n"]);
    }
    if let Some(pos) = find_opening_tag_end_position(doc, "body") {
        return splice(doc, pos, &["\n", fragment]);
    }
    splice(doc, 0, &[fragment, "\n"])
}

/// Insert `fragment` before `</body>`, or append it.
pub fn inject_before_body_close(doc: &str, fragment: &str) -> String {
    match find_closing_tag_position(doc, "body") {
        Some(pos) => splice(doc, pos, &[fragment, "\n"]),
        None => splice(doc, doc.len(), &["\n", fragment]),
    }
}

fn body_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)(<body[^>]*>)(.*?)(</body>)").unwrap())
}

/// Content between the first `<body…>` and the following `</body>`.
pub fn body_content(doc: &str) -> Option<&str> {
    body_regex()
        .captures(doc)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}

/// Replace the body content with `f(content)`, keeping both body tags.
///
/// `None` when the document has no complete body.
pub fn replace_body(doc: &str, f: impl FnOnce(&str) -> String) -> Option<String> {
    let caps = body_regex().captures(doc)?;
    let whole = caps.get(0)?;
    let (open, content, close) = (&caps[1], &caps[2], &caps[3]);

    let mut out = String::with_capacity(doc.len() + 256);
    out.push_str(&doc[..whole.start()]);
    out.push_str(open);
    out.push_str(&f(content));
    out.push_str(close);
    out.push_str(&doc[whole.end()..]);
    Some(out)
}
