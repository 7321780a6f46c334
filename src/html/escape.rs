//! Attribute escaping.

use serde::Serialize;
use std::borrow::Cow;

/// Characters that require escaping inside a quoted attribute.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#x27;"),
        _ => None,
    }
}

/// Escape `& < > " '` for use inside a quoted attribute value.
///
/// Borrows when nothing needs escaping.
pub fn escape_for_attribute(s: &str) -> Cow<'_, str> {
    if !s.contains(&ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Serialize `value` to JSON and escape it for an attribute.
pub fn escape_json_for_attribute<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(escape_for_attribute(&json).into_owned())
}

/// Reverse of [`escape_for_attribute`].
#[cfg(test)]
pub fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        result.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let Some(semi) = rest.find(';') else { break };
        let decoded = match &rest[1..semi] {
            "lt" => Some('<'),
            "gt" => Some('>'),
            "amp" => Some('&'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            e if e.starts_with("#x") || e.starts_with("#X") => {
                u32::from_str_radix(&e[2..], 16).ok().and_then(char::from_u32)
            }
            e if e.starts_with('#') => e[1..].parse().ok().and_then(char::from_u32),
            _ => None,
        };
        match decoded {
            Some(c) => {
                result.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                result.push('&');
                rest = &rest[1..];
            }
        }
    }
    result.push_str(rest);
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_escape_all_specials() {
        assert_eq!(
            escape_for_attribute(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_borrows_plain_text() {
        assert!(matches!(escape_for_attribute("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let value = json!({
            "author_name": "O'Brien & \"Sons\"",
            "custom_text": "<b>bold</b>",
            "copyright_year": "2025",
        });
        let escaped = escape_json_for_attribute(&value).unwrap();
        assert!(!escaped.contains('"'));
        let parsed: Value = serde_json::from_str(&unescape(&escaped)).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_json_round_trip_structured_values() {
        let values = [
            json!({
                "nested": {"list": [1, 2.5, -3, {"deep": [true, false, null]}]},
                "empty": {"arr": [], "obj": {}},
            }),
            json!(["Gödel", "Erdős", "数学", "emoji 📐", "tab\tnew\nline"]),
            json!({"already": "&lt;b&gt; &amp;amp; &quot;q&quot; &#x27;s&#39;"}),
            json!("it's <a href=\"x\">&nbsp;</a>"),
            json!(42),
            json!(null),
            json!(true),
        ];
        for value in values {
            let escaped = escape_json_for_attribute(&value).unwrap();
            assert!(!escaped.contains(['<', '>', '"', '\'']), "{escaped}");
            let parsed: Value = serde_json::from_str(&unescape(&escaped)).unwrap();
            assert_eq!(parsed, value);
        }
    }

    #[test]
    fn test_script_tag_neutralised() {
        let escaped =
            escape_json_for_attribute(&json!({"custom_text": "</script><script>alert(1)</script>"}))
                .unwrap();
        assert!(!escaped.contains("<script>"));
        assert!(!escaped.contains("</script>"));
        assert!(escaped.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_unescape_numeric() {
        assert_eq!(unescape("&#39;&#x27;&apos;"), "'''");
        assert_eq!(unescape("a &unknown; b"), "a &unknown; b");
    }
}
