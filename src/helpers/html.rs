//! HTML helper functions

use crate::config::HeadTag;

/// Escape text for use in element content or a quoted attribute
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a configured `<head>` tag
///
/// # Examples
/// ```ignore
/// head_tag(&tag) // -> <link rel="preconnect" href="https://fonts.googleapis.com">
/// ```
pub fn head_tag(tag: &HeadTag) -> String {
    let name = escape_html(&tag.tag_name);
    let mut html = format!("<{}", name);
    for (key, value) in &tag.attributes {
        html.push_str(&format!(r#" {}="{}""#, escape_html(key), escape_html(value)));
    }
    html.push('>');

    if !is_void_element(&tag.tag_name) {
        html.push_str(&format!("</{}>", name));
    }
    html
}

fn is_void_element(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "link" | "meta" | "base" | "br" | "hr" | "img" | "input"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("/blog/2024"), "/blog/2024");
    }

    #[test]
    fn test_head_tag() {
        let tag = HeadTag {
            tag_name: "link".to_string(),
            attributes: [("rel", "preconnect"), ("href", "https://fonts.gstatic.com")]
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };
        assert_eq!(
            head_tag(&tag),
            r#"<link rel="preconnect" href="https://fonts.gstatic.com">"#
        );

        let script = HeadTag {
            tag_name: "script".to_string(),
            attributes: [("src", "/a.js")]
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };
        assert_eq!(head_tag(&script), r#"<script src="/a.js"></script>"#);
    }
}
