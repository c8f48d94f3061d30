//! Reply markup.
//!
//! The prediction endpoint answers with browser-ready HTML fragments:
//! `<br>` separated paragraphs and `<a href='…'>` links. The terminal has no
//! HTML renderer, so replies are flattened to plain text before drawing.

use once_cell::sync::Lazy;
use regex::Regex;

static BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid line break pattern"));

static ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<a\s[^>]*?href\s*=\s*['"]([^'"]*)['"][^>]*>(.*?)</a\s*>"#)
        .expect("valid anchor pattern")
});

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    // last, so "&amp;lt;" decodes to "&lt;" rather than "<"
    ("&amp;", "&"),
];

/// Converts an HTML reply fragment into plain text lines.
pub fn to_plain_text(html: &str) -> String {
    let text = BREAK_RE.replace_all(html, "\n");

    let text = ANCHOR_RE.replace_all(&text, |caps: &regex::Captures<'_>| {
        let url = caps[1].trim();
        let label = TAG_RE.replace_all(&caps[2], "");
        let label = label.trim();
        if label.is_empty() || label == url {
            url.to_string()
        } else {
            format!("{} ({})", label, url)
        }
    });

    let mut text = TAG_RE.replace_all(&text, "").into_owned();
    for (entity, plain) in ENTITIES {
        text = text.replace(entity, plain);
    }

    text.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(to_plain_text("I do not understand..."), "I do not understand...");
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(
            to_plain_text("Here are the details:<br><br>Title: Up<BR/>Runtime: 96 minutes<br />"),
            "Here are the details:\n\nTitle: Up\nRuntime: 96 minutes"
        );
    }

    #[test]
    fn test_anchor_becomes_label_and_url() {
        let html = "<a href='https://github.com/example' style='color: blue' target='_blank'>GitHub Profile</a><br><br>";
        assert_eq!(to_plain_text(html), "GitHub Profile (https://github.com/example)");
    }

    #[test]
    fn test_anchor_with_same_label_keeps_url_once() {
        let html = r#"<a href="https://example.com">https://example.com</a>"#;
        assert_eq!(to_plain_text(html), "https://example.com");
    }

    #[test]
    fn test_other_tags_stripped_and_entities_decoded() {
        assert_eq!(
            to_plain_text("<b>Tom &amp; Jerry</b> &lt;3&nbsp;it"),
            "Tom & Jerry <3 it"
        );
    }
}
