//! Escaping helpers for text and URLs that end up in toolbar markup.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Schemes an absolute link may use.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// A named, decimal or hex character reference at the start of the input.
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);")
        .expect("valid regex literal")
});

/// Escape text for safe inclusion in HTML content or attribute values.
///
/// Character references already present are kept as-is, so escaping is not
/// applied twice.
pub fn esc_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match tail.as_bytes()[0] {
            b'&' => {
                if let Some(entity) = ENTITY.find(tail) {
                    out.push_str(entity.as_str());
                    rest = &tail[entity.end()..];
                    continue;
                }
                out.push_str("&amp;");
            }
            b'<' => out.push_str("&lt;"),
            b'>' => out.push_str("&gt;"),
            b'"' => out.push_str("&quot;"),
            _ => out.push_str("&#x27;"),
        }
        rest = &tail[1..];
    }

    out.push_str(rest);
    out
}

/// Clean a URL destined for an `href` or `src`.
///
/// Relative references and fragments pass through. Absolute URLs must use an
/// allowed scheme; anything else (including unparseable input) becomes an
/// empty string.
pub fn esc_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let allowed = match Url::parse(trimmed) {
        Ok(url) => ALLOWED_SCHEMES.contains(&url.scheme()),
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    };

    if allowed {
        trimmed.replace(' ', "%20")
    } else {
        String::new()
    }
}

/// Reduce a key to lowercase alphanumerics, dashes and underscores.
pub fn sanitize_key(key: &str) -> String {
    key.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Sanitize a title that embeds an icon, keeping only `img[src,style,alt]`.
pub fn kses_icon_label(html: &str) -> String {
    let mut builder = ammonia::Builder::empty();
    builder
        .add_tags(["img"])
        .add_tag_attributes("img", ["src", "style", "alt"])
        .add_url_schemes(["http", "https"])
        .add_clean_content_tags(["script", "style"]);
    builder.clean(html).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn esc_html_special_chars() {
        assert_eq!(
            esc_html("<script>alert('xss')</script>"),
            "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
        );
        assert_eq!(esc_html("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
    }

    #[test]
    fn esc_html_keeps_existing_entities() {
        assert_eq!(esc_html("Tom &amp; Jerry"), "Tom &amp; Jerry");
        assert_eq!(esc_html("&copy; 2024 &#169; &#xA9;"), "&copy; 2024 &#169; &#xA9;");
        assert_eq!(esc_html("&lt;b&gt; & <b>"), "&lt;b&gt; &amp; &lt;b&gt;");
    }

    #[test]
    fn esc_html_escapes_incomplete_references() {
        assert_eq!(esc_html("R&D"), "R&amp;D");
        assert_eq!(esc_html("&amp"), "&amp;amp");
        assert_eq!(esc_html("&#;"), "&amp;#;");
        assert_eq!(esc_html("a=1&tab=x"), "a=1&amp;tab=x");
    }

    #[test]
    fn esc_html_plain_text_unchanged() {
        assert_eq!(esc_html("Global Header"), "Global Header");
    }

    #[test]
    fn esc_url_keeps_allowed_links() {
        assert_eq!(esc_url("https://breakdance.com/ref/325/"), "https://breakdance.com/ref/325/");
        assert_eq!(esc_url("#"), "#");
        assert_eq!(esc_url("/?breakdance=builder&id=3"), "/?breakdance=builder&id=3");
        assert_eq!(esc_url("edit.php?post_type=page"), "edit.php?post_type=page");
    }

    #[test]
    fn esc_url_rejects_script_schemes() {
        assert_eq!(esc_url("javascript:alert(1)"), "");
        assert_eq!(esc_url("  JavaScript:alert(1)"), "");
        assert_eq!(esc_url("data:text/html,hi"), "");
    }

    #[test]
    fn esc_url_encodes_spaces_and_trims() {
        assert_eq!(esc_url(" https://example.com/a b "), "https://example.com/a%20b");
        assert_eq!(esc_url("   "), "");
    }

    #[test]
    fn sanitize_key_strips_disallowed() {
        assert_eq!(sanitize_key("maintenance-mode"), "maintenance-mode");
        assert_eq!(sanitize_key("Global_Styles"), "global_styles");
        assert_eq!(sanitize_key("api keys!"), "apikeys");
    }

    #[test]
    fn kses_keeps_icon_image() {
        let html = r#"<img src="https://example.com/icon.png" style="width:16px;" alt="">Nav"#;
        let clean = kses_icon_label(html);
        assert!(clean.contains("<img"));
        assert!(clean.contains(r#"src="https://example.com/icon.png""#));
        assert!(clean.contains(r#"style="width:16px;""#));
        assert!(clean.ends_with("Nav"));
    }

    #[test]
    fn kses_drops_everything_else() {
        let html = r#"<img src="https://example.com/i.png" onerror="x()"><script>alert(1)</script><b>Nav</b>"#;
        let clean = kses_icon_label(html);
        assert!(!clean.contains("onerror"));
        assert!(!clean.contains("script"));
        assert!(!clean.contains("alert"));
        assert!(!clean.contains("<b>"));
        assert!(clean.contains("Nav"));
    }
}
