//! Shared utility functions for HTML rendering.

use std::path::Path;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use pulldown_cmark::HeadingLevel;

/// Escape text for use in HTML content and attribute values.
///
/// ```
/// use mdpdf_renderer::escape_html;
///
/// assert_eq!(escape_html("R&D <lab>"), "R&amp;D &lt;lab&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Convert heading level enum to number (1-6).
#[must_use]
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Image media type derived from the file extension.
///
/// Unknown extensions fall back to `image/png`.
#[must_use]
pub fn image_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    }
}

/// Encode image bytes as a base64 `data:` URI.
#[must_use]
pub fn image_data_uri(path: &Path, data: &[u8]) -> String {
    let base64 = BASE64_STANDARD.encode(data);
    format!("data:{};base64,{base64}", image_mime_type(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_quotes() {
        assert_eq!(escape_html(r#"a "b" 'c'"#), "a &quot;b&quot; &#39;c&#39;");
    }

    #[test]
    fn test_escape_html_plain_unchanged() {
        assert_eq!(escape_html("Example University"), "Example University");
    }

    #[test]
    fn test_mime_known_extensions() {
        assert_eq!(image_mime_type(Path::new("logo.png")), "image/png");
        assert_eq!(image_mime_type(Path::new("logo.jpg")), "image/jpeg");
        assert_eq!(image_mime_type(Path::new("logo.JPEG")), "image/jpeg");
        assert_eq!(image_mime_type(Path::new("logo.webp")), "image/webp");
        assert_eq!(image_mime_type(Path::new("logo.svg")), "image/svg+xml");
    }

    #[test]
    fn test_mime_unknown_defaults_to_png() {
        assert_eq!(image_mime_type(Path::new("logo.gif")), "image/png");
        assert_eq!(image_mime_type(Path::new("logo")), "image/png");
    }

    #[test]
    fn test_image_data_uri() {
        assert_eq!(
            image_data_uri(Path::new("dot.svg"), b"<svg/>"),
            "data:image/svg+xml;base64,PHN2Zy8+"
        );
    }

    #[test]
    fn test_heading_level_to_num() {
        assert_eq!(heading_level_to_num(HeadingLevel::H1), 1);
        assert_eq!(heading_level_to_num(HeadingLevel::H6), 6);
    }
}
