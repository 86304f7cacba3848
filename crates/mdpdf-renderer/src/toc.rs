//! Heading anchors and table of contents.

use std::collections::HashSet;
use std::fmt::Write;

use crate::util::escape_html;

/// Paragraph text replaced by the table of contents.
pub const TOC_MARKER: &str = "[TOC]";

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Plain heading text.
    pub title: String,
    /// Anchor id assigned to the heading.
    pub id: String,
}

/// Generates unique heading anchors.
#[derive(Debug, Default)]
pub(crate) struct SlugRegistry {
    used: HashSet<String>,
}

impl SlugRegistry {
    /// Record an id that was set explicitly in the source.
    ///
    /// Returns `false` if the id was already taken.
    pub(crate) fn reserve(&mut self, id: &str) -> bool {
        self.used.insert(id.to_owned())
    }

    /// Slugify `text`, appending `_1`, `_2`, ... until the id is unused.
    pub(crate) fn unique(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut candidate = base.clone();
        let mut n = 1;
        while self.used.contains(&candidate) {
            candidate = format!("{base}_{n}");
            n += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

/// Lowercase `text`, drop punctuation and join words with `-`.
pub(crate) fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.trim().chars() {
        if c.is_whitespace() || c == '-' {
            pending_dash = !slug.is_empty();
        } else if c.is_alphanumeric() || c == '_' {
            if pending_dash {
                slug.push('-');
                pending_dash = false;
            }
            slug.extend(c.to_lowercase());
        }
    }

    if slug.is_empty() {
        "section".to_owned()
    } else {
        slug
    }
}

/// Render entries as nested lists inside `<div class="toc">`.
#[must_use]
pub fn render_toc(entries: &[TocEntry]) -> String {
    let mut html = String::from("<div class=\"toc\">\n");
    if entries.is_empty() {
        html.push_str("<ul></ul>\n</div>\n");
        return html;
    }

    // Levels of currently open <ul> elements
    let mut open: Vec<u8> = Vec::new();
    for entry in entries {
        match open.last() {
            None => {
                html.push_str("<ul>\n");
                open.push(entry.level);
            }
            Some(&current) if entry.level > current => {
                html.push_str("\n<ul>\n");
                open.push(entry.level);
            }
            Some(_) => {
                html.push_str("</li>\n");
                while open.len() > 1 && open.last().is_some_and(|&l| entry.level < l) {
                    html.push_str("</ul>\n</li>\n");
                    open.pop();
                }
            }
        }
        let _ = write!(
            html,
            "<li><a href=\"#{}\">{}</a>",
            escape_html(&entry.id),
            escape_html(&entry.title)
        );
    }

    html.push_str("</li>\n");
    while open.pop().is_some() {
        html.push_str("</ul>\n");
        if !open.is_empty() {
            html.push_str("</li>\n");
        }
    }
    html.push_str("</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(level: u8, title: &str, id: &str) -> TocEntry {
        TocEntry {
            level,
            title: title.to_owned(),
            id: id.to_owned(),
        }
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Getting Started"), "getting-started");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("What's new? (v2.0)"), "whats-new-v20");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  a -- b  "), "a-b");
    }

    #[test]
    fn test_slugify_empty_fallback() {
        assert_eq!(slugify("!!!"), "section");
    }

    #[test]
    fn test_unique_suffixes_duplicates() {
        let mut slugs = SlugRegistry::default();
        assert_eq!(slugs.unique("Usage"), "usage");
        assert_eq!(slugs.unique("Usage"), "usage_1");
        assert_eq!(slugs.unique("Usage"), "usage_2");
    }

    #[test]
    fn test_unique_respects_reserved() {
        let mut slugs = SlugRegistry::default();
        assert!(slugs.reserve("intro"));
        assert!(!slugs.reserve("intro"));
        assert_eq!(slugs.unique("Intro"), "intro_1");
    }

    #[test]
    fn test_render_toc_empty() {
        assert_eq!(render_toc(&[]), "<div class=\"toc\">\n<ul></ul>\n</div>\n");
    }

    #[test]
    fn test_render_toc_nested() {
        let html = render_toc(&[
            entry(1, "A", "a"),
            entry(2, "B", "b"),
            entry(1, "C", "c"),
        ]);

        assert_eq!(
            html,
            "<div class=\"toc\">\n<ul>\n<li><a href=\"#a\">A</a>\n<ul>\n<li><a href=\"#b\">B</a></li>\n</ul>\n</li>\n<li><a href=\"#c\">C</a></li>\n</ul>\n</div>\n"
        );
    }

    #[test]
    fn test_render_toc_closes_deep_nesting() {
        let html = render_toc(&[entry(1, "A", "a"), entry(2, "B", "b"), entry(3, "C", "c")]);

        assert!(html.ends_with("<li><a href=\"#c\">C</a></li>\n</ul>\n</li>\n</ul>\n</li>\n</ul>\n</div>\n"));
    }

    #[test]
    fn test_render_toc_escapes_titles() {
        let html = render_toc(&[entry(2, "A & B", "a-b")]);

        assert!(html.contains("<a href=\"#a-b\">A &amp; B</a>"));
    }
}
