//! Markdown to HTML conversion.
//!
//! [`MarkdownConverter`] is the capability the pipeline depends on;
//! [`GithubConverter`] implements it on top of pulldown-cmark with the
//! behavior GitHub readers expect:
//! - fenced code blocks, tables, strikethrough and task lists
//! - single newlines rendered as `<br />`
//! - heading anchors and `[TOC]` expansion

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

use crate::toc::{SlugRegistry, TOC_MARKER, TocEntry, render_toc};
use crate::util::heading_level_to_num;

/// Result of converting markdown to an HTML fragment.
#[derive(Clone, Debug, Default)]
pub struct ConvertedMarkdown {
    /// HTML fragment.
    pub html: String,
    /// Text of the first H1 heading.
    pub title: Option<String>,
    /// Headings in document order.
    pub toc: Vec<TocEntry>,
}

/// Markdown conversion error.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The conversion engine failed.
    #[error("Markdown conversion failed: {0}")]
    Engine(String),
}

/// Converts markdown text to an HTML fragment.
pub trait MarkdownConverter {
    /// Convert preprocessed markdown.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError`] if the underlying engine fails.
    fn convert(&self, markdown: &str) -> Result<ConvertedMarkdown, ConvertError>;
}

/// pulldown-cmark converter with GitHub-like extensions.
///
/// # Example
///
/// ```
/// use mdpdf_renderer::{GithubConverter, MarkdownConverter};
///
/// let result = GithubConverter::new()
///     .convert("# Hello\n\nfirst\nsecond")
///     .unwrap();
///
/// assert_eq!(result.title.as_deref(), Some("Hello"));
/// assert!(result.html.contains(r#"<h1 id="hello">Hello</h1>"#));
/// assert!(result.html.contains("first<br />"));
/// ```
#[derive(Clone, Debug)]
pub struct GithubConverter {
    hard_breaks: bool,
    toc: bool,
}

impl GithubConverter {
    /// Create a converter with hard breaks and `[TOC]` expansion enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hard_breaks: true,
            toc: true,
        }
    }

    /// Render single newlines as `<br />` (enabled by default).
    #[must_use]
    pub fn with_hard_breaks(mut self, enabled: bool) -> Self {
        self.hard_breaks = enabled;
        self
    }

    /// Replace `[TOC]` paragraphs with a table of contents (enabled by default).
    #[must_use]
    pub fn with_toc(mut self, enabled: bool) -> Self {
        self.toc = enabled;
        self
    }

    /// Parser options.
    #[must_use]
    pub fn parser_options() -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES
    }
}

impl Default for GithubConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownConverter for GithubConverter {
    fn convert(&self, markdown: &str) -> Result<ConvertedMarkdown, ConvertError> {
        let mut events: Vec<Event<'_>> = Parser::new_ext(markdown, Self::parser_options()).collect();

        let (title, toc) = assign_heading_ids(&mut events);

        let markers = if self.toc {
            find_toc_markers(&events)
        } else {
            Vec::new()
        };
        let toc_html = if markers.is_empty() {
            String::new()
        } else {
            render_toc(&toc)
        };

        let hard_breaks = self.hard_breaks;
        let events = events
            .into_iter()
            .enumerate()
            .filter_map(|(idx, event)| {
                match markers.iter().find(|(start, end)| (*start..=*end).contains(&idx)) {
                    Some((start, _)) if *start == idx => Some(Event::Html(toc_html.clone().into())),
                    Some(_) => None,
                    None if hard_breaks && matches!(event, Event::SoftBreak) => Some(Event::HardBreak),
                    None => Some(event),
                }
            });

        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut output, events);

        tracing::debug!(
            headings = toc.len(),
            toc_markers = markers.len(),
            "Converted markdown"
        );

        Ok(ConvertedMarkdown {
            html: output,
            title,
            toc,
        })
    }
}

/// Give every heading a unique `id` and collect the outline.
///
/// Ids set with `{#id}` attributes are kept and reserved before any
/// generated id is assigned. Returns the first H1 text as title along with
/// the entries.
fn assign_heading_ids(events: &mut [Event<'_>]) -> (Option<String>, Vec<TocEntry>) {
    let mut slugs = SlugRegistry::default();
    for event in events.iter() {
        if let Event::Start(Tag::Heading { id: Some(id), .. }) = event
            && !slugs.reserve(id)
        {
            tracing::warn!(id = %id, "Duplicate heading id");
        }
    }

    let mut title = None;
    let mut toc = Vec::new();

    let mut idx = 0;
    while idx < events.len() {
        let Event::Start(Tag::Heading { level, id, .. }) = &events[idx] else {
            idx += 1;
            continue;
        };
        let level = *level;
        let explicit = id.as_ref().map(ToString::to_string);

        let end = events[idx..]
            .iter()
            .position(|e| matches!(e, Event::End(TagEnd::Heading(_))))
            .map_or(events.len(), |offset| idx + offset);
        let text = plain_text(&events[idx + 1..end]);

        let anchor = explicit.unwrap_or_else(|| slugs.unique(&text));
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[idx] {
            *id = Some(anchor.clone().into());
        }

        if level == HeadingLevel::H1 && title.is_none() {
            title = Some(text.clone());
        }
        toc.push(TocEntry {
            level: heading_level_to_num(level),
            title: text,
            id: anchor,
        });

        idx = end + 1;
    }

    (title, toc)
}

/// Concatenated text of inline events.
fn plain_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        if let Event::Text(t) | Event::Code(t) = event {
            text.push_str(t);
        }
    }
    text
}

/// Index ranges (inclusive) of paragraphs consisting only of `[TOC]`.
fn find_toc_markers(events: &[Event<'_>]) -> Vec<(usize, usize)> {
    let mut markers = Vec::new();

    for (start, event) in events.iter().enumerate() {
        if !matches!(event, Event::Start(Tag::Paragraph)) {
            continue;
        }
        let Some(len) = events[start + 1..]
            .iter()
            .position(|e| !matches!(e, Event::Text(_)))
        else {
            continue;
        };
        let end = start + 1 + len;
        if matches!(events[end], Event::End(TagEnd::Paragraph))
            && plain_text(&events[start + 1..end]).trim() == TOC_MARKER
        {
            markers.push((start, end));
        }
    }

    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn convert(markdown: &str) -> ConvertedMarkdown {
        GithubConverter::new().convert(markdown).unwrap()
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(convert("Hello *world*").html, "<p>Hello <em>world</em></p>\n");
    }

    #[test]
    fn test_soft_break_becomes_br() {
        assert_eq!(convert("one\ntwo").html, "<p>one<br />\ntwo</p>\n");
    }

    #[test]
    fn test_soft_break_kept_when_disabled() {
        let result = GithubConverter::new()
            .with_hard_breaks(false)
            .convert("one\ntwo")
            .unwrap();
        assert_eq!(result.html, "<p>one\ntwo</p>\n");
    }

    #[test]
    fn test_fenced_code_block() {
        let html = convert("```rust\nfn main() {}\n```").html;
        assert_eq!(
            html,
            "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>\n"
        );
    }

    #[test]
    fn test_code_block_newlines_not_converted() {
        let html = convert("```\na\nb\n```").html;
        assert!(!html.contains("<br />"));
    }

    #[test]
    fn test_table() {
        let html = convert("| A | B |\n|---|---|\n| 1 | 2 |").html;
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>A</th>"));
        assert!(html.contains("<td>2</td>"));
    }

    #[test]
    fn test_heading_ids_and_title() {
        let result = convert("# Main Title\n\n## Setup\n\n## Setup\n");

        assert_eq!(result.title.as_deref(), Some("Main Title"));
        assert!(result.html.contains("<h1 id=\"main-title\">Main Title</h1>"));
        assert!(result.html.contains("<h2 id=\"setup\">Setup</h2>"));
        assert!(result.html.contains("<h2 id=\"setup_1\">Setup</h2>"));
        assert_eq!(
            result.toc,
            vec![
                TocEntry {
                    level: 1,
                    title: "Main Title".to_owned(),
                    id: "main-title".to_owned(),
                },
                TocEntry {
                    level: 2,
                    title: "Setup".to_owned(),
                    id: "setup".to_owned(),
                },
                TocEntry {
                    level: 2,
                    title: "Setup".to_owned(),
                    id: "setup_1".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_explicit_heading_id_kept() {
        let result = convert("## Install {#install-guide}\n");

        assert!(result.html.contains("<h2 id=\"install-guide\">Install</h2>"));
        assert_eq!(result.toc[0].id, "install-guide");
    }

    #[test]
    fn test_explicit_id_wins_over_earlier_generated_id() {
        let result = convert("## Setup\n\n## Other {#setup}\n");

        assert!(result.html.contains("<h2 id=\"setup_1\">Setup</h2>"));
        assert!(result.html.contains("<h2 id=\"setup\">Other</h2>"));
        assert_eq!(result.html.matches("id=\"setup\"").count(), 1);
    }

    #[test]
    fn test_title_from_first_h1_only() {
        let result = convert("## Intro\n\n# First\n\n# Second\n");
        assert_eq!(result.title.as_deref(), Some("First"));
    }

    #[test]
    fn test_title_includes_inline_code() {
        let result = convert("# The `mdpdf` tool\n");
        assert_eq!(result.title.as_deref(), Some("The mdpdf tool"));
    }

    #[test]
    fn test_no_heading_no_title() {
        assert_eq!(convert("text").title, None);
    }

    #[test]
    fn test_toc_marker_replaced() {
        let html = convert("[TOC]\n\n# A\n\n## B\n").html;

        assert!(html.starts_with("<div class=\"toc\">\n<ul>\n<li><a href=\"#a\">A</a>"));
        assert!(!html.contains("[TOC]"));
    }

    #[test]
    fn test_toc_marker_inside_text_kept() {
        let html = convert("See [TOC] here\n\n# A\n").html;
        assert!(html.contains("<p>See [TOC] here</p>"));
        assert!(!html.contains("class=\"toc\""));
    }

    #[test]
    fn test_toc_disabled() {
        let result = GithubConverter::new()
            .with_toc(false)
            .convert("[TOC]\n\n# A\n")
            .unwrap();
        assert!(result.html.contains("<p>[TOC]</p>"));
    }

    #[test]
    fn test_alert_html_block_passes_through() {
        let markdown = crate::preprocess_alerts("> [!WARNING]\n> Careful\n");
        let html = convert(&markdown).html;

        assert!(html.contains("<div class=\"markdown-alert markdown-alert-warning\">"));
        assert!(html.contains("<p>Careful</p>"));
        assert!(!html.contains("<blockquote>"));
    }

    #[test]
    fn test_alert_with_blank_quote_line_stays_one_block() {
        let markdown = crate::preprocess_alerts("> [!NOTE]\n> first\n>\n> second *em*\n\nAfter\n");
        let html = convert(&markdown).html;

        assert!(html.contains("<p>first\nsecond *em*</p>\n</div>\n<p>After</p>"));
        assert!(!html.contains("<em>"));
        assert_eq!(html.matches("<p>").count(), 2);
    }

    #[test]
    fn test_malformed_alert_renders_blockquote() {
        let markdown = crate::preprocess_alerts("> [!NOTE\n> text\n");
        let html = convert(&markdown).html;

        assert!(html.contains("<blockquote>"));
        assert!(!html.contains("markdown-alert"));
    }
}
