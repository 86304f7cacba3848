//! GitHub alert preprocessing.
//!
//! Rewrites blockquote callouts into HTML blocks before markdown conversion:
//!
//! ```markdown
//! > [!WARNING]
//! > Back up your data first.
//! ```
//!
//! The marker line must start with `>` at column zero and end with a line
//! break. The body is every directly following line that starts with `>`;
//! the first line without it (a blank line included) ends the block. Because
//! the body is greedy, a second marker directly below an alert's body is
//! part of that body, and nested markers (`> > [!TIP]`) are plain body text.

use std::ops::Range;

// Octicons used by GitHub for alert titles (16x16)
const SVG_INFO: &str = r#"<svg class="octicon" viewBox="0 0 16 16" width="16" height="16"><path d="M0 8a8 8 0 1 1 16 0A8 8 0 0 1 0 8Zm8-6.5a6.5 6.5 0 1 0 0 13 6.5 6.5 0 0 0 0-13ZM6.5 7.75A.75.75 0 0 1 7.25 7h1a.75.75 0 0 1 .75.75v2.75h.25a.75.75 0 0 1 0 1.5h-2a.75.75 0 0 1 0-1.5h.25v-2h-.25a.75.75 0 0 1-.75-.75ZM8 6a1 1 0 1 1 0-2 1 1 0 0 1 0 2Z"></path></svg>"#;
const SVG_LIGHTBULB: &str = r#"<svg class="octicon" viewBox="0 0 16 16" width="16" height="16"><path d="M8 1.5c-2.363 0-4 1.69-4 3.75 0 .984.424 1.625.984 2.304l.214.253c.223.264.47.556.673.848.284.411.537.896.621 1.49a.75.75 0 0 1-1.484.211c-.04-.282-.163-.547-.37-.847a8.456 8.456 0 0 0-.542-.68c-.084-.1-.173-.205-.268-.32C3.201 7.75 2.5 6.766 2.5 5.25 2.5 2.31 4.863 0 8 0s5.5 2.31 5.5 5.25c0 1.516-.701 2.5-1.328 3.259-.095.115-.184.22-.268.319-.207.245-.383.453-.541.681-.208.3-.33.565-.37.847a.751.751 0 0 1-1.485-.212c.084-.593.337-1.078.621-1.489.203-.292.45-.584.673-.848.075-.088.147-.173.213-.253.561-.679.985-1.32.985-2.304 0-2.06-1.637-3.75-4-3.75ZM5.75 12h4.5a.75.75 0 0 1 0 1.5h-4.5a.75.75 0 0 1 0-1.5ZM6 15.25a.75.75 0 0 1 .75-.75h2.5a.75.75 0 0 1 0 1.5h-2.5a.75.75 0 0 1-.75-.75Z"></path></svg>"#;
const SVG_REPORT: &str = r#"<svg class="octicon" viewBox="0 0 16 16" width="16" height="16"><path d="M0 1.75C0 .784.784 0 1.75 0h12.5C15.216 0 16 .784 16 1.75v9.5A1.75 1.75 0 0 1 14.25 13H8.06l-2.573 2.573A1.458 1.458 0 0 1 3 14.543V13H1.75A1.75 1.75 0 0 1 0 11.25Zm1.75-.25a.25.25 0 0 0-.25.25v9.5c0 .138.112.25.25.25h2a.75.75 0 0 1 .75.75v2.19l2.72-2.72a.749.749 0 0 1 .53-.22h6.5a.25.25 0 0 0 .25-.25v-9.5a.25.25 0 0 0-.25-.25Zm7 2.25v2.5a.75.75 0 0 1-1.5 0v-2.5a.75.75 0 0 1 1.5 0ZM9 9a1 1 0 1 1-2 0 1 1 0 0 1 2 0Z"></path></svg>"#;
const SVG_ALERT: &str = r#"<svg class="octicon" viewBox="0 0 16 16" width="16" height="16"><path d="M6.457 1.047c.659-1.234 2.427-1.234 3.086 0l6.082 11.378A1.75 1.75 0 0 1 14.082 15H1.918a1.75 1.75 0 0 1-1.543-2.575Zm1.763.707a.25.25 0 0 0-.44 0L1.698 13.132a.25.25 0 0 0 .22.368h12.164a.25.25 0 0 0 .22-.368Zm.53 3.996v2.5a.75.75 0 0 1-1.5 0v-2.5a.75.75 0 0 1 1.5 0ZM9 11a1 1 0 1 1-2 0 1 1 0 0 1 2 0Z"></path></svg>"#;
const SVG_STOP: &str = r#"<svg class="octicon" viewBox="0 0 16 16" width="16" height="16"><path d="M4.47.22A.749.749 0 0 1 5 0h6c.199 0 .389.079.53.22l4.25 4.25c.141.14.22.331.22.53v6a.749.749 0 0 1-.22.53l-4.25 4.25A.749.749 0 0 1 11 16H5a.749.749 0 0 1-.53-.22L.22 11.53A.749.749 0 0 1 0 11V5c0-.199.079-.389.22-.53Zm.84 1.28L1.5 5.31v5.38l3.81 3.81h5.38l3.81-3.81V5.31L10.69 1.5ZM8 4a.75.75 0 0 1 .75.75v3.5a.75.75 0 0 1-1.5 0v-3.5A.75.75 0 0 1 8 4Zm0 8a1 1 0 1 1 0-2 1 1 0 0 1 0 2Z"></path></svg>"#;

/// Severity of a GitHub alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlertKind {
    Note,
    Tip,
    Important,
    Warning,
    Caution,
}

impl AlertKind {
    /// All alert kinds in display order.
    pub const ALL: [Self; 5] = [
        Self::Note,
        Self::Tip,
        Self::Important,
        Self::Warning,
        Self::Caution,
    ];

    /// Parse the token between `[!` and `]`, ignoring case.
    ///
    /// ```
    /// use mdpdf_renderer::AlertKind;
    ///
    /// assert_eq!(AlertKind::from_marker("warning"), Some(AlertKind::Warning));
    /// assert_eq!(AlertKind::from_marker("DANGER"), None);
    /// ```
    #[must_use]
    pub fn from_marker(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(token))
    }

    /// Lowercase name used in CSS classes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Tip => "tip",
            Self::Important => "important",
            Self::Warning => "warning",
            Self::Caution => "caution",
        }
    }

    /// Capitalized title shown above the alert body.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Note => "Note",
            Self::Tip => "Tip",
            Self::Important => "Important",
            Self::Warning => "Warning",
            Self::Caution => "Caution",
        }
    }

    /// Inline SVG icon shown before the title.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Note => SVG_INFO,
            Self::Tip => SVG_LIGHTBULB,
            Self::Important => SVG_REPORT,
            Self::Warning => SVG_ALERT,
            Self::Caution => SVG_STOP,
        }
    }
}

/// An alert recognized in markdown source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertBlock {
    /// Alert severity.
    pub kind: AlertKind,
    /// Dequoted body lines joined with `\n` and trimmed.
    pub body: String,
    /// Byte range of the marker and body lines in the source.
    pub span: Range<usize>,
}

/// Find all alert blocks in a single left-to-right pass.
///
/// Spans are sorted and never overlap.
#[must_use]
pub fn find_alerts(text: &str) -> Vec<AlertBlock> {
    let mut alerts = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let line_end = next_line_end(text, pos);

        let Some(kind) = parse_marker(&text[pos..line_end]) else {
            pos = line_end;
            continue;
        };

        let mut end = line_end;
        let mut body_lines = Vec::new();
        while text[end..].starts_with('>') {
            let next = next_line_end(text, end);
            body_lines.push(&text[end..next]);
            end = next;
        }

        alerts.push(AlertBlock {
            kind,
            body: extract_body(&body_lines),
            span: pos..end,
        });
        pos = end;
    }

    alerts
}

/// Replace every alert block with its HTML fragment.
///
/// Text outside alert spans is copied unchanged.
///
/// ```
/// use mdpdf_renderer::preprocess_alerts;
///
/// let output = preprocess_alerts("> [!NOTE]\n> Hello\n");
/// assert!(output.contains(r#"<div class="markdown-alert markdown-alert-note">"#));
/// assert!(output.contains("<p>Hello</p>"));
///
/// let plain = "> just a quote\n";
/// assert_eq!(preprocess_alerts(plain), plain);
/// ```
#[must_use]
pub fn preprocess_alerts(text: &str) -> String {
    let alerts = find_alerts(text);
    if alerts.is_empty() {
        return text.to_owned();
    }

    let mut output = String::with_capacity(text.len() + alerts.len() * 1024);
    let mut last = 0;
    for alert in &alerts {
        output.push_str(&text[last..alert.span.start]);
        output.push_str(&render_alert(alert));
        last = alert.span.end;
    }
    output.push_str(&text[last..]);

    tracing::debug!(count = alerts.len(), "Converted alert blocks");
    output
}

/// Render the HTML fragment for an alert.
///
/// The fragment is surrounded by blank lines so the markdown parser treats it
/// as a raw HTML block. The body is emitted as a single paragraph. Blank body
/// lines are dropped since a blank line would end the HTML block early.
#[must_use]
pub fn render_alert(alert: &AlertBlock) -> String {
    let kind = alert.kind;
    let body: Vec<&str> = alert
        .body
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    format!(
        "\n<div class=\"markdown-alert markdown-alert-{}\">\n<p class=\"markdown-alert-title\">{}{}</p>\n<p>{}</p>\n</div>\n\n",
        kind.as_str(),
        kind.icon(),
        kind.title(),
        body.join("\n")
    )
}

/// Byte offset just past the `\n` ending the line at `start`, or end of text.
fn next_line_end(text: &str, start: usize) -> usize {
    text[start..].find('\n').map_or(text.len(), |idx| start + idx + 1)
}

/// Parse an alert marker line (including its line break).
fn parse_marker(line: &str) -> Option<AlertKind> {
    let line = line.strip_suffix('\n')?;
    let rest = line.strip_prefix('>')?.trim_start();
    let rest = rest.strip_prefix("[!")?;
    let close = rest.find(']')?;
    let kind = AlertKind::from_marker(&rest[..close])?;
    rest[close + 1..]
        .chars()
        .all(char::is_whitespace)
        .then_some(kind)
}

/// Strip one `>` and at most one whitespace character from each line.
fn extract_body(lines: &[&str]) -> String {
    let dequoted: Vec<&str> = lines
        .iter()
        .map(|line| {
            let line = line.strip_suffix('\n').unwrap_or(line);
            let line = line.strip_prefix('>').unwrap_or(line);
            let mut chars = line.chars();
            match chars.next() {
                Some(c) if c.is_whitespace() => chars.as_str(),
                _ => line,
            }
        })
        .collect();

    dequoted.join("\n").trim().to_owned()
}
