//! Self-contained HTML document assembly.
//!
//! Wraps a converted HTML fragment in a complete document with embedded
//! stylesheets and, when branding is enabled, an institutional header and
//! footer whose logos are inlined as `data:` URIs.

use std::fmt::Write;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mdpdf_config::{DEFAULT_HEADING_LINE_COLOR, ThemeProfile};

use crate::style::{base_css, branding_css};
use crate::util::{escape_html, image_data_uri};

/// Title used when the document has no H1 heading.
pub const DEFAULT_TITLE: &str = "Document";

/// Assembled HTML document.
#[derive(Clone, Debug)]
pub struct RenderedDocument {
    /// Complete HTML document.
    pub html: String,
    /// Whether header and footer markup was emitted.
    pub branded: bool,
    /// Operator-facing warnings (e.g., missing logos).
    pub warnings: Vec<String>,
}

/// Error returned by [`DocumentAssembler::assemble`].
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    /// A logo file exists but could not be read.
    #[error("Failed to read logo {}: {source}", path.display())]
    Logo {
        /// Resolved logo path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}

/// Logos encoded as `data:` URIs.
struct Logos {
    left: String,
    right: String,
}

/// Builds the final HTML document around a converted body fragment.
///
/// # Example
///
/// ```
/// use mdpdf_renderer::DocumentAssembler;
///
/// let doc = DocumentAssembler::new()
///     .with_title("Report")
///     .assemble("<h1>Report</h1>\n")
///     .unwrap();
///
/// assert!(doc.html.starts_with("<!DOCTYPE html>"));
/// assert!(doc.html.contains("<title>Report</title>"));
/// assert!(!doc.branded);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DocumentAssembler<'a> {
    title: Option<&'a str>,
    theme: Option<&'a ThemeProfile>,
    branding: bool,
    base_dir: Option<&'a Path>,
}

impl<'a> DocumentAssembler<'a> {
    /// Create an assembler without theme or branding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document `<title>` (defaults to [`DEFAULT_TITLE`]).
    #[must_use]
    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Use a resolved theme for colors and branding text.
    #[must_use]
    pub fn with_theme(mut self, theme: &'a ThemeProfile) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Request the institutional header and footer.
    ///
    /// Has no effect unless a theme and base directory are also set.
    #[must_use]
    pub fn with_branding(mut self, enabled: bool) -> Self {
        self.branding = enabled;
        self
    }

    /// Directory against which relative logo paths are resolved.
    #[must_use]
    pub fn with_base_dir(mut self, base_dir: &'a Path) -> Self {
        self.base_dir = Some(base_dir);
        self
    }

    /// Assemble the document. `body` is inserted unchanged.
    ///
    /// Missing logos disable the header and footer and add a warning; the
    /// document is still produced.
    ///
    /// # Errors
    ///
    /// Returns [`AssembleError::Logo`] if a logo exists but reading it fails
    /// for a reason other than permissions.
    pub fn assemble(&self, body: &str) -> Result<RenderedDocument, AssembleError> {
        let heading_line_color = self
            .theme
            .map_or(DEFAULT_HEADING_LINE_COLOR, |t| t.heading_line_color.as_str());
        let mut css = base_css(heading_line_color);
        let mut warnings = Vec::new();
        let mut chrome = None;

        if self.branding {
            match (self.theme, self.base_dir) {
                (Some(theme), Some(base_dir)) => {
                    css.push_str(&branding_css(&theme.accent_color));
                    if let Some(logos) = load_logos(theme, base_dir, &mut warnings)? {
                        chrome = Some((render_header(theme, &logos), render_footer(theme)));
                    }
                }
                _ => tracing::debug!("Branding requested without theme or base directory"),
            }
        }

        let branded = chrome.is_some();
        let (header, footer) = chrome.unwrap_or_default();
        let title = escape_html(self.title.unwrap_or(DEFAULT_TITLE));

        let mut html = String::with_capacity(css.len() + body.len() + header.len() + footer.len() + 512);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        let _ = writeln!(html, "<title>{title}</title>");
        html.push_str("<style>\n");
        html.push_str(&css);
        html.push_str("</style>\n</head>\n<body>\n");
        html.push_str(&header);
        html.push_str(body);
        html.push('\n');
        html.push_str(&footer);
        html.push_str("</body>\n</html>\n");

        Ok(RenderedDocument {
            html,
            branded,
            warnings,
        })
    }
}

/// Load both logos, recording a warning for each missing one.
///
/// Returns `None` if either logo is missing.
fn load_logos(
    theme: &ThemeProfile,
    base_dir: &Path,
    warnings: &mut Vec<String>,
) -> Result<Option<Logos>, AssembleError> {
    let left = load_logo(&theme.logo_left, base_dir, warnings)?;
    let right = load_logo(&theme.logo_right, base_dir, warnings)?;

    Ok(match (left, right) {
        (Some(left), Some(right)) => Some(Logos { left, right }),
        _ => None,
    })
}

/// Read a logo and encode it as a `data:` URI.
fn load_logo(
    logo: &Path,
    base_dir: &Path,
    warnings: &mut Vec<String>,
) -> Result<Option<String>, AssembleError> {
    let path = if logo.is_absolute() {
        logo.to_path_buf()
    } else {
        base_dir.join(logo)
    };

    match std::fs::read(&path) {
        Ok(data) => {
            tracing::debug!(path = %path.display(), bytes = data.len(), "Embedded logo");
            Ok(Some(image_data_uri(&path, &data)))
        }
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {
            tracing::warn!(path = %path.display(), error = %e, "Logo unavailable, omitting branding");
            warnings.push(format!(
                "Logo not found: {}. Branding header and footer omitted.",
                path.display()
            ));
            Ok(None)
        }
        Err(source) => Err(AssembleError::Logo { path, source }),
    }
}

fn render_header(theme: &ThemeProfile, logos: &Logos) -> String {
    format!(
        "<header class=\"iee-header\">\n\
         <img class=\"iee-logo iee-logo-left\" src=\"{left}\" alt=\"\">\n\
         <div class=\"iee-header-text\">\n\
         <div class=\"iee-name\">{name}</div>\n\
         <div class=\"iee-university\">{university}</div>\n\
         </div>\n\
         <img class=\"iee-logo iee-logo-right\" src=\"{right}\" alt=\"\">\n\
         </header>\n",
        left = logos.left,
        right = logos.right,
        name = escape_html(&theme.name),
        university = escape_html(&theme.university),
    )
}

fn render_footer(theme: &ThemeProfile) -> String {
    format!(
        "<footer class=\"iee-footer\">\n\
         <div class=\"iee-footer-left\">\n\
         <div class=\"iee-footer-university\">{university}</div>\n\
         <div class=\"iee-footer-name\">{name}</div>\n\
         <div class=\"iee-footer-address\">{address}</div>\n\
         <div class=\"iee-footer-contact\">{email} | {website}</div>\n\
         </div>\n\
         <div class=\"iee-footer-right\"><em>{slogan}</em></div>\n\
         </footer>\n",
        university = escape_html(&theme.university),
        name = escape_html(&theme.name),
        address = escape_html(&theme.address),
        email = escape_html(&theme.email),
        website = escape_html(&theme.website),
        slogan = escape_html(&theme.slogan),
    )
}
