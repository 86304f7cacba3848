//! PDF engine abstraction.

use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

/// Millimetres per inch.
const MM_PER_INCH: f64 = 25.4;

/// Error returned by [`PdfEngine`] operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    /// No browser executable could be located.
    #[error("Chromium executable not found: {0}")]
    ExecutableNotFound(String),
    /// Browser could not be started.
    #[error("Failed to launch browser: {0}")]
    Launch(String),
    /// Page could not be loaded.
    #[error("Failed to load {url}: {message}")]
    Navigation {
        /// Page URL.
        url: String,
        /// Browser error message.
        message: String,
    },
    /// Page could not be printed.
    #[error("Failed to print PDF: {0}")]
    Print(String),
    /// Path cannot be expressed as a `file://` URL.
    #[error("Invalid HTML path: {}", .0.display())]
    InvalidPath(PathBuf),
    /// I/O error while accessing the HTML file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}

/// Page layout and timing for PDF export.
#[derive(Clone, Debug, PartialEq)]
pub struct PdfOptions {
    /// Paper width in inches.
    pub paper_width: f64,
    /// Paper height in inches.
    pub paper_height: f64,
    /// Top margin in inches.
    pub margin_top: f64,
    /// Bottom margin in inches.
    pub margin_bottom: f64,
    /// Left margin in inches.
    pub margin_left: f64,
    /// Right margin in inches.
    pub margin_right: f64,
    /// Print background colors and images.
    pub print_background: bool,
    /// Wait between page load and export.
    pub settle: Duration,
}

impl PdfOptions {
    /// Default settle delay.
    pub const DEFAULT_SETTLE: Duration = Duration::from_millis(1500);

    /// Set the settle delay.
    #[must_use]
    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }
}

impl Default for PdfOptions {
    /// A4 with 20 mm vertical and 15 mm horizontal margins.
    fn default() -> Self {
        Self {
            paper_width: 8.27,
            paper_height: 11.69,
            margin_top: mm_to_inches(20.0),
            margin_bottom: mm_to_inches(20.0),
            margin_left: mm_to_inches(15.0),
            margin_right: mm_to_inches(15.0),
            print_background: true,
            settle: Self::DEFAULT_SETTLE,
        }
    }
}

fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// Renders an HTML file to PDF bytes.
pub trait PdfEngine {
    /// Check that the engine can run before any work is done.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError`] if the engine's runtime dependencies are missing.
    fn ensure_available(&self) -> Result<(), PdfError> {
        Ok(())
    }

    /// Render the HTML document at `html_path`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError`] if the page cannot be loaded or printed.
    fn render(&self, html_path: &Path) -> Result<Vec<u8>, PdfError>;
}

/// Build a `file://` URL for `path`, resolving it against the working directory.
///
/// # Errors
///
/// Returns [`PdfError::Io`] if the working directory cannot be determined,
/// or [`PdfError::InvalidPath`] if the path has no URL form.
pub fn file_url(path: &Path) -> Result<Url, PdfError> {
    let absolute = std::path::absolute(path).map_err(|source| PdfError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Url::from_file_path(&absolute).map_err(|()| PdfError::InvalidPath(absolute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct NoopEngine;

    impl PdfEngine for NoopEngine {
        fn render(&self, _html_path: &Path) -> Result<Vec<u8>, PdfError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_default_options_are_a4() {
        let options = PdfOptions::default();

        assert!((options.paper_width - 8.27).abs() < f64::EPSILON);
        assert!((options.paper_height - 11.69).abs() < f64::EPSILON);
        assert!((options.margin_top - 0.787).abs() < 0.001);
        assert!((options.margin_left - 0.591).abs() < 0.001);
        assert!(options.print_background);
        assert_eq!(options.settle, Duration::from_millis(1500));
    }

    #[test]
    fn test_with_settle() {
        let options = PdfOptions::default().with_settle(Duration::ZERO);
        assert_eq!(options.settle, Duration::ZERO);
    }

    #[test]
    fn test_ensure_available_default_ok() {
        assert!(NoopEngine.ensure_available().is_ok());
    }

    #[test]
    fn test_file_url_absolute() {
        let url = file_url(Path::new("/tmp/temp_doc.md.html")).unwrap();
        assert_eq!(url.as_str(), "file:///tmp/temp_doc.md.html");
    }

    #[test]
    fn test_file_url_relative_resolved() {
        let url = file_url(Path::new("temp_doc.md.html")).unwrap();

        assert_eq!(url.scheme(), "file");
        assert!(url.path().ends_with("/temp_doc.md.html"));
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(url.to_file_path().unwrap(), cwd.join("temp_doc.md.html"));
    }

    #[test]
    fn test_file_url_escapes_spaces() {
        let url = file_url(Path::new("/tmp/my notes.html")).unwrap();
        assert_eq!(url.as_str(), "file:///tmp/my%20notes.html");
    }

    #[test]
    fn test_error_messages() {
        let err = PdfError::Navigation {
            url: "file:///x.html".to_owned(),
            message: "timeout".to_owned(),
        };
        assert_eq!(err.to_string(), "Failed to load file:///x.html: timeout");
    }
}
