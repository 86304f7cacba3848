//! Mock PDF engine for testing.
//!
//! Provides [`MockPdfEngine`] for pipeline tests without a browser.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::engine::{PdfEngine, PdfError};

/// Minimal PDF document returned by default.
const MINIMAL_PDF: &[u8] = b"%PDF-1.4\n1 0 obj<</Type/Catalog>>endobj\ntrailer<</Root 1 0 R>>\n%%EOF\n";

/// A page the mock was asked to render.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    /// Path passed to [`PdfEngine::render`].
    pub path: PathBuf,
    /// File contents at render time.
    pub html: String,
}

/// Mock engine for testing.
///
/// Returns fixed bytes, or a configured failure, and records every page it
/// renders.
///
/// # Example
///
/// ```ignore
/// use mdpdf_pdf::{MockPdfEngine, PdfEngine};
///
/// let engine = MockPdfEngine::new().with_output(b"%PDF-1.7".to_vec());
/// let pdf = engine.render(Path::new("temp_doc.md.html")).unwrap();
/// assert_eq!(engine.rendered().len(), 1);
/// ```
#[derive(Debug)]
pub struct MockPdfEngine {
    output: Vec<u8>,
    failure: Option<String>,
    unavailable: Option<String>,
    rendered: RwLock<Vec<RenderedPage>>,
}

impl Default for MockPdfEngine {
    fn default() -> Self {
        Self {
            output: MINIMAL_PDF.to_vec(),
            failure: None,
            unavailable: None,
            rendered: RwLock::new(Vec::new()),
        }
    }
}

impl MockPdfEngine {
    /// Create a mock that returns a minimal PDF.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `output` from every render.
    #[must_use]
    pub fn with_output(mut self, output: Vec<u8>) -> Self {
        self.output = output;
        self
    }

    /// Fail every render with [`PdfError::Print`].
    #[must_use]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Fail [`PdfEngine::ensure_available`] with [`PdfError::ExecutableNotFound`].
    #[must_use]
    pub fn with_unavailable(mut self, message: impl Into<String>) -> Self {
        self.unavailable = Some(message.into());
        self
    }

    /// Pages rendered so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn rendered(&self) -> Vec<RenderedPage> {
        self.rendered.read().unwrap().clone()
    }
}

impl PdfEngine for MockPdfEngine {
    fn ensure_available(&self) -> Result<(), PdfError> {
        match &self.unavailable {
            Some(message) => Err(PdfError::ExecutableNotFound(message.clone())),
            None => Ok(()),
        }
    }

    fn render(&self, html_path: &Path) -> Result<Vec<u8>, PdfError> {
        let html = std::fs::read_to_string(html_path).map_err(|source| PdfError::Io {
            path: html_path.to_path_buf(),
            source,
        })?;
        self.rendered.write().unwrap().push(RenderedPage {
            path: html_path.to_path_buf(),
            html,
        });

        match &self.failure {
            Some(message) => Err(PdfError::Print(message.clone())),
            None => Ok(self.output.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_records_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<p>hi</p>").unwrap();
        let engine = MockPdfEngine::new();

        let pdf = engine.render(&path).unwrap();

        assert!(pdf.starts_with(b"%PDF"));
        let rendered = engine.rendered();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].path, path);
        assert_eq!(rendered[0].html, "<p>hi</p>");
    }

    #[test]
    fn test_render_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "").unwrap();
        let engine = MockPdfEngine::new().with_failure("crashed");

        let err = engine.render(&path).unwrap_err();

        assert_eq!(err.to_string(), "Failed to print PDF: crashed");
        assert_eq!(engine.rendered().len(), 1);
    }

    #[test]
    fn test_render_missing_file() {
        let engine = MockPdfEngine::new();
        let err = engine.render(Path::new("/nonexistent/page.html")).unwrap_err();

        assert!(matches!(err, PdfError::Io { .. }));
        assert!(engine.rendered().is_empty());
    }

    #[test]
    fn test_unavailable() {
        let engine = MockPdfEngine::new().with_unavailable("no browser");
        assert!(matches!(
            engine.ensure_available(),
            Err(PdfError::ExecutableNotFound(_))
        ));
    }
}
