//! Headless Chromium engine.

use std::path::{Path, PathBuf};
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};

use crate::engine::{PdfEngine, PdfError, PdfOptions, file_url};

/// Prints pages through a headless Chromium session.
///
/// A new browser is launched for every [`render`](PdfEngine::render) call and
/// closed when the call returns.
#[derive(Clone, Debug)]
pub struct ChromePdfEngine {
    executable: Option<PathBuf>,
    sandbox: bool,
    options: PdfOptions,
}

impl ChromePdfEngine {
    /// Create an engine that discovers Chromium on the system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            executable: None,
            sandbox: true,
            options: PdfOptions::default(),
        }
    }

    /// Use an explicit Chromium executable.
    #[must_use]
    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executable = Some(path.into());
        self
    }

    /// Enable or disable the Chromium sandbox (enabled by default).
    ///
    /// Containers running as root usually need it disabled.
    #[must_use]
    pub fn with_sandbox(mut self, enabled: bool) -> Self {
        self.sandbox = enabled;
        self
    }

    /// Replace the page layout and timing options.
    #[must_use]
    pub fn with_options(mut self, options: PdfOptions) -> Self {
        self.options = options;
        self
    }

    /// Page layout and timing options.
    #[must_use]
    pub fn options(&self) -> &PdfOptions {
        &self.options
    }

    fn launch(&self) -> Result<Browser, PdfError> {
        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(self.sandbox)
            .path(self.executable.clone())
            .build()
            .map_err(|e| PdfError::Launch(e.to_string()))?;

        Browser::new(launch_options).map_err(|e| PdfError::Launch(e.to_string()))
    }

    fn print_options(&self) -> PrintToPdfOptions {
        PrintToPdfOptions {
            landscape: Some(false),
            display_header_footer: Some(false),
            print_background: Some(self.options.print_background),
            paper_width: Some(self.options.paper_width),
            paper_height: Some(self.options.paper_height),
            margin_top: Some(self.options.margin_top),
            margin_bottom: Some(self.options.margin_bottom),
            margin_left: Some(self.options.margin_left),
            margin_right: Some(self.options.margin_right),
            prefer_css_page_size: Some(false),
            ..Default::default()
        }
    }
}

impl Default for ChromePdfEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfEngine for ChromePdfEngine {
    fn ensure_available(&self) -> Result<(), PdfError> {
        let path = match &self.executable {
            Some(path) if path.exists() => path.clone(),
            Some(path) => {
                return Err(PdfError::ExecutableNotFound(format!(
                    "{} does not exist",
                    path.display()
                )));
            }
            None => headless_chrome::browser::default_executable()
                .map_err(PdfError::ExecutableNotFound)?,
        };

        tracing::debug!(path = %path.display(), "Found Chromium executable");
        Ok(())
    }

    fn render(&self, html_path: &Path) -> Result<Vec<u8>, PdfError> {
        let url = file_url(html_path)?;
        tracing::info!(url = %url, "Printing page");

        let browser = self.launch()?;
        let tab = browser
            .new_tab()
            .map_err(|e| PdfError::Launch(e.to_string()))?;

        let navigation_error = |e: &dyn std::fmt::Display| PdfError::Navigation {
            url: url.to_string(),
            message: e.to_string(),
        };
        tab.navigate_to(url.as_str())
            .map_err(|e| navigation_error(&e))?
            .wait_until_navigated()
            .map_err(|e| navigation_error(&e))?;

        std::thread::sleep(self.options.settle);

        let pdf = tab
            .print_to_pdf(Some(self.print_options()))
            .map_err(|e| PdfError::Print(e.to_string()))?;

        tracing::debug!(bytes = pdf.len(), "Printed PDF");
        Ok(pdf)
    }
}
