//! Markdown to PDF conversion pipeline.

use std::path::{Path, PathBuf};

use mdpdf_config::{DEFAULT_CONFIG_FILE, DEFAULT_PROFILE, ThemeProfile};
use mdpdf_pdf::PdfEngine;
use mdpdf_renderer::{
    DEFAULT_TITLE, DocumentAssembler, GithubConverter, MarkdownConverter, preprocess_alerts,
};

use crate::error::CliError;
use crate::output::Output;

/// One input file converted to one PDF.
#[derive(Debug)]
pub(crate) struct Conversion {
    input: PathBuf,
    output: PathBuf,
    branding: bool,
    profile: String,
    config: PathBuf,
    work_dir: PathBuf,
}

impl Conversion {
    /// Convert `input`, writing the PDF next to it with a `.pdf` extension.
    pub(crate) fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = input.with_extension("pdf");
        Self {
            input,
            output,
            branding: false,
            profile: DEFAULT_PROFILE.to_owned(),
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
            work_dir: PathBuf::from("."),
        }
    }

    pub(crate) fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Add the institutional header and footer from `profile` in `config`.
    pub(crate) fn with_branding(
        mut self,
        enabled: bool,
        profile: impl Into<String>,
        config: impl Into<PathBuf>,
    ) -> Self {
        self.branding = enabled;
        self.profile = profile.into();
        self.config = config.into();
        self
    }

    /// Directory receiving the intermediate HTML file.
    pub(crate) fn with_work_dir(mut self, work_dir: impl Into<PathBuf>) -> Self {
        self.work_dir = work_dir.into();
        self
    }

    /// Path of the intermediate HTML file, `temp_{input file name}.html`.
    fn temp_html_path(&self) -> PathBuf {
        let name = self
            .input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.work_dir.join(format!("temp_{name}.html"))
    }

    /// Run the pipeline.
    ///
    /// The intermediate HTML file is removed on every exit path.
    pub(crate) fn run(&self, engine: &impl PdfEngine, out: &Output) -> Result<(), CliError> {
        if !self.input.exists() {
            return Err(CliError::InputNotFound(self.input.clone()));
        }

        engine.ensure_available()?;

        out.step(&format!("Converting '{}' to HTML...", self.input.display()));
        let markdown = std::fs::read_to_string(&self.input).map_err(|source| CliError::Read {
            path: self.input.clone(),
            source,
        })?;
        let converted = GithubConverter::new().convert(&preprocess_alerts(&markdown))?;

        let theme = if self.branding {
            Some(ThemeProfile::resolve(&self.profile, &self.config)?)
        } else {
            None
        };
        let base_dir = ThemeProfile::base_dir(&self.config);

        let mut assembler = DocumentAssembler::new()
            .with_title(converted.title.as_deref().unwrap_or(DEFAULT_TITLE))
            .with_branding(self.branding)
            .with_base_dir(&base_dir);
        if let Some(theme) = &theme {
            assembler = assembler.with_theme(theme);
        }
        let document = assembler.assemble(&converted.html)?;
        for warning in &document.warnings {
            out.warning(warning);
        }

        let temp = TempHtml::create(self.temp_html_path(), &document.html)?;

        out.step(&format!("Printing to '{}'...", self.output.display()));
        let pdf = engine.render(temp.path())?;
        std::fs::write(&self.output, &pdf).map_err(|source| CliError::Write {
            path: self.output.clone(),
            source,
        })?;

        tracing::info!(
            output = %self.output.display(),
            bytes = pdf.len(),
            branded = document.branded,
            "Wrote PDF"
        );
        out.success(&format!("PDF created: {}", self.output.display()));
        Ok(())
    }
}

/// Intermediate HTML file, deleted when dropped.
struct TempHtml {
    path: PathBuf,
}

impl TempHtml {
    fn create(path: PathBuf, html: &str) -> Result<Self, CliError> {
        match std::fs::write(&path, html) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "Wrote intermediate HTML");
                Ok(Self { path })
            }
            Err(source) => {
                let _ = std::fs::remove_file(&path);
                Err(CliError::Write { path, source })
            }
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempHtml {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove intermediate HTML");
        }
    }
}
