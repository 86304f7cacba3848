//! CLI error types.

use std::path::PathBuf;

use mdpdf_config::ConfigError;
use mdpdf_pdf::PdfError;
use mdpdf_renderer::{AssembleError, ConvertError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("'{}' not found.", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Convert(#[from] ConvertError),

    #[error("{0}")]
    Assemble(#[from] AssembleError),

    #[error("{0}")]
    Pdf(#[from] PdfError),
}
