//! HTML to PDF rendering.
//!
//! This crate provides a [`PdfEngine`] trait that turns an HTML file on disk
//! into PDF bytes, decoupling the conversion pipeline from the browser that
//! does the printing.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`PdfEngine`] trait with `ensure_available()` and `render()` methods
//! - [`ChromePdfEngine`] printing through a headless Chromium session
//! - [`MockPdfEngine`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use mdpdf_pdf::{ChromePdfEngine, PdfEngine};
//!
//! let engine = ChromePdfEngine::new();
//! engine.ensure_available()?;
//! let pdf = engine.render(Path::new("report.html"))?;
//! std::fs::write("report.pdf", pdf)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod chrome;
mod engine;
#[cfg(feature = "mock")]
mod mock;

pub use chrome::ChromePdfEngine;
pub use engine::{PdfEngine, PdfError, PdfOptions, file_url};
#[cfg(feature = "mock")]
pub use mock::{MockPdfEngine, RenderedPage};
