//! GitHub-styled markdown to HTML document rendering.
//!
//! The pipeline has three stages:
//! - [`preprocess_alerts`] rewrites `> [!KIND]` blockquotes into alert HTML blocks
//! - a [`MarkdownConverter`] (by default [`GithubConverter`]) turns markdown into
//!   an HTML fragment
//! - [`DocumentAssembler`] wraps the fragment in a self-contained document with
//!   embedded stylesheets and optional institutional branding
//!
//! # Example
//!
//! ```
//! use mdpdf_renderer::{DocumentAssembler, GithubConverter, MarkdownConverter, preprocess_alerts};
//!
//! let markdown = preprocess_alerts("# Notes\n\n> [!TIP]\n> Use the CLI.\n");
//! let converted = GithubConverter::new().convert(&markdown).unwrap();
//! let document = DocumentAssembler::new()
//!     .with_title(converted.title.as_deref().unwrap_or("Document"))
//!     .assemble(&converted.html)
//!     .unwrap();
//!
//! assert!(document.html.contains("markdown-alert-tip"));
//! ```

mod alert;
mod document;
mod markdown;
mod style;
mod toc;
mod util;

pub use alert::{AlertBlock, AlertKind, find_alerts, preprocess_alerts, render_alert};
pub use document::{AssembleError, DEFAULT_TITLE, DocumentAssembler, RenderedDocument};
pub use markdown::{ConvertError, ConvertedMarkdown, GithubConverter, MarkdownConverter};
pub use style::{base_css, branding_css};
pub use toc::{TocEntry, render_toc};
pub use util::{escape_html, image_data_uri, image_mime_type};
