//! mdpdf CLI - Markdown to GitHub-styled PDF.
//!
//! Converts one markdown file to PDF through headless Chromium, with GitHub
//! alert callouts and an optional institutional header and footer.

mod convert;
mod error;
mod output;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use mdpdf_config::{DEFAULT_CONFIG_FILE, DEFAULT_PROFILE};
use mdpdf_pdf::{ChromePdfEngine, PdfOptions};
use tracing_subscriber::EnvFilter;

use convert::Conversion;
use output::Output;

/// Convert Markdown to PDF with GitHub styling.
#[derive(Parser)]
#[command(name = "mdpdf", version, about)]
struct Cli {
    /// Input markdown file.
    input: PathBuf,

    /// Output PDF file (defaults to the input path with a .pdf extension).
    output: Option<PathBuf>,

    /// Add the institutional header and footer.
    #[arg(long, visible_alias = "iee")]
    branding: bool,

    /// Theme profile (INI section) used for branding.
    #[arg(long, default_value = DEFAULT_PROFILE)]
    profile: String,

    /// Theme configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Milliseconds to wait after page load before printing.
    #[arg(long, default_value_t = 1500)]
    settle_ms: u64,

    /// Chromium executable (discovered automatically if omitted).
    #[arg(long, env = "CHROME")]
    chrome: Option<PathBuf>,

    /// Run Chromium without its sandbox.
    #[arg(long)]
    no_sandbox: bool,

    /// Only print warnings and errors.
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new(cli.quiet);

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut engine = ChromePdfEngine::new()
        .with_sandbox(!cli.no_sandbox)
        .with_options(PdfOptions::default().with_settle(Duration::from_millis(cli.settle_ms)));
    if let Some(chrome) = cli.chrome {
        engine = engine.with_executable(chrome);
    }

    let mut conversion =
        Conversion::new(cli.input).with_branding(cli.branding, cli.profile, cli.config);
    if let Some(path) = cli.output {
        conversion = conversion.with_output(path);
    }

    if let Err(err) = conversion.run(&engine, &output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
