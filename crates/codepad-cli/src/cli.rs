//! CLI argument definitions for the codepad tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use codepad_model::ViewportMode;

#[derive(Parser)]
#[command(
    name = "codepad",
    version,
    about = "Codepad - live preview and validation for web snippets",
    long_about = "Compose HTML/CSS/JS buffers into a self-contained preview document,\n\
                  validate them against a fixed lint-style rule library, and watch\n\
                  files for edits with debounced rebuilds."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compose source files into a single preview document.
    Preview(PreviewArgs),

    /// Validate source files against the rule library.
    Check(CheckArgs),

    /// List the validation rule library.
    Rules,

    /// Watch source files and rebuild the preview on edits.
    Watch(WatchArgs),
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Markup (HTML) source file.
    #[arg(long = "html", value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Stylesheet (CSS) source file.
    #[arg(long = "css", value_name = "PATH")]
    pub css: Option<PathBuf>,

    /// Script (JS) source file.
    #[arg(long = "js", value_name = "PATH")]
    pub js: Option<PathBuf>,

    /// Output path for the composed document.
    #[arg(long = "out", value_name = "PATH", default_value = "preview.html")]
    pub out: PathBuf,

    /// Simulated device width for the preview viewport.
    #[arg(long = "viewport", value_enum, default_value = "desktop")]
    pub viewport: ViewportArg,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Source files to validate; the language role is inferred from the
    /// extension (.html, .css, .js, .ts, .py).
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Write a JSON validation report into this directory.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    /// Print the report as JSON to stdout instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct WatchArgs {
    /// Markup (HTML) source file.
    #[arg(long = "html", value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Stylesheet (CSS) source file.
    #[arg(long = "css", value_name = "PATH")]
    pub css: Option<PathBuf>,

    /// Script (JS) source file.
    #[arg(long = "js", value_name = "PATH")]
    pub js: Option<PathBuf>,

    /// Output path for the composed document.
    #[arg(long = "out", value_name = "PATH", default_value = "preview.html")]
    pub out: PathBuf,

    /// Quiet period in milliseconds before a rebuild after the last edit.
    #[arg(long = "quiet-ms", value_name = "MS", default_value_t = 1000)]
    pub quiet_ms: u64,

    /// Poll interval in milliseconds for detecting file changes.
    #[arg(long = "interval-ms", value_name = "MS", default_value_t = 200)]
    pub interval_ms: u64,
}

/// CLI viewport choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ViewportArg {
    Desktop,
    Tablet,
    Mobile,
}

impl From<ViewportArg> for ViewportMode {
    fn from(value: ViewportArg) -> Self {
        match value {
            ViewportArg::Desktop => ViewportMode::Desktop,
            ViewportArg::Tablet => ViewportMode::Tablet,
            ViewportArg::Mobile => ViewportMode::Mobile,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
