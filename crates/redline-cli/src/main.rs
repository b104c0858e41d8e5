/// redline command-line tool — scan and redact line-oriented files without
/// trusting them to be text.
///
/// # Command overview
///
/// ```text
/// redline [OPTIONS] <COMMAND>
///
/// Commands:
///   stats    Print line statistics for a file
///   redact   Mask a literal string, preserving the file's newline structure
///   help     Print help information
///
/// Global options:
///   --max-line-size <BYTES>  Reject lines longer than this (default 10 MiB)
///   -v, --verbose            Log reader/redactor activity to stderr
///   -h, --help               Print help
///   -V, --version            Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                         |
/// |------|-------------------------------------------------|
/// | 0    | Success                                         |
/// | 1    | Error (I/O failure, line over the size ceiling) |
///
/// All diagnostics are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use redline_reader::ReaderConfig;

mod cmd_redact;
mod cmd_stats;
mod logging;

// ── CLI root ──────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "redline", version, about = "Bounded, binary-safe line tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum accepted line length in bytes.
    #[arg(long, global = true, value_name = "BYTES")]
    max_line_size: Option<usize>,

    /// Enable debug logging (overrides `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Cli {
    fn reader_config(&self) -> ReaderConfig {
        let config = ReaderConfig::default();
        match self.max_line_size {
            Some(max) => config.with_max_line_size(max),
            None => config,
        }
    }
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print line statistics for a file.
    Stats(StatsArgs),
    /// Mask every occurrence of a literal string.
    Redact(RedactArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `redline stats`.
///
/// Streams the file through a line reader and reports how many lines it
/// holds, whether the last one lacks a newline, and the longest line.
#[derive(clap::Args)]
pub struct StatsArgs {
    /// File to scan.
    pub file: PathBuf,

    /// Print the statistics as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `redline redact`.
///
/// ```text
/// ┌───────────────┬──────────────────────────────────────────────────┐
/// │ Flag          │ Effect                                           │
/// ├───────────────┼──────────────────────────────────────────────────┤
/// │ --literal S   │ Text to mask (required)                          │
/// │ --mask M      │ Replacement text (default `***HIDDEN***`)        │
/// │ -o / --output │ Write to a file instead of stdout                │
/// └───────────────┴──────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct RedactArgs {
    /// File to redact.
    pub file: PathBuf,

    /// Literal text to mask.
    #[arg(long)]
    pub literal: String,

    /// Replacement for each occurrence.
    #[arg(long)]
    pub mask: Option<String>,

    /// Write redacted output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.reader_config();
    let result = match &cli.command {
        Commands::Stats(args) => cmd_stats::run(args, config),
        Commands::Redact(args) => cmd_redact::run(args, config),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
