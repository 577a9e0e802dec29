//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mdq",
    version,
    about = "Metadata quality checker and fixer for CSV files",
    long_about = "Run a batch of per-field and per-record quality checks and fixes\n\
                  over a CSV of repository metadata, then write a cleaned CSV.\n\n\
                  Checks report problems; fixes rewrite values. Unsafe fixes only\n\
                  run when explicitly enabled."
)]
pub struct Cli {
    /// Path to the input file. Must be a UTF-8 CSV.
    #[arg(short = 'i', long = "input-file", value_name = "PATH")]
    pub input_file: PathBuf,

    /// Path to the output file (always CSV).
    #[arg(short = 'o', long = "output-file", value_name = "PATH")]
    pub output_file: PathBuf,

    /// Perform unsafe fixes.
    #[arg(short = 'u', long = "unsafe-fixes")]
    pub unsafe_fixes: bool,

    /// Comma-separated list of fields to validate against the controlled
    /// vocabulary, for example: dcterms.subject,cg.coverage.country.
    #[arg(short = 'a', long = "vocabulary-fields", value_name = "FIELDS")]
    pub vocabulary_fields: Option<String>,

    /// After validating values against the vocabulary, drop invalid ones.
    #[arg(
        short = 'd',
        long = "drop-invalid-vocabulary",
        requires = "vocabulary_fields"
    )]
    pub drop_invalid_vocabulary: bool,

    /// Comma-separated list of fields to skip, for example:
    /// dc.contributor.author,dcterms.bibliographicCitation.
    #[arg(short = 'x', long = "exclude-fields", value_name = "FIELDS")]
    pub exclude_fields: Option<String>,

    /// Enable experimental checks like language detection.
    #[arg(short = 'e', long = "experimental-checks")]
    pub experimental_checks: bool,

    /// Directory for the vocabulary response cache.
    #[arg(long = "cache-dir", value_name = "DIR", env = "MDQ_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Write the findings report as JSON to this path.
    #[arg(long = "report-file", value_name = "PATH")]
    pub report_file: Option<PathBuf>,

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
