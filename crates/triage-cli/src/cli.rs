//! CLI argument definitions for the report triage tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "triage",
    version,
    about = "Compliance report triage - sort test results into PASS and FAIL",
    long_about = "Extract test outcomes from compliance reports and sort them into PASS/FAIL.\n\n\
                  Reads text, PDF, DOCX, CSV and XLSX reports, tags each test with the\n\
                  regulatory standard it relates to and reports the pass rate."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Directory with replacement standards tables (also TRIAGE_STANDARDS_DIR).
    #[arg(long = "standards-dir", value_name = "DIR", global = true)]
    pub standards_dir: Option<PathBuf>,

    /// JSON file holding dashboard counters and the component register.
    ///
    /// Loaded before the command runs and written back afterwards. Without
    /// it, counters only cover the current invocation.
    #[arg(long = "session", value_name = "PATH", global = true)]
    pub session: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse reports and sort their tests into PASS, FAIL and other.
    Verify(VerifyArgs),

    /// Generate formal requirements and equipment lists for test cases.
    Requirements(RequirementsArgs),

    /// Look up a component by part number.
    Component(ComponentArgs),

    /// List the keyword to standard table.
    Standards,

    /// Show session counters and the component register.
    Dashboard,
}

#[derive(Parser)]
pub struct VerifyArgs {
    /// Report files (.txt, .log, .pdf, .docx, .csv, .xlsx).
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Also treat `KEY: VALUE` lines as informational records.
    #[arg(long = "permissive")]
    pub permissive: bool,

    /// Render diagnostic identifiers with spaces (WATCHDOG RESET).
    #[arg(long = "spaced-diagnostic-names")]
    pub spaced_diagnostic_names: bool,

    /// Print informational and unknown records too.
    #[arg(long = "show-other")]
    pub show_other: bool,

    /// Print results as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct RequirementsArgs {
    /// Test case descriptions, e.g. "ip rating" "short circuit".
    #[arg(value_name = "CASES")]
    pub cases: Vec<String>,

    /// Read additional test cases from a file, one per line.
    #[arg(long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Print requirements as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ComponentArgs {
    /// Part number or text containing it.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Add the found component to the session register.
    #[arg(long = "add")]
    pub add: bool,

    /// Notes stored with the register entry (e.g. certifications).
    #[arg(long = "notes", value_name = "TEXT", requires = "add")]
    pub notes: Option<String>,
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
