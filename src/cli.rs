use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use clap::Parser;

use weekly_top_purchases::engine::DEFAULT_TOP_K;
use weekly_top_purchases::presenter::OutputFormat;

/// Shows this week's top purchases from an exported spend summary.
#[derive(Parser, Debug)]
#[command(name = "weekly-top-purchases", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Spend summary JSON file; only the first file is used
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Number of merchants to show
    #[arg(short = 'k', long = "top", default_value_t = DEFAULT_TOP_K)]
    pub top: usize,

    /// Extra description fragment to exclude, may be repeated
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub exclusions: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pin "now" to an RFC 3339 timestamp instead of the system clock
    #[arg(long)]
    pub now: Option<DateTime<FixedOffset>>,

    /// Give up reading the summary after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub read_timeout_ms: Option<u64>,

    /// One of error, warn, info, debug, trace
    #[arg(long, default_value = "error")]
    pub log_level: String
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }
}
