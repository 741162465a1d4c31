//! Command-line argument definition.

use clap::Parser;

/// CardioQA - a terminal client for the CardioQA cardiac health question service
#[derive(Parser, Debug)]
#[command(name = "cardioqa")]
#[command(version)]
#[command(about = "A terminal client for the CardioQA cardiac health question service", long_about = None)]
pub struct Args {
    /// Base URL of the question service (overrides CARDIOQA_API_URL and settings.conf)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Ask a single question, print the answer and exit (no TUI)
    #[arg(long, value_name = "QUESTION")]
    pub ask: Option<String>,

    /// Print the raw service response as JSON (use with --ask)
    #[arg(long, requires = "ask")]
    pub json: bool,
}
