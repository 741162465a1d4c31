//! CardioQA binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use cardioqa::args::{Args, determine_log_level, handle_ask};
use cardioqa::theme::AppConfig;

struct CardioTimer;

impl tracing_subscriber::fmt::time::FormatTime for CardioTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        w.write_str(&cardioqa::util::log_timestamp())
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// What: Initialize tracing, writing to `~/.config/cardioqa/logs/cardioqa.log`.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset.
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(level: &str) {
    let mut log_path = cardioqa::theme::logs_dir();
    log_path.push("cardioqa.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(CardioTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is never blocked
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(CardioTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&determine_log_level(&args));

    let config = AppConfig::load(args.api_url.as_deref());
    tracing::info!(api_url = %config.api_url, "CardioQA starting");

    if let Some(question) = args.ask.as_deref() {
        let code = handle_ask(&config, question, args.json).await;
        std::process::exit(code);
    }

    if let Err(err) = cardioqa::app::run(config).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("cardioqa: {err}");
        std::process::exit(1);
    }
    tracing::info!("CardioQA exited");
}
