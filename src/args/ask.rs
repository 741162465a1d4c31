//! One-shot question mode (`--ask`).

use std::io::Write;

use crate::logic::{
    LifecycleController, confidence_category, format_response, safety_category, submit_and_wait,
};
use crate::sources::{HttpDispatcher, QueryTransport};
use crate::state::{LifecycleState, QueryResponse};
use crate::theme::AppConfig;

/// What: Write the plain-text rendition of a successful answer.
///
/// Inputs:
/// - `resp`: Service response.
/// - `out`: Destination.
///
/// Details:
/// - Inline formatting is reduced to its text; warnings follow under "Safety Alerts";
///   the metric line comes last with the category identifiers.
fn write_plain(resp: &QueryResponse, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", format_response(&resp.response).to_plain())?;
    if !resp.warnings.is_empty() {
        writeln!(out)?;
        writeln!(out, "Safety Alerts:")?;
        for w in &resp.warnings {
            writeln!(out, "  - {w}")?;
        }
    }
    writeln!(out)?;
    writeln!(
        out,
        "Safety Score: {:.1}/100 ({}) | Confidence: {} ({}) | Sources: {} | Similarity: {:.2} | Response Time: {:.2}s",
        resp.safety_score,
        safety_category(resp.safety_score).as_str(),
        resp.confidence,
        confidence_category(&resp.confidence).as_str(),
        resp.knowledge_sources,
        resp.top_similarity,
        resp.response_time,
    )
}

/// What: Ask one question through `transport` and report the result.
///
/// Inputs:
/// - `transport`: Query transport.
/// - `question`: Raw question text.
/// - `json`: Print the raw response as JSON instead of plain text.
/// - `out` / `err`: Destinations for the answer and for failure messages.
///
/// Output:
/// - Process exit code: `0` on success, `1` on any failure.
///
/// Details:
/// - Runs the same controller path as the TUI, so validation and error
///   classification match the interactive client.
pub async fn run_ask<T: QueryTransport>(
    transport: &T,
    question: &str,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> i32 {
    let mut controller = LifecycleController::new();
    submit_and_wait(&mut controller, transport, question).await;
    match controller.state() {
        LifecycleState::Success { response } => {
            let written = if json {
                serde_json::to_string_pretty(response)
                    .map_err(std::io::Error::other)
                    .and_then(|s| writeln!(out, "{s}"))
            } else {
                write_plain(response, out)
            };
            match written {
                Ok(()) => 0,
                Err(e) => {
                    tracing::error!(error = %e, "failed to write answer");
                    1
                }
            }
        }
        LifecycleState::Failure { message } => {
            let _ = writeln!(err, "{message}");
            1
        }
        other => {
            tracing::error!(state = other.label(), "one-shot query ended without a result");
            1
        }
    }
}

/// What: Handle `--ask` against the configured service.
///
/// Inputs:
/// - `config`: Resolved configuration.
/// - `question`: Raw question text.
/// - `json`: JSON output toggle.
///
/// Output:
/// - Exit code for the process.
pub async fn handle_ask(config: &AppConfig, question: &str, json: bool) -> i32 {
    tracing::info!(api_url = %config.api_url, "one-shot mode requested from CLI");
    let dispatcher = HttpDispatcher::new(&config.api_url, config.request_timeout);
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_ask(
        &dispatcher,
        question,
        json,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
    .await
}
