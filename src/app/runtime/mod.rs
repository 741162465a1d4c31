use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::sources::HttpDispatcher;
use crate::state::AppState;
use crate::theme::AppConfig;

use super::terminal::{or_restore, restore_terminal, setup_terminal};

mod channels;
mod event_loop;
mod handlers;
mod workers;

use channels::Channels;
use event_loop::run_event_loop;
use handlers::handle_shutdown;
use workers::auxiliary::{spawn_event_thread, spawn_tick_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment flag that skips terminal setup (used by smoke tests).
pub const HEADLESS_ENV: &str = "CARDIOQA_TEST_HEADLESS";

/// What: Run the CardioQA TUI end-to-end: initialize terminal and state, spawn the query,
/// tick and event workers, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `config`: Resolved configuration; the dispatcher is built from it here.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - With `CARDIOQA_TEST_HEADLESS=1` no terminal is touched and nothing is rendered.
pub async fn run(config: AppConfig) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    let keyboard_enhanced = if headless { false } else { setup_terminal()? };
    let mut terminal = if headless {
        None
    } else {
        Some(or_restore(
            Terminal::new(CrosstermBackend::new(std::io::stdout())),
            || restore_terminal(keyboard_enhanced),
        )?)
    };

    let dispatcher = HttpDispatcher::new(&config.api_url, config.request_timeout);
    tracing::info!(endpoint = %dispatcher.endpoint(), headless, "runtime starting");
    let mut app = AppState::new(config);
    app.keyboard_enhanced = keyboard_enhanced;
    let mut channels = Channels::new(dispatcher);

    spawn_tick_worker(channels.tick_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    handle_shutdown(&mut app, &channels.worker_tx);
    if !headless {
        restore_terminal(keyboard_enhanced)?;
    }
    tracing::info!("runtime exited");
    Ok(())
}
