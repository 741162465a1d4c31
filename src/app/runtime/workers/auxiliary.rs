use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// Interval between spinner ticks.
const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// What: Spawn the periodic tick worker.
///
/// Inputs:
/// - `tick_tx`: Channel receiving one `()` per interval.
///
/// Details:
/// - Exits when the receiver is dropped.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn a background thread that reads terminal events.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started.
/// - `event_tx`: Channel receiving terminal events.
/// - `event_thread_cancelled`: Flag checked between polls to stop the thread.
///
/// Details:
/// - Polls with a short timeout so cancellation is noticed promptly.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if event_thread_cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read() {
                        if event_thread_cancelled.load(Ordering::Relaxed) {
                            break;
                        }
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                }
                // No event or transient poll error: loop back to the cancellation check
                Ok(false) | Err(_) => {}
            }
        }
    });
}
