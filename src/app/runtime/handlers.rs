use tokio::sync::mpsc;

use crate::state::{AppState, DispatchOutcome, WorkerCommand};

/// What: Apply a dispatch outcome reported by the query worker.
///
/// Inputs:
/// - `app`: Application state.
/// - `outcome`: Worker result.
///
/// Details:
/// - Stale outcomes are dropped by the controller; the scroll position is only
///   reset when a new answer or error is actually shown.
pub fn handle_query_outcome(app: &mut AppState, outcome: DispatchOutcome) {
    if app.controller.complete(outcome) {
        app.response_scroll = 0;
    }
}

/// Advance the loading spinner while a request is in flight.
pub const fn handle_tick(app: &mut AppState) {
    if app.controller.state().is_loading() {
        app.spinner_frame = app.spinner_frame.wrapping_add(1);
    }
}

/// What: Abandon any request still in flight when the event loop ends.
///
/// Inputs:
/// - `app`: Application state.
/// - `worker_tx`: Channel to the query worker.
///
/// Details:
/// - Sends the same cancel order as an interactive reset so the worker aborts the task.
pub fn handle_shutdown(app: &mut AppState, worker_tx: &mpsc::UnboundedSender<WorkerCommand>) {
    if let Some(generation) = app.controller.reset() {
        tracing::debug!(generation, "abandoning request in flight on exit");
        let _ = worker_tx.send(WorkerCommand::Cancel(generation));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::DispatchError;

    #[test]
    /// What: Shutdown cancels the in-flight generation and is silent when idle.
    ///
    /// Inputs:
    /// - Idle state, then a loading state.
    ///
    /// Output:
    /// - No command when idle; exactly `Cancel(generation)` when loading.
    fn shutdown_cancels_in_flight_request() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        handle_shutdown(&mut app, &tx);
        assert!(rx.try_recv().is_err());

        let d = app.controller.submit("How do statins work?").expect("dispatch");
        handle_shutdown(&mut app, &tx);
        assert_eq!(rx.try_recv().ok(), Some(WorkerCommand::Cancel(d.generation)));
        assert!(rx.try_recv().is_err());
        assert_eq!(app.controller.in_flight(), None);
    }

    #[test]
    fn tick_only_spins_while_loading() {
        let mut app = AppState::default();
        handle_tick(&mut app);
        assert_eq!(app.spinner_frame, 0);
        let _ = app.controller.submit("How do statins work?");
        handle_tick(&mut app);
        handle_tick(&mut app);
        assert_eq!(app.spinner_frame, 2);
    }

    #[test]
    /// What: A current outcome is applied and resets the scroll offset.
    ///
    /// Inputs:
    /// - Loading state with scroll 10, then a failure outcome for the current generation.
    ///
    /// Output:
    /// - State `Failure` with the fallback message and scroll 0.
    fn outcome_applies_and_resets_scroll() {
        let mut app = AppState::default();
        let d = app.controller.submit("How do statins work?").expect("dispatch");
        app.response_scroll = 10;
        handle_query_outcome(
            &mut app,
            DispatchOutcome {
                generation: d.generation,
                result: Err(DispatchError::Decode("eof".into())),
            },
        );
        assert_eq!(
            app.controller.state().error(),
            Some(crate::logic::FALLBACK_MESSAGE)
        );
        assert_eq!(app.response_scroll, 0);
    }
}
