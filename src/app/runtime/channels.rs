use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::QueryTransport;
use crate::state::{DispatchOutcome, WorkerCommand};

use super::workers::query::spawn_query_worker;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains all channel senders and receivers used for communication
///   between the main event loop and background workers
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiver side of `event_tx`.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on shutdown to stop the reader thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Dispatch and cancel orders for the query worker.
    pub worker_tx: mpsc::UnboundedSender<WorkerCommand>,
    /// Outcomes reported by the query worker.
    pub outcome_rx: mpsc::UnboundedReceiver<DispatchOutcome>,
    /// Spinner ticks.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiver side of `tick_tx`.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create all channels and spawn the query worker over `transport`.
    ///
    /// Inputs:
    /// - `transport`: Transport handed to the query worker.
    pub fn new<T: QueryTransport>(transport: T) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (worker_tx, worker_rx) = mpsc::unbounded_channel();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        spawn_query_worker(transport, worker_rx, outcome_tx);
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            worker_tx,
            outcome_rx,
            tick_tx,
            tick_rx,
        }
    }
}
