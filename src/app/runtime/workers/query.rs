use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::sources::QueryTransport;
use crate::state::{DispatchOutcome, WorkerCommand};

/// What: Spawn the background worker that performs query dispatches.
///
/// Inputs:
/// - `transport`: Transport used for every dispatch.
/// - `cmd_rx`: Dispatch and cancel orders from the event loop.
/// - `outcome_tx`: Channel receiving one [`DispatchOutcome`] per finished dispatch.
///
/// Output:
/// - Join handle of the worker loop; the loop ends when `cmd_rx` closes.
///
/// Details:
/// - Each dispatch runs in its own task so a `Cancel` for its generation can abort it.
/// - The worker does not serialize dispatches; single-flight is the controller's job.
/// - Aborted dispatches never report an outcome.
pub fn spawn_query_worker<T: QueryTransport>(
    transport: T,
    mut cmd_rx: mpsc::UnboundedReceiver<WorkerCommand>,
    outcome_tx: mpsc::UnboundedSender<DispatchOutcome>,
) -> JoinHandle<()> {
    let transport = Arc::new(transport);
    tokio::spawn(async move {
        let mut in_flight: Option<(u64, JoinHandle<()>)> = None;
        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                WorkerCommand::Dispatch(dispatch) => {
                    let generation = dispatch.generation;
                    let transport = Arc::clone(&transport);
                    let tx = outcome_tx.clone();
                    tracing::debug!(generation, "[Worker] starting dispatch");
                    let handle = tokio::spawn(async move {
                        let result = transport.dispatch(dispatch.request).await;
                        let _ = tx.send(DispatchOutcome { generation, result });
                    });
                    in_flight = Some((generation, handle));
                }
                WorkerCommand::Cancel(generation) => match in_flight.take() {
                    Some((current, handle)) if current == generation => {
                        if !handle.is_finished() {
                            tracing::info!(generation, "[Worker] aborting abandoned dispatch");
                        }
                        handle.abort();
                    }
                    other => in_flight = other,
                },
            }
        }
        tracing::debug!("[Worker] command channel closed; query worker exiting");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::DispatchError;
    use crate::state::{DispatchRequest, QueryRequest, QueryResponse};
    use std::time::Duration;

    /// Transport that answers after a fixed delay.
    struct SlowTransport {
        delay: Duration,
    }

    impl QueryTransport for SlowTransport {
        async fn dispatch(&self, request: QueryRequest) -> Result<QueryResponse, DispatchError> {
            tokio::time::sleep(self.delay).await;
            Ok(QueryResponse {
                response: request.query,
                safety_score: 80.0,
                confidence: "Medium".into(),
                knowledge_sources: 3,
                top_similarity: 0.6,
                warnings: vec!["Added professional consultation recommendation".into()],
                response_time: 0.4,
            })
        }
    }

    fn dispatch(generation: u64) -> WorkerCommand {
        WorkerCommand::Dispatch(DispatchRequest {
            generation,
            request: QueryRequest::new("What is cardiomyopathy?"),
        })
    }

    #[tokio::test]
    /// What: A dispatch reports exactly one outcome tagged with its generation.
    ///
    /// Inputs:
    /// - One dispatch with generation 7 against a fast transport.
    ///
    /// Output:
    /// - Outcome with generation 7 echoing the question.
    async fn worker_reports_outcome() {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (out_tx, mut out_rx) = mpsc::unbounded_channel();
        let _worker = spawn_query_worker(
            SlowTransport {
                delay: Duration::from_millis(1),
            },
            cmd_rx,
            out_tx,
        );
        cmd_tx.send(dispatch(7)).expect("worker alive");
        let outcome = tokio::time::timeout(Duration::from_secs(2), out_rx.recv())
            .await
            .expect("outcome in time")
            .expect("channel open");
        assert_eq!(outcome.generation, 7);
        assert_eq!(
            outcome.result.expect("success").response,
            "What is cardiomyopathy?"
        );
    }

    #[tokio::test]
    /// What: Cancelling the running generation aborts it so no outcome arrives.
    ///
    /// Inputs:
    /// - Slow dispatch (generation 1), a cancel for another generation, then for 1.
    ///
    /// Output:
    /// - No outcome within the observation window.
    async fn worker_cancel_aborts_dispatch() {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (out_tx, mut out_rx) = mpsc::unbounded_channel();
        let _worker = spawn_query_worker(
            SlowTransport {
                delay: Duration::from_millis(300),
            },
            cmd_rx,
            out_tx,
        );
        cmd_tx.send(dispatch(1)).expect("worker alive");
        cmd_tx.send(WorkerCommand::Cancel(99)).expect("worker alive");
        cmd_tx.send(WorkerCommand::Cancel(1)).expect("worker alive");
        let waited = tokio::time::timeout(Duration::from_millis(600), out_rx.recv()).await;
        assert!(waited.is_err(), "aborted dispatch must not report");
    }
}
