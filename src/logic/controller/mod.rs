//! Query lifecycle state machine.
//!
//! The controller is the single writer of the displayed [`LifecycleState`].
//! It never performs I/O itself: `submit` hands back a [`DispatchRequest`]
//! for the caller to execute, and the caller feeds the result back through
//! `complete`. Every dispatch carries a generation number so an outcome that
//! arrives after a `reset` (or for any request other than the current one) is
//! dropped instead of overwriting newer state.

use crate::logic::classify::{ClassifiedFailure, classify_failure};
use crate::logic::validate::validate_query;
use crate::sources::QueryTransport;
use crate::state::{DispatchOutcome, DispatchRequest, LifecycleState, QueryRequest};


/// Finite state machine driving one question at a time.
#[derive(Debug)]
pub struct LifecycleController {
    state: LifecycleState,
    draft: String,
    generation: u64,
    in_flight: Option<u64>,
}

impl Default for LifecycleController {
    fn default() -> Self {
        Self::new()
    }
}

impl LifecycleController {
    /// Create an idle controller with an empty draft.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LifecycleState::Idle,
            draft: String::new(),
            generation: 0,
            in_flight: None,
        }
    }

    /// Currently displayed state.
    #[must_use]
    pub const fn state(&self) -> &LifecycleState {
        &self.state
    }

    /// Current draft text.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// What: Mutable access to the draft.
    ///
    /// Details:
    /// - Editing is allowed in every state, including while a request is in flight;
    ///   the pending request is unaffected.
    pub const fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    /// Replace the draft wholesale (used by the example-question shortcuts).
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Generation of the request currently in flight, if any.
    #[must_use]
    pub const fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// What: Report whether the submit control should be enabled.
    ///
    /// Output:
    /// - `true` when nothing is in flight and the draft passes validation.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.state.is_loading() && validate_query(&self.draft).is_ok()
    }

    /// What: Submit `raw` as a question.
    ///
    /// Inputs:
    /// - `raw`: Untrimmed question text.
    ///
    /// Output:
    /// - `Some(DispatchRequest)` exactly when the state moved to `Loading`; the caller must
    ///   perform that one dispatch and report back through [`Self::complete`].
    /// - `None` when the submission was ignored (already loading) or rejected locally.
    ///
    /// Details:
    /// - While `Loading` this is a no-op, which keeps at most one request in flight.
    /// - A too-short question moves to `Failure` with the validation message and
    ///   produces no request.
    /// - Entering `Loading` drops any previously shown response or error.
    pub fn submit(&mut self, raw: &str) -> Option<DispatchRequest> {
        if self.state.is_loading() {
            tracing::debug!(
                generation = ?self.in_flight,
                "submit ignored: request already in flight"
            );
            return None;
        }
        self.state = LifecycleState::Validating;
        let query = match validate_query(raw) {
            Ok(q) => q.to_string(),
            Err(_) => {
                tracing::info!("submit rejected by length gate");
                self.state = LifecycleState::Failure {
                    message: ClassifiedFailure::validation().message,
                };
                return None;
            }
        };
        self.generation += 1;
        let generation = self.generation;
        self.in_flight = Some(generation);
        self.state = LifecycleState::Loading {
            query: query.clone(),
        };
        tracing::info!(generation, chars = query.chars().count(), "query dispatched");
        Some(DispatchRequest {
            generation,
            request: QueryRequest::new(query),
        })
    }

    /// Submit the current draft. See [`Self::submit`].
    pub fn submit_draft(&mut self) -> Option<DispatchRequest> {
        let raw = self.draft.clone();
        self.submit(&raw)
    }

    /// What: Apply the outcome of a dispatch.
    ///
    /// Inputs:
    /// - `outcome`: Worker result tagged with the generation it was dispatched under.
    ///
    /// Output:
    /// - `true` when the outcome was current and the state moved to `Success`/`Failure`;
    ///   `false` when it was stale and discarded.
    pub fn complete(&mut self, outcome: DispatchOutcome) -> bool {
        if self.in_flight != Some(outcome.generation) {
            tracing::warn!(
                generation = outcome.generation,
                current = ?self.in_flight,
                "discarding stale query outcome"
            );
            return false;
        }
        self.in_flight = None;
        self.state = match outcome.result {
            Ok(response) => {
                tracing::info!(
                    generation = outcome.generation,
                    safety_score = response.safety_score,
                    warnings = response.warnings.len(),
                    "query succeeded"
                );
                LifecycleState::Success { response }
            }
            Err(err) => {
                let failure = classify_failure(&err);
                tracing::warn!(
                    generation = outcome.generation,
                    error = %err,
                    kind = ?failure.kind,
                    "query failed"
                );
                LifecycleState::Failure {
                    message: failure.message,
                }
            }
        };
        true
    }

    /// What: Return to `Idle`, clearing draft, response and error.
    ///
    /// Output:
    /// - Generation of the request that was in flight, so the caller can abort it.
    ///
    /// Details:
    /// - Allowed from every state, including `Loading`. Any outcome for the abandoned
    ///   generation is discarded by [`Self::complete`].
    pub fn reset(&mut self) -> Option<u64> {
        let abandoned = self.in_flight.take();
        tracing::info!(from = self.state.label(), abandoned = ?abandoned, "lifecycle reset");
        self.state = LifecycleState::Idle;
        self.draft.clear();
        abandoned
    }
}

/// What: Run one submission to completion against a transport.
///
/// Inputs:
/// - `controller`: State machine to drive.
/// - `transport`: Transport performing the dispatch.
/// - `raw`: Untrimmed question text.
///
/// Output:
/// - `true` when a request was dispatched and its outcome applied.
///
/// Details:
/// - Used by the one-shot CLI mode and by headless tests; the interactive runtime
///   routes the same `DispatchRequest` through its query worker instead.
pub async fn submit_and_wait<T: QueryTransport>(
    controller: &mut LifecycleController,
    transport: &T,
    raw: &str,
) -> bool {
    let Some(dispatch) = controller.submit(raw) else {
        return false;
    };
    let result = transport.dispatch(dispatch.request).await;
    controller.complete(DispatchOutcome {
        generation: dispatch.generation,
        result,
    })
}
