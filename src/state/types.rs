//! Core value types exchanged with the inference service.

/// Request body sent to `POST {base_url}/query`.
///
/// Built once per submission from the validated draft and dropped after the
/// exchange completes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryRequest {
    /// Trimmed, non-empty question text.
    pub query: String,
    /// Ask the service to attach retrieval metadata; always `true` on the wire.
    pub include_metadata: bool,
}

impl QueryRequest {
    /// What: Build a request for an already validated question.
    ///
    /// Inputs:
    /// - `query`: Trimmed question text.
    ///
    /// Output:
    /// - Immutable request value ready for the dispatcher, with `include_metadata` set.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            include_metadata: true,
        }
    }
}

/// Structured answer returned by the inference service.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QueryResponse {
    /// Answer text using a small `**strong**` / `*emphasis*` inline syntax.
    pub response: String,
    /// Service-computed 0–100 safety rating.
    pub safety_score: f64,
    /// Service-reported confidence label ("High", "Medium", anything else).
    pub confidence: String,
    /// Number of retrieved documents backing the answer.
    pub knowledge_sources: u64,
    /// Highest similarity between the question and any retrieved source.
    pub top_similarity: f64,
    /// Safety caveats in the order the service produced them.
    #[serde(default)]
    pub warnings: Vec<String>,
    /// Server-side processing time in seconds.
    pub response_time: f64,
}

/// Dispatch order handed from the controller to the query worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchRequest {
    /// Generation the outcome must echo back to be accepted.
    pub generation: u64,
    /// Request body to send.
    pub request: QueryRequest,
}

/// Outcome of one dispatch, as reported back by the query worker.
#[derive(Debug)]
pub struct DispatchOutcome {
    /// Echoed generation from the originating [`DispatchRequest`].
    pub generation: u64,
    /// Parsed answer or the raw transport failure.
    pub result: Result<QueryResponse, crate::sources::DispatchError>,
}

/// Message sent from the event loop to the query worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkerCommand {
    /// Start the given dispatch.
    Dispatch(DispatchRequest),
    /// Abort the dispatch with this generation if it is still running.
    Cancel(u64),
}
