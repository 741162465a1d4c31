//! Lifecycle states of the query controller.

use crate::state::types::QueryResponse;

/// Currently displayed state of the query lifecycle.
///
/// Exactly one variant is active; at most one of response or error is visible.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LifecycleState {
    /// Nothing in flight and nothing shown.
    #[default]
    Idle,
    /// Transient state while the draft is checked; never observable between calls.
    Validating,
    /// A request for `query` is in flight.
    Loading {
        /// Trimmed question that was sent.
        query: String,
    },
    /// The last request succeeded.
    Success {
        /// Answer received from the service.
        response: QueryResponse,
    },
    /// The last attempt failed, locally or remotely.
    Failure {
        /// User-facing message.
        message: String,
    },
}

impl LifecycleState {
    /// What: Report whether a request is currently in flight.
    ///
    /// Output:
    /// - `true` only for [`LifecycleState::Loading`].
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Response to render, if the last request succeeded.
    #[must_use]
    pub const fn response(&self) -> Option<&QueryResponse> {
        match self {
            Self::Success { response } => Some(response),
            _ => None,
        }
    }

    /// Error message to render, if the last attempt failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure { message } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Short label used in log lines.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Loading { .. } => "loading",
            Self::Success { .. } => "success",
            Self::Failure { .. } => "failure",
        }
    }
}
