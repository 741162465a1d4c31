//! Translation of dispatch failures into user-facing messages.

use crate::logic::validate::VALIDATION_MESSAGE;
use crate::sources::DispatchError;

/// Generic message for failures that carry no service-provided detail.
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred";

/// Where a failure originated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Local length gate; never reached the network.
    Validation,
    /// Service returned a structured error with a `detail` string.
    Api,
    /// Anything else: unreachable host, timeout, malformed body, bare HTTP error.
    Unexpected,
}

/// A classified failure ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedFailure {
    /// Failure origin.
    pub kind: FailureKind,
    /// Message shown to the user.
    pub message: String,
}

impl ClassifiedFailure {
    /// Failure produced by the local length gate.
    #[must_use]
    pub fn validation() -> Self {
        Self {
            kind: FailureKind::Validation,
            message: VALIDATION_MESSAGE.to_string(),
        }
    }
}

/// What: Extract a string `detail` field from a structured error body.
///
/// Inputs:
/// - `body`: Decoded JSON error body.
///
/// Output:
/// - `Some(detail)` only when `body` is an object whose `detail` is a string.
#[must_use]
pub fn detail_message(body: &serde_json::Value) -> Option<&str> {
    body.get("detail").and_then(serde_json::Value::as_str)
}

/// What: Classify a dispatch failure.
///
/// Inputs:
/// - `err`: Raw failure from the transport.
///
/// Output:
/// - `Api` with the verbatim `detail` string when present, otherwise `Unexpected`
///   with [`FALLBACK_MESSAGE`].
///
/// Details:
/// - Total: never panics and always yields a displayable message.
/// - Non-string `detail` values (for example validation error lists) use the fallback.
#[must_use]
pub fn classify_failure(err: &DispatchError) -> ClassifiedFailure {
    if let DispatchError::Status {
        body: Some(body), ..
    } = err
        && let Some(detail) = detail_message(body)
    {
        return ClassifiedFailure {
            kind: FailureKind::Api,
            message: detail.to_string(),
        };
    }
    ClassifiedFailure {
        kind: FailureKind::Unexpected,
        message: FALLBACK_MESSAGE.to_string(),
    }
}
