//! Decision logic of the query lifecycle.
//!
//! Everything here is independent of the terminal front end:
//! - `validate`: length gate for drafts.
//! - `format`: safe inline formatting of answers.
//! - `category`: score and confidence bands.
//! - `classify`: user-facing messages for failures.
//! - `controller`: the lifecycle state machine tying them together.

pub mod category;
pub mod classify;
pub mod controller;
pub mod format;
pub mod validate;

pub use category::{ConfidenceCategory, SafetyCategory, confidence_category, safety_category};
pub use classify::{ClassifiedFailure, FALLBACK_MESSAGE, FailureKind, classify_failure};
pub use controller::{LifecycleController, submit_and_wait};
pub use format::{FormattedText, Inline, escape_markup, format_response};
pub use validate::{MIN_QUERY_CHARS, VALIDATION_MESSAGE, ValidationError, validate_query};
