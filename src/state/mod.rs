//! Application state and the value types it carries.

pub mod app_state;
pub mod lifecycle;
pub mod types;

pub use app_state::{AppState, EXAMPLE_QUESTIONS};
pub use lifecycle::LifecycleState;
pub use types::{DispatchOutcome, DispatchRequest, QueryRequest, QueryResponse, WorkerCommand};
