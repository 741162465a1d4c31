/// Tick and terminal event workers.
pub mod auxiliary;
/// Query dispatch worker.
pub mod query;
