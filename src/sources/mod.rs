//! Network access to the inference service.

mod query;

pub use query::{DispatchError, HttpDispatcher, QueryTransport, query_endpoint};
