//! Command-line argument parsing and handling.

pub mod ask;
pub mod definition;
pub mod utils;

// Re-export commonly used items
pub use ask::handle_ask;
pub use definition::Args;
pub use utils::determine_log_level;
