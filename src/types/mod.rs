//! Core domain types for access-grant logging.
//!
//! These types encode the call contract between a dispatching gate daemon
//! and the journal, keeping the "what was granted" vocabulary separate from
//! the storage layer.

pub mod grant;

// Re-export commonly used types at the module level
pub use grant::{AccessGrant, ActionCode};
