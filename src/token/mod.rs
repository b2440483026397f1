//! Token Lifecycle
//!
//! API token operations against the Orchestrator: create, download, list,
//! and revoke, plus the ordered sequence tying them together.

pub mod lifecycle;

pub use lifecycle::{DefaultTokenLifecycle, TokenLifecycle};
