//! VCO Core Components
//!
//! Core infrastructure for Orchestrator calls.

pub mod rpc;
pub mod session;
pub mod transport;

pub use rpc::*;
pub use session::*;
pub use transport::*;
