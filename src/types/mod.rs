//! VCO Types
//!
//! Core type definitions for Orchestrator token operations.

pub mod config;
pub mod token;

pub use config::*;
pub use token::*;
