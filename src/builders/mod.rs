//! Builders
//!
//! Fluent builder patterns for VCO configuration.

pub mod config;

pub use config::{vco_config, VcoConfigBuilder};
