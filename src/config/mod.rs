//! Configuration for the opsdrill CLI.
//!
//! This module provides a flexible configuration system that supports:
//! - File-based configuration
//! - Environment variable overrides
//! - Builder pattern for programmatic configuration
//! - Validation of simulation cadences and health thresholds

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

// Re-export the main types for convenience
pub use types::{Config, HealthSettings, OutputSettings, SimulationSettings};

#[cfg(test)]
mod tests;
