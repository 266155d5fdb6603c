//! FlowForge Core - shared functionality for the FlowForge CLI
//!
//! Paths, configuration, and process lookup used by the `flowforge`
//! binary.

pub mod config;
pub mod paths;
pub mod process;

pub use config::N8nConfig;
pub use paths::Paths;
