//! Error types for the FlowForge CLI

use thiserror::Error;

/// Failures surfaced by the infrastructure layer
#[derive(Error, Debug)]
pub enum FlowForgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Process error: {0}")]
    Process(String),
}
