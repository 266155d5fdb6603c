//! FlowForge - command-line companion for a local n8n instance
//!
//! Thin sequential glue around three collaborators: a process runner,
//! an HTTP client, and a JSON-to-display-model mapper. Commands compose
//! one or two service calls and render a table or JSON.

pub mod client;
pub mod commands;
pub mod errors;
pub mod exec;
pub mod health;
pub mod models;
pub mod output;
pub mod process;
pub mod system;
pub mod workflows;
