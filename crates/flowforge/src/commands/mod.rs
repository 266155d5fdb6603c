//! Subcommand implementations
//!
//! Each command calls one or two services, branches on their success
//! flags, and returns the process exit code.

pub mod doctor;
pub mod health;
pub mod restart;
pub mod start;
pub mod stop;
pub mod workflows;
