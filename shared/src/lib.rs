//! Shared types and configuration for ApiKit
//!
//! This crate provides the pieces used across the kit's crates:
//! - The response envelope and its payload records
//! - Runtime environment and debug-mode configuration
//! - Small query-string utilities

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{DebugMode, Environment, ParseEnvironmentError};
pub use types::{Envelope, Page, RowsAffected};
