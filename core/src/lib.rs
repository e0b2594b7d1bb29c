//! # ApiKit Core
//!
//! Transport-agnostic building blocks for the ApiKit response layer:
//! the business-error taxonomy, the exception value type returned by
//! endpoint handlers, and the short-circuiting chain for ordered
//! fallible steps.

pub mod chain;
pub mod errors;

// Re-export commonly used types for convenience
pub use chain::{Chain, Step};
pub use errors::*;
