//! # ApiKit Web
//!
//! Actix Web integration for ApiKit: the translator that turns handler
//! results into the uniform response envelope, a responder adapter so plain
//! handler functions are translated automatically, and logging setup.

pub mod handlers;
pub mod logging;
pub mod reply;
pub mod translator;

// Re-export commonly used types for convenience
pub use reply::Reply;
pub use translator::{HandlerError, HandlerResult, Translator};
