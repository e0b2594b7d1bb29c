//! Runtime configuration.

mod debug;
mod environment;

pub use debug::DebugMode;
pub use environment::{Environment, ParseEnvironmentError};
