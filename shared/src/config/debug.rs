//! Process-wide debug posture.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Environment;

/// Shared debug-mode flag.
///
/// Clones share the same underlying flag, so a handle can be given to the
/// translator at startup and toggled later from an administrative path;
/// the new value is observed on the next read. Reads and writes are atomic
/// and safe under concurrent request handling.
#[derive(Debug, Clone)]
pub struct DebugMode(Arc<AtomicBool>);

impl DebugMode {
    /// Creates a flag with the given initial posture.
    pub fn new(on: bool) -> Self {
        Self(Arc::new(AtomicBool::new(on)))
    }

    /// Derives the posture from an environment: debug everywhere except
    /// production.
    pub fn from_environment(env: Environment) -> Self {
        Self::new(env.is_debug())
    }

    /// Whether debug mode is currently active.
    pub fn is_on(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Toggles the posture; takes effect on the next read.
    pub fn set(&self, on: bool) {
        self.0.store(on, Ordering::Relaxed);
    }
}

impl Default for DebugMode {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_off() {
        assert!(!DebugMode::default().is_on());
    }

    #[test]
    fn test_from_environment() {
        assert!(DebugMode::from_environment(Environment::Development).is_on());
        assert!(DebugMode::from_environment(Environment::Staging).is_on());
        assert!(!DebugMode::from_environment(Environment::Production).is_on());
    }

    #[test]
    fn test_toggle_is_visible_through_clones() {
        let flag = DebugMode::new(false);
        let seen_by_translator = flag.clone();

        flag.set(true);
        assert!(seen_by_translator.is_on());

        flag.set(false);
        assert!(!seen_by_translator.is_on());
    }
}
