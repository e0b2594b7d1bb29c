//! Helpers for building SQL LIKE patterns.

/// Wraps the search value with LIKE wildcards on both sides.
/// `wrap_like("test")` returns `"%test%"`.
pub fn wrap_like(search_value: &str) -> String {
    format!("%{}%", search_value)
}

/// Wraps the search value with a LIKE wildcard on the left side.
/// `wrap_left_like("test")` returns `"%test"`.
pub fn wrap_left_like(search_value: &str) -> String {
    format!("%{}", search_value)
}
