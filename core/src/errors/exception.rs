//! The exception value type returned by endpoint handlers.

use std::error::Error as StdError;
use std::fmt;

use crate::errors::codes::{self, message_for};

/// Capability contract for errors that carry a business code alongside
/// user-facing and developer-facing text. The response translator extracts
/// these three fields; anything that cannot provide them is treated as
/// unclassified.
pub trait BusinessError {
    /// Business error code.
    fn code(&self) -> i32;
    /// User-facing message, always safe to return to a client.
    fn info(&self) -> &str;
    /// Developer-facing description, exposed only in debug postures.
    fn desc(&self) -> &str;
}

/// Business exception carrying a code, a client-safe message, and an
/// optional developer-facing description.
///
/// An `Exception` is fully formed at construction; the `with_*` decorators
/// consume and return the value rather than mutating in place. Once handed
/// to the translator it is only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exception {
    code: i32,
    info: String,
    desc: String,
    status: Option<u16>,
}

impl Exception {
    /// Creates an exception with the given code. An empty `info` falls back
    /// to the code's registered default message; if the code is not
    /// registered either, the message stays empty; callers should treat
    /// that as a bug at the construction site.
    pub fn new(code: i32, info: impl Into<String>) -> Self {
        let mut info = info.into();
        if info.is_empty() {
            info = message_for(code).to_owned();
        }
        Self {
            code,
            info,
            desc: String::new(),
            status: None,
        }
    }

    /// Captures `err`'s message as the developer-facing description.
    pub fn with_err(mut self, err: impl fmt::Display) -> Self {
        self.desc = err.to_string();
        self
    }

    /// Sets the developer-facing description.
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    /// Overrides the transport status used when this exception is
    /// translated. A value outside `100..=599` resolves to the
    /// internal-error fallback at translation time; it is never sent
    /// downstream.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// The explicit transport-status override, if one was supplied.
    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

// Named constructors for the closed taxonomy. Each takes its message and
// transport status from the code tables.
impl Exception {
    pub fn invalid_argument() -> Self {
        Self::new(codes::ERR_INVALID_ARGUMENT, "")
    }

    pub fn failed_precondition() -> Self {
        Self::new(codes::ERR_FAILED_PRECONDITION, "")
    }

    pub fn out_of_range() -> Self {
        Self::new(codes::ERR_OUT_OF_RANGE, "")
    }

    pub fn unauthenticated() -> Self {
        Self::new(codes::ERR_UNAUTHENTICATED, "")
    }

    pub fn permission_denied() -> Self {
        Self::new(codes::ERR_PERMISSION_DENIED, "")
    }

    pub fn not_found() -> Self {
        Self::new(codes::ERR_NOT_FOUND, "")
    }

    pub fn aborted() -> Self {
        Self::new(codes::ERR_ABORTED, "")
    }

    pub fn already_exists() -> Self {
        Self::new(codes::ERR_ALREADY_EXISTS, "")
    }

    pub fn resource_exhausted() -> Self {
        Self::new(codes::ERR_RESOURCE_EXHAUSTED, "")
    }

    pub fn cancelled() -> Self {
        Self::new(codes::ERR_CANCELLED, "")
    }

    pub fn data_loss() -> Self {
        Self::new(codes::ERR_DATA_LOSS, "")
    }

    pub fn unknown() -> Self {
        Self::new(codes::ERR_UNKNOWN, "")
    }

    pub fn internal() -> Self {
        Self::new(codes::ERR_INTERNAL, "")
    }

    pub fn not_implemented() -> Self {
        Self::new(codes::ERR_NOT_IMPLEMENTED, "")
    }

    pub fn unavailable() -> Self {
        Self::new(codes::ERR_UNAVAILABLE, "")
    }

    pub fn deadline_exceeded() -> Self {
        Self::new(codes::ERR_DEADLINE_EXCEEDED, "")
    }
}

impl BusinessError for Exception {
    fn code(&self) -> i32 {
        self.code
    }

    fn info(&self) -> &str {
        &self.info
    }

    fn desc(&self) -> &str {
        &self.desc
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Prefer the most specific text available.
        if !self.desc.is_empty() {
            f.write_str(&self.desc)
        } else if !self.info.is_empty() {
            f.write_str(&self.info)
        } else {
            f.write_str(message_for(codes::ERR_UNKNOWN))
        }
    }
}

impl StdError for Exception {}
