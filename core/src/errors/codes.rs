//! Business error codes and their default messages and transport statuses.
//!
//! The numbering follows the error section of Google's API Design Guide:
//! the leading digits of a code are the HTTP status class it belongs to,
//! the trailing digits disambiguate conditions within that class.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// No error.
pub const OK: i32 = 0;
/// The client specified an invalid argument.
pub const ERR_INVALID_ARGUMENT: i32 = 40001;
/// The request cannot be executed in the current system state, such as
/// deleting a non-empty directory.
pub const ERR_FAILED_PRECONDITION: i32 = 40002;
/// The client specified an invalid range.
pub const ERR_OUT_OF_RANGE: i32 = 40003;
/// The request did not pass authentication due to a missing, invalid, or
/// expired token.
pub const ERR_UNAUTHENTICATED: i32 = 40100;
/// The client does not have enough permission.
pub const ERR_PERMISSION_DENIED: i32 = 40300;
/// The specified resource could not be found, or the request was denied for
/// reasons that are not disclosed.
pub const ERR_NOT_FOUND: i32 = 40400;
/// Concurrency conflict, such as a read-modify-write conflict.
pub const ERR_ABORTED: i32 = 40901;
/// The resource that the client tried to create already exists.
pub const ERR_ALREADY_EXISTS: i32 = 40902;
/// Resource quota reached or rate limit hit.
pub const ERR_RESOURCE_EXHAUSTED: i32 = 42900;
/// The client cancelled the request.
pub const ERR_CANCELLED: i32 = 49900;
/// Irrecoverable data loss or data corruption.
pub const ERR_DATA_LOSS: i32 = 50001;
/// Unknown server error.
pub const ERR_UNKNOWN: i32 = 50002;
/// Internal server error.
pub const ERR_INTERNAL: i32 = 50003;
/// The server does not implement the requested method.
pub const ERR_NOT_IMPLEMENTED: i32 = 50100;
/// Service unavailable, typically because the server is down.
pub const ERR_UNAVAILABLE: i32 = 50300;
/// The request deadline was exceeded.
pub const ERR_DEADLINE_EXCEEDED: i32 = 50400;

/// Sentinel code for errors that carry no business classification. Reserved
/// by the translator; handlers should not construct it themselves.
pub const UNCLASSIFIED: i32 = -1;

/// Lowest valid transport status.
pub const MIN_STATUS: u16 = 100;
/// Highest valid transport status.
pub const MAX_STATUS: u16 = 599;
/// Status used whenever a code has no mapping or a supplied status is
/// outside the valid range.
pub const FALLBACK_STATUS: u16 = 500;

static MESSAGES: Lazy<HashMap<i32, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (OK, "Success"),
        (ERR_INVALID_ARGUMENT, "Invalid argument"),
        (ERR_FAILED_PRECONDITION, "Failed precondition"),
        (ERR_OUT_OF_RANGE, "Out of range"),
        (ERR_UNAUTHENTICATED, "Invalid identity"),
        (ERR_PERMISSION_DENIED, "Insufficient permissions"),
        (ERR_NOT_FOUND, "Resource does not exist"),
        (ERR_ABORTED, "Operation aborted"),
        (ERR_ALREADY_EXISTS, "Resource already exists"),
        (ERR_RESOURCE_EXHAUSTED, "System busy"),
        (ERR_CANCELLED, "Client cancelled request"),
        (ERR_DATA_LOSS, "Data loss occurred"),
        (ERR_UNKNOWN, "Unknown error"),
        (ERR_INTERNAL, "Internal error"),
        (ERR_NOT_IMPLEMENTED, "Method not implemented"),
        (ERR_UNAVAILABLE, "Service suspended"),
        (ERR_DEADLINE_EXCEEDED, "System unable to execute"),
        (UNCLASSIFIED, "Internal error"),
    ])
});

static STATUS_CODES: Lazy<HashMap<i32, u16>> = Lazy::new(|| {
    HashMap::from([
        (OK, 200),
        (ERR_INVALID_ARGUMENT, 400),
        (ERR_FAILED_PRECONDITION, 400),
        (ERR_OUT_OF_RANGE, 400),
        (ERR_UNAUTHENTICATED, 401),
        (ERR_PERMISSION_DENIED, 403),
        (ERR_NOT_FOUND, 404),
        (ERR_ABORTED, 409),
        (ERR_ALREADY_EXISTS, 409),
        (ERR_RESOURCE_EXHAUSTED, 429),
        (ERR_CANCELLED, 499),
        (ERR_DATA_LOSS, 500),
        (ERR_UNKNOWN, 500),
        (ERR_INTERNAL, 500),
        (ERR_NOT_IMPLEMENTED, 501),
        (ERR_UNAVAILABLE, 503),
        (ERR_DEADLINE_EXCEEDED, 504),
        (UNCLASSIFIED, FALLBACK_STATUS),
    ])
});

/// Returns the default message registered for `code`, or an empty string
/// when the code is unknown.
pub fn message_for(code: i32) -> &'static str {
    MESSAGES.get(&code).copied().unwrap_or("")
}

/// Returns the transport status mapped to `code`, or [`FALLBACK_STATUS`]
/// when the code is unknown.
pub fn status_for(code: i32) -> u16 {
    STATUS_CODES.get(&code).copied().unwrap_or(FALLBACK_STATUS)
}
