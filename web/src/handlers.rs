//! Ready-made handlers.

use crate::reply::Reply;

/// Liveness handler that answers "pong" through the translator, so hitting
/// it also verifies the response path end to end.
pub async fn ping() -> Reply<&'static str> {
    Reply::ok("pong")
}
