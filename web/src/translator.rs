//! Translation of handler outcomes into the uniform response envelope.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

use ak_core::errors::codes::{self, message_for, status_for};
use ak_core::errors::{BusinessError, Exception};
use ak_shared::config::{DebugMode, Environment};
use ak_shared::types::Envelope;

/// Type-erased error returned by endpoint handlers. Business exceptions
/// travel through it unchanged and are recovered by downcast; anything else
/// is treated as unclassified.
pub type HandlerError = anyhow::Error;

/// Result type returned by endpoint handlers.
pub type HandlerResult<T> = Result<T, HandlerError>;

/// The single point where handler outcomes become wire responses.
///
/// Carries the debug posture explicitly instead of reading process globals,
/// so a test can run one translator in debug and another in production
/// within the same process. Cloning shares the underlying debug flag.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    debug: DebugMode,
}

impl Translator {
    /// Creates a translator with the given debug posture.
    pub fn new(debug: DebugMode) -> Self {
        Self { debug }
    }

    /// Creates a translator whose debug posture follows the process
    /// environment (`ENVIRONMENT`/`ENV`/`RUST_ENV`).
    pub fn from_env() -> Self {
        Self::new(DebugMode::from_environment(Environment::from_env()))
    }

    /// Handle to the debug flag, for administrative toggling.
    pub fn debug_mode(&self) -> &DebugMode {
        &self.debug
    }

    /// Converts a handler outcome into exactly one response write.
    ///
    /// Success wraps `data` in a success envelope with HTTP 200. Failure is
    /// classified by downcast: an [`Exception`] supplies its own code, hint,
    /// and status; any other error collapses to the unclassified sentinel
    /// with the internal-error status. The developer description is included
    /// only while debug mode is on.
    pub fn respond<T: Serialize>(&self, result: HandlerResult<T>) -> HttpResponse {
        match result {
            Ok(data) => {
                tracing::debug!(status = StatusCode::OK.as_u16(), "request succeeded");
                HttpResponse::Ok().json(Envelope::success(data))
            }
            Err(err) => self.respond_failure(&err),
        }
    }

    fn respond_failure(&self, err: &HandlerError) -> HttpResponse {
        let debug = self.debug.is_on();

        let (status, envelope) = match err.downcast_ref::<Exception>() {
            Some(ex) => {
                let status = resolve_status(ex);
                let mut envelope = Envelope::<()>::failure(ex.code(), ex.info());
                if debug {
                    envelope = envelope.with_desc(ex.desc());
                }
                (status, envelope)
            }
            None => {
                // Unclassified: status is fixed, never derived from the raw
                // error.
                let mut envelope = Envelope::<()>::failure(
                    codes::UNCLASSIFIED,
                    message_for(codes::UNCLASSIFIED),
                );
                if debug {
                    envelope = envelope.with_desc(err.to_string());
                }
                (StatusCode::INTERNAL_SERVER_ERROR, envelope)
            }
        };

        tracing::debug!(
            code = envelope.code.unwrap_or_default(),
            info = envelope.info.as_deref().unwrap_or_default(),
            desc = envelope.desc.as_deref().unwrap_or_default(),
            status = status.as_u16(),
            "request failed"
        );
        HttpResponse::build(status).json(envelope)
    }
}

/// Resolves the transport status for a classified failure: the explicit
/// override when one was supplied, otherwise the table mapping for the
/// code. Anything outside `100..=599` collapses to the internal-error
/// fallback so an invalid status is never sent downstream.
fn resolve_status(ex: &Exception) -> StatusCode {
    let raw = match ex.status() {
        Some(explicit) => explicit,
        None => status_for(ex.code()),
    };
    if !(codes::MIN_STATUS..=codes::MAX_STATUS).contains(&raw) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    StatusCode::from_u16(raw).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
