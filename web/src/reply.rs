//! Responder adapter that routes handler results through the translator.

use actix_web::body::BoxBody;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Serialize;

use crate::translator::{HandlerError, HandlerResult, Translator};

/// Handler return value that is translated into the uniform envelope when
/// the response is rendered.
///
/// Endpoints written as `async fn(...) -> Reply<T>` need no manual envelope
/// handling; the [`Translator`] registered as app data does the conversion.
/// When no translator is registered, the production-posture default applies,
/// so descriptions never leak by accident.
pub struct Reply<T>(pub HandlerResult<T>);

impl<T> Reply<T> {
    /// Success reply wrapping `data`.
    pub fn ok(data: T) -> Self {
        Self(Ok(data))
    }

    /// Failure reply.
    pub fn err(err: impl Into<HandlerError>) -> Self {
        Self(Err(err.into()))
    }
}

impl<T> From<HandlerResult<T>> for Reply<T> {
    fn from(result: HandlerResult<T>) -> Self {
        Self(result)
    }
}

impl<T: Serialize> Responder for Reply<T> {
    type Body = BoxBody;

    fn respond_to(self, req: &HttpRequest) -> HttpResponse<Self::Body> {
        match req.app_data::<web::Data<Translator>>() {
            Some(translator) => translator.respond(self.0),
            None => Translator::default().respond(self.0),
        }
    }
}
