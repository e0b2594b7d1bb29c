//! End-to-end tests for response translation through a real Actix service.

use actix_web::{test, web, App};
use serde_json::Value;
use thiserror::Error;

use ak_core::errors::codes;
use ak_core::{Chain, Exception};
use ak_shared::{DebugMode, Envelope};
use ak_web::handlers::ping;
use ak_web::{Reply, Translator};

/// Unclassified error, carrying no business code.
#[derive(Debug, Error)]
enum DemoError {
    #[error("boom")]
    Boom,
}

async fn missing() -> Reply<()> {
    Reply::err(Exception::not_found())
}

async fn described() -> Reply<()> {
    Reply::err(Exception::internal().with_desc("db connection refused"))
}

async fn boom() -> Reply<()> {
    Reply::err(DemoError::Boom)
}

async fn teapot() -> Reply<()> {
    Reply::err(Exception::invalid_argument().with_status(418))
}

async fn overflow() -> Reply<()> {
    Reply::err(Exception::invalid_argument().with_status(9999))
}

#[derive(serde::Deserialize)]
struct WidgetQuery {
    #[serde(default)]
    name: String,
    #[serde(default)]
    count: u32,
}

async fn create_widget(query: web::Query<WidgetQuery>) -> Reply<&'static str> {
    let q = query.into_inner();
    let checked = Chain::new()
        .then(|| {
            if q.name.is_empty() {
                return Err(Exception::invalid_argument().with_desc("name is required"));
            }
            Ok(())
        })
        .then(|| {
            if q.count > 100 {
                return Err(Exception::out_of_range());
            }
            Ok(())
        })
        .into_result();

    match checked {
        Ok(()) => Reply::ok("created"),
        Err(ex) => Reply::err(ex),
    }
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/ping", web::get().to(ping))
        .route("/missing", web::get().to(missing))
        .route("/described", web::get().to(described))
        .route("/boom", web::get().to(boom))
        .route("/teapot", web::get().to(teapot))
        .route("/overflow", web::get().to(overflow))
        .route("/widgets", web::get().to(create_widget));
}

/// Service with no translator registered: the production-posture default
/// applies.
macro_rules! default_service {
    () => {
        test::init_service(App::new().configure(routes)).await
    };
}

macro_rules! service_with {
    ($translator:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($translator))
                .configure(routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_success_envelope() {
    let app = default_service!();

    let req = test::TestRequest::get().uri("/ping").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["succeeded"], true);
    assert_eq!(body["data"], "pong");
    assert!(body.get("code").is_none());
    assert!(body.get("info").is_none());
    assert!(body.get("desc").is_none());
}

#[actix_web::test]
async fn test_classified_error_maps_status_and_code() {
    let app = default_service!();

    let req = test::TestRequest::get().uri("/missing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Envelope<Value> = test::read_body_json(resp).await;
    assert!(!body.succeeded);
    assert_eq!(body.code, Some(codes::ERR_NOT_FOUND));
    assert_eq!(body.info.as_deref(), Some("Resource does not exist"));
    assert_eq!(body.data, None);
    assert_eq!(body.desc, None);
}

#[actix_web::test]
async fn test_desc_is_redacted_outside_debug_mode() {
    let app = default_service!();

    let req = test::TestRequest::get().uri("/described").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Envelope<Value> = test::read_body_json(resp).await;
    assert_eq!(body.desc, None);
}

#[actix_web::test]
async fn test_desc_is_exposed_in_debug_mode() {
    let app = service_with!(Translator::new(DebugMode::new(true)));

    let req = test::TestRequest::get().uri("/described").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Envelope<Value> = test::read_body_json(resp).await;
    assert_eq!(body.desc.as_deref(), Some("db connection refused"));
}

#[actix_web::test]
async fn test_empty_desc_is_omitted_even_in_debug_mode() {
    let app = service_with!(Translator::new(DebugMode::new(true)));

    let req = test::TestRequest::get().uri("/missing").to_request();
    let resp = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("desc").is_none());
}

#[actix_web::test]
async fn test_unclassified_error_uses_sentinel_code() {
    let app = default_service!();

    let req = test::TestRequest::get().uri("/boom").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Envelope<Value> = test::read_body_json(resp).await;
    assert!(!body.succeeded);
    assert_eq!(body.code, Some(codes::UNCLASSIFIED));
    assert_eq!(body.info.as_deref(), Some("Internal error"));
    assert_eq!(body.desc, None);
}

#[actix_web::test]
async fn test_unclassified_error_exposes_message_in_debug_mode() {
    let app = service_with!(Translator::new(DebugMode::new(true)));

    let req = test::TestRequest::get().uri("/boom").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Envelope<Value> = test::read_body_json(resp).await;
    assert_eq!(body.desc.as_deref(), Some("boom"));
}

#[actix_web::test]
async fn test_explicit_status_is_honored() {
    let app = default_service!();

    let req = test::TestRequest::get().uri("/teapot").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 418);

    let body: Envelope<Value> = test::read_body_json(resp).await;
    assert_eq!(body.code, Some(codes::ERR_INVALID_ARGUMENT));
}

#[actix_web::test]
async fn test_out_of_range_status_is_clamped_not_rejected() {
    let app = default_service!();

    let req = test::TestRequest::get().uri("/overflow").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    // The business fields still reflect the exception itself.
    let body: Envelope<Value> = test::read_body_json(resp).await;
    assert_eq!(body.code, Some(codes::ERR_INVALID_ARGUMENT));
    assert_eq!(body.info.as_deref(), Some("Invalid argument"));
}

#[actix_web::test]
async fn test_debug_toggle_applies_on_next_call() {
    let debug = DebugMode::new(true);
    let app = service_with!(Translator::new(debug.clone()));

    let req = test::TestRequest::get().uri("/boom").to_request();
    let body: Envelope<Value> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body.desc.as_deref(), Some("boom"));

    debug.set(false);

    let req = test::TestRequest::get().uri("/boom").to_request();
    let body: Envelope<Value> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body.desc, None);
}

#[actix_web::test]
async fn test_validation_sequence_feeds_the_translator() {
    let app = default_service!();

    let req = test::TestRequest::get()
        .uri("/widgets?name=&count=5")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Envelope<Value> = test::read_body_json(resp).await;
    assert_eq!(body.code, Some(codes::ERR_INVALID_ARGUMENT));

    let req = test::TestRequest::get()
        .uri("/widgets?name=gear&count=500")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Envelope<Value> = test::read_body_json(resp).await;
    assert_eq!(body.code, Some(codes::ERR_OUT_OF_RANGE));

    let req = test::TestRequest::get()
        .uri("/widgets?name=gear&count=5")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Envelope<Value> = test::read_body_json(resp).await;
    assert!(body.succeeded);
    assert_eq!(body.data, Some(Value::from("created")));
}
