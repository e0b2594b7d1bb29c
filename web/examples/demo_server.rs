//! Minimal service wired through the kit.
//!
//! Run with `cargo run --example demo_server`, then try:
//! - GET /ping
//! - GET /orders?limit=20
//! - GET /orders/42  (and /orders/0, /orders/5000 for the failure paths)
//!
//! Set `ENVIRONMENT=production` to see the developer descriptions disappear
//! from failure envelopes.

use actix_web::{web, App, HttpServer};
use serde::{Deserialize, Serialize};

use ak_core::{Chain, Exception};
use ak_shared::types::Page;
use ak_web::handlers::ping;
use ak_web::{Reply, Translator};

#[derive(Debug, Serialize)]
struct Order {
    id: u64,
    item: String,
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    #[serde(default)]
    offset: i64,
    #[serde(default = "default_limit")]
    limit: i64,
}

fn default_limit() -> i64 {
    20
}

async fn get_order(path: web::Path<u64>) -> Reply<Order> {
    let id = path.into_inner();
    if id == 0 {
        return Reply::err(Exception::invalid_argument().with_desc("order id must be positive"));
    }
    if id > 1000 {
        return Reply::err(Exception::not_found());
    }
    Reply::ok(Order {
        id,
        item: format!("item-{}", id),
    })
}

async fn list_orders(query: web::Query<ListQuery>) -> Reply<Page<Order>> {
    let q = query.into_inner();

    let checked = Chain::new()
        .then(|| {
            if q.limit <= 0 {
                return Err(Exception::invalid_argument().with_desc("limit must be positive"));
            }
            Ok(())
        })
        .then(|| {
            if q.limit > 100 {
                return Err(Exception::out_of_range());
            }
            Ok(())
        })
        .into_result();
    if let Err(ex) = checked {
        return Reply::err(ex);
    }

    let list: Vec<Order> = (1..=3)
        .map(|id| Order {
            id,
            item: format!("item-{}", id),
        })
        .collect();
    Reply::ok(Page {
        offset: q.offset,
        limit: q.limit,
        total: list.len() as i64,
        list,
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    ak_web::logging::init_development();

    let translator = Translator::from_env();
    tracing::info!("listening on 127.0.0.1:8080");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(translator.clone()))
            .route("/ping", web::get().to(ping))
            .route("/orders", web::get().to(list_orders))
            .route("/orders/{id}", web::get().to(get_order))
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
