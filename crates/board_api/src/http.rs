//! Module used to serve the routes of the board API. Each submodule is specific for a route
//! segment.

use actix_web::{Responder, Scope, web, web::JsonConfig};
use serde::Serialize;

use self::member::member_scope;
use self::post::post_scope;
use crate::ApiResponse;
use crate::utils::json;

pub mod member;
pub mod post;

pub fn api_route() -> Scope {
    let json_config = JsonConfig::default().limit(1024 * 16);

    web::scope("")
        .app_data(json_config)
        .route("/info", web::get().to(info))
        .service(member_scope())
        .service(post_scope())
}

#[derive(Serialize)]
struct InfoResponse {
    service_name: &'static str,
    api_version: &'static str,
}

async fn info() -> ApiResponse<impl Responder> {
    json(InfoResponse {
        service_name: "Community Board API",
        api_version: env!("CARGO_PKG_VERSION"),
    })
}
