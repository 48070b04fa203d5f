use crate::errors::ApiError;
use crate::handlers;
use actix_cors::Cors;
use actix_web::web::{self, ServiceConfig};

pub fn config(cfg: &mut ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(handlers::health::root))
        .service(
            web::scope("/api/orders")
                .route("", web::get().to(handlers::orders::list_orders))
                .route("", web::post().to(handlers::orders::create_order))
                .route("/seed", web::post().to(handlers::orders::seed_orders))
                .route("/{id}", web::get().to(handlers::orders::get_order))
                .route(
                    "/{id}/status",
                    web::put().to(handlers::orders::update_status),
                ),
        );
}

/// Body parse failures answer like any other server-side failure. Logged at
/// warn because an optional body (status update) also lands here.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        tracing::warn!(path = %req.path(), error = %err, "unreadable JSON body");
        ApiError::Internal.into()
    })
}

/// Any origin may call the API.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .send_wildcard()
}
