use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Vehicle handlers
        .route("/api/vehicles", get(handlers::a001_vehicle::list_all))
        .route(
            "/api/vehicles/normalize",
            post(handlers::a001_vehicle::normalize),
        )
        .route("/api/vehicles/:id", get(handlers::a001_vehicle::get_by_id))
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors)
}
