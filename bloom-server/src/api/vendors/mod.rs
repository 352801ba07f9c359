//! Vendor Catalog API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/vendors", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/by-slug", get(handler::by_slug))
        .route("/{id}/colors", get(handler::colors))
        .route("/{id}/flowers", get(handler::flowers))
        .route("/{id}/arrangements", get(handler::arrangements))
        .route("/{id}/arrangement-types", get(handler::arrangement_types))
        .route("/{id}/flower-categories", get(handler::flower_categories))
        .route("/{id}/event-types", get(handler::event_types))
}
