use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::{livez, status},
        items::{create_item, delete_item, list_items, update_item},
        wishlists::{
            create_wishlist, delete_wishlist, get_wishlist, list_wishlists, update_wishlist,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    // Any origin may call the API; credentials travel in the Authorization header
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/", get(status))
        .route("/livez", get(livez))
        .route("/wishlists", get(list_wishlists).post(create_wishlist))
        .route(
            "/wishlists/{id}",
            get(get_wishlist)
                .put(update_wishlist)
                .delete(delete_wishlist),
        )
        .route("/wishlists/{id}/items", get(list_items).post(create_item))
        .route(
            "/wishlists/{id}/items/{item_id}",
            put(update_item).delete(delete_item),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
