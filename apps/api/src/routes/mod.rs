pub mod health;
pub mod home;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_handler))
        .route("/health", get(health::health_handler))
        .merge(recommendation_routes())
        .with_state(state)
}

/// Recommendation routes. Every response from them, errors and preflight
/// included, carries the three CORS headers.
fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/rekomendasi-mobil",
            post(handlers::handle_recommend).options(handlers::handle_preflight),
        )
        .route(
            "/rekomendasi-mobil/narasi",
            post(handlers::handle_narrate).options(handlers::handle_preflight),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}
