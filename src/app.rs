use crate::config::Config;
use crate::handlers::{self, AppState, MAX_IMAGE_SIZE};
use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router with CORS and request tracing applied
pub fn build_router(state: AppState, config: &Config) -> anyhow::Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin()?)
        .allow_methods([Method::GET, Method::PUT, Method::POST, Method::DELETE]);

    let app = Router::new()
        .route("/", get(handlers::root))
        .route("/items", post(handlers::add_item).get(handlers::get_items))
        .route("/items/:id", get(handlers::get_item))
        .route("/search", get(handlers::search_items))
        .route("/image/:imageFilename", get(handlers::get_image))
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
