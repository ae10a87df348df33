use axum::{middleware as axum_middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{handlers, middleware, state::AppState};

/// Known endpoints first; anything else is a file from the static bundle,
/// with unknown paths answered by `index.html` so client routes resolve.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let spa = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/healthz", get(handlers::meta::healthz))
        .route("/config.json", get(handlers::meta::runtime_config))
        .route("/robots.txt", get(handlers::seo::robots_txt))
        .route("/sitemap.xml", get(handlers::seo::sitemap_xml))
        .fallback_service(spa)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(middleware::request_id::request_id))
                .layer(axum_middleware::from_fn(middleware::logging::log_error_responses))
                .layer(axum_middleware::from_fn(middleware::admin_gate::admin_gate)),
        )
        .with_state(state)
}
