use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::IntoResponse,
};

use crate::{sitemap, state::AppState};

pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        sitemap::render_robots(&state.config.site_url),
    )
}

pub async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let paths = sitemap::collect_paths(state.catalog.as_ref()).await;
    tracing::debug!(count = paths.len(), "Rendering sitemap");
    (
        [(CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap::render_sitemap(&state.config.site_url, &paths),
    )
}
