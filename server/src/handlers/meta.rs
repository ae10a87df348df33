use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

/// Shape read by the frontend's runtime config loader.
#[derive(Debug, Serialize)]
pub struct RuntimeConfigResponse {
    pub api_base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_base_url: Option<String>,
    pub site_name: String,
    pub currency_symbol: String,
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn runtime_config(State(state): State<AppState>) -> Json<RuntimeConfigResponse> {
    let config = &state.config;
    Json(RuntimeConfigResponse {
        api_base_url: config.api_base_url.clone(),
        files_base_url: config.files_base_url.clone(),
        site_name: config.site_name.clone(),
        currency_symbol: config.currency_symbol.clone(),
    })
}
