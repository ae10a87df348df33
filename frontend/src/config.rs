use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_SITE_NAME: &str = "Booking";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub files_base_url: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub currency_symbol: Option<String>,
}

/// Fully resolved settings; every field has a value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub files_base_url: String,
    pub site_name: String,
    pub currency_symbol: String,
}

impl RuntimeConfig {
    pub fn resolve(self) -> ResolvedConfig {
        let api_base_url = non_empty(self.api_base_url)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let files_base_url = non_empty(self.files_base_url)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| api_base_url.clone());
        ResolvedConfig {
            api_base_url,
            files_base_url,
            site_name: non_empty(self.site_name).unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
            currency_symbol: non_empty(self.currency_symbol)
                .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

fn cache(config: RuntimeConfig) -> ResolvedConfig {
    let resolved = config.resolve();
    let _ = RESOLVED.set(resolved.clone());
    RESOLVED.get().cloned().unwrap_or(resolved)
}

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;

    fn read_string(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    fn read_object(name: &str) -> Option<RuntimeConfig> {
        // window.__BOOKING_ENV = { API_BASE_URL: "..." } (env.js) or
        // window.__BOOKING_CONFIG = { api_base_url: "..." }
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        let config = RuntimeConfig {
            api_base_url: read_string(&obj, &["API_BASE_URL", "api_base_url"]),
            files_base_url: read_string(&obj, &["FILES_BASE_URL", "files_base_url"]),
            site_name: read_string(&obj, &["SITE_NAME", "site_name"]),
            currency_symbol: read_string(&obj, &["CURRENCY_SYMBOL", "currency_symbol"]),
        };
        config.api_base_url.as_ref()?;
        Some(config)
    }

    pub fn snapshot() -> Option<RuntimeConfig> {
        read_object("__BOOKING_ENV").or_else(|| read_object("__BOOKING_CONFIG"))
    }

    pub async fn fetch() -> Option<RuntimeConfig> {
        let origin = crate::utils::navigation::origin()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            log::warn!("config.json returned {}", resp.status());
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod globals {
    use super::RuntimeConfig;

    pub fn snapshot() -> Option<RuntimeConfig> {
        None
    }

    pub async fn fetch() -> Option<RuntimeConfig> {
        None
    }
}

pub async fn await_runtime_config() -> ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    if let Some(existing) = globals::snapshot() {
        return cache(existing);
    }
    if let Some(fetched) = globals::fetch().await {
        return cache(fetched);
    }
    log::info!("runtime config not found, using defaults");
    cache(RuntimeConfig::default())
}

pub async fn api_base_url() -> String {
    await_runtime_config().await.api_base_url
}

/// Synchronous view for rendering; defaults until `init` has completed.
pub fn current() -> ResolvedConfig {
    RESOLVED
        .get()
        .cloned()
        .unwrap_or_else(|| RuntimeConfig::default().resolve())
}

pub async fn init() {
    let resolved = await_runtime_config().await;
    log::info!("runtime config ready (api: {})", resolved.api_base_url);
}
