use anyhow::{anyhow, Context};
use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";
pub const DEFAULT_SITE_NAME: &str = "Booking";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Public origin used for absolute sitemap and robots URLs.
    pub site_url: String,
    pub api_base_url: String,
    pub files_base_url: Option<String>,
    pub static_dir: PathBuf,
    pub site_name: String,
    pub currency_symbol: String,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid BIND_ADDR value: {}", bind_raw))?;

        let site_url = absolute_url("SITE_URL", get("SITE_URL"), DEFAULT_SITE_URL)?;
        let api_base_url = absolute_url("API_BASE_URL", get("API_BASE_URL"), DEFAULT_API_BASE_URL)?;
        let files_base_url = get("FILES_BASE_URL")
            .map(|raw| absolute_url("FILES_BASE_URL", Some(raw), ""))
            .transpose()?;

        let upstream_timeout_secs = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| anyhow!("Invalid UPSTREAM_TIMEOUT_SECS value: {}", raw))?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Config {
            bind_addr,
            site_url,
            api_base_url,
            files_base_url,
            static_dir: PathBuf::from(get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())),
            site_name: get("SITE_NAME").unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
            currency_symbol: get("CURRENCY_SYMBOL").unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
        })
    }
}

fn absolute_url(key: &str, value: Option<String>, default: &str) -> anyhow::Result<String> {
    let raw = value.unwrap_or_else(|| default.to_string());
    let parsed = url::Url::parse(&raw).with_context(|| format!("Invalid {} value: {}", key, raw))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(anyhow!("{} must be an http(s) URL: {}", key, raw));
    }
    Ok(raw.trim_end_matches('/').to_string())
}
