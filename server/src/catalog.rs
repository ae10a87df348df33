//! Listing ids from the upstream REST API, used to build the sitemap.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::AppError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn house_ids(&self) -> Result<Vec<i64>, AppError>;
    async fn tour_ids(&self) -> Result<Vec<i64>, AppError>;
}

/// Only the id is needed; everything else in the listing is ignored.
#[derive(Debug, Deserialize)]
struct ListingId {
    id: i64,
}

#[derive(Clone)]
pub struct ApiCatalog {
    client: Client,
    base_url: String,
}

impl ApiCatalog {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base: String = base_url.into();
        Ok(Self {
            client,
            base_url: base.trim_end_matches('/').to_string(),
        })
    }

    async fn ids(&self, resource: &str) -> Result<Vec<i64>, AppError> {
        let url = format!("{}/{}", self.base_url, resource);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!("GET {} returned {}", url, status)));
        }
        let listings: Vec<ListingId> = response.json().await?;
        let mut ids: Vec<i64> = listings.into_iter().map(|listing| listing.id).collect();
        ids.sort_unstable();
        ids.dedup();
        tracing::debug!(resource, count = ids.len(), "Fetched catalog ids");
        Ok(ids)
    }
}

#[async_trait]
impl CatalogSource for ApiCatalog {
    async fn house_ids(&self) -> Result<Vec<i64>, AppError> {
        self.ids("Houses").await
    }

    async fn tour_ids(&self) -> Result<Vec<i64>, AppError> {
        self.ids("Tours").await
    }
}
