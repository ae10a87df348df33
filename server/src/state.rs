use std::sync::Arc;

use crate::{catalog::CatalogSource, config::Config};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<dyn CatalogSource>,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
        }
    }
}
