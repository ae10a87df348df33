use crate::api::{ApiClient, ApiError, Tour};
use std::rc::Rc;

#[derive(Clone)]
pub struct ToursRepository {
    client: Rc<ApiClient>,
}

impl ToursRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        let api = leptos::use_context::<ApiClient>().unwrap_or_default();
        Self::new_with_client(Rc::new(api))
    }

    pub async fn fetch_tours(&self) -> Result<Vec<Tour>, ApiError> {
        self.client.list_tours().await
    }

    pub async fn fetch_tour(&self, id: i64) -> Result<Tour, ApiError> {
        self.client.get_tour(id).await
    }
}
