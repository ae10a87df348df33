use super::{
    client::ApiClient,
    types::{ApiError, Tour, TourPayload},
};

impl ApiClient {
    pub async fn list_tours(&self) -> Result<Vec<Tour>, ApiError> {
        self.get_json("/Tours").await
    }

    pub async fn get_tour(&self, id: i64) -> Result<Tour, ApiError> {
        self.get_json(&format!("/Tours/{}", id)).await
    }

    pub async fn create_tour(&self, payload: &TourPayload) -> Result<Tour, ApiError> {
        self.post_json("/Tours", payload).await
    }

    pub async fn update_tour(&self, id: i64, payload: &TourPayload) -> Result<(), ApiError> {
        self.put_empty(&format!("/Tours/{}", id), payload).await
    }

    pub async fn delete_tour(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/Tours/{}", id)).await
    }
}
