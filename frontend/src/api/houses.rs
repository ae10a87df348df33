use super::{
    client::ApiClient,
    types::{ApiError, House, HousePayload},
};

impl ApiClient {
    pub async fn list_houses(&self) -> Result<Vec<House>, ApiError> {
        self.get_json("/Houses").await
    }

    pub async fn get_house(&self, id: i64) -> Result<House, ApiError> {
        self.get_json(&format!("/Houses/{}", id)).await
    }

    pub async fn create_house(&self, payload: &HousePayload) -> Result<House, ApiError> {
        self.post_json("/Houses", payload).await
    }

    pub async fn update_house(&self, id: i64, payload: &HousePayload) -> Result<(), ApiError> {
        self.put_empty(&format!("/Houses/{}", id), payload).await
    }

    pub async fn delete_house(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/Houses/{}", id)).await
    }
}
