use super::{
    client::ApiClient,
    types::{Advantage, AdvantagePayload, ApiError, Category, CategoryPayload},
};

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/Categories").await
    }

    pub async fn create_category(&self, payload: &CategoryPayload) -> Result<Category, ApiError> {
        self.post_json("/Categories", payload).await
    }

    pub async fn update_category(
        &self,
        id: i64,
        payload: &CategoryPayload,
    ) -> Result<(), ApiError> {
        self.put_empty(&format!("/Categories/{}", id), payload).await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/Categories/{}", id)).await
    }

    pub async fn list_advantages(&self) -> Result<Vec<Advantage>, ApiError> {
        self.get_json("/HouseAdvantages").await
    }

    pub async fn create_advantage(
        &self,
        payload: &AdvantagePayload,
    ) -> Result<Advantage, ApiError> {
        self.post_json("/HouseAdvantages", payload).await
    }

    pub async fn update_advantage(
        &self,
        id: i64,
        payload: &AdvantagePayload,
    ) -> Result<(), ApiError> {
        self.put_empty(&format!("/HouseAdvantages/{}", id), payload)
            .await
    }

    pub async fn delete_advantage(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/HouseAdvantages/{}", id)).await
    }
}
