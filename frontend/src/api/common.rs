use super::{
    client::ApiClient,
    types::{ApiError, Faq, FaqPayload, Setting},
};

impl ApiClient {
    pub async fn list_faqs(&self) -> Result<Vec<Faq>, ApiError> {
        let mut faqs: Vec<Faq> = self.get_json("/Common/faqs").await?;
        faqs.sort_by_key(|faq| (faq.sort_order, faq.id));
        Ok(faqs)
    }

    pub async fn create_faq(&self, payload: &FaqPayload) -> Result<Faq, ApiError> {
        self.post_json("/Common/faqs", payload).await
    }

    pub async fn update_faq(&self, id: i64, payload: &FaqPayload) -> Result<(), ApiError> {
        self.put_empty(&format!("/Common/faqs/{}", id), payload).await
    }

    pub async fn delete_faq(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/Common/faqs/{}", id)).await
    }

    pub async fn get_settings(&self) -> Result<Vec<Setting>, ApiError> {
        self.get_json("/Common/settings").await
    }

    pub async fn update_settings(&self, settings: &[Setting]) -> Result<(), ApiError> {
        self.put_empty("/Common/settings", settings).await
    }
}
