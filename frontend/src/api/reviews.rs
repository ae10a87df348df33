use super::{
    client::ApiClient,
    types::{ApiError, CreateReview, Review},
};

impl ApiClient {
    pub async fn list_reviews(&self, house_id: i64) -> Result<Vec<Review>, ApiError> {
        self.get_json(&format!("/Reviews/house/{}", house_id)).await
    }

    pub async fn create_review(&self, request: &CreateReview) -> Result<Review, ApiError> {
        if !(1..=5).contains(&request.rating) {
            return Err(ApiError::validation("Rating must be between 1 and 5."));
        }
        self.post_json("/Reviews", request).await
    }

    pub async fn delete_review(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/Reviews/{}", id)).await
    }
}
