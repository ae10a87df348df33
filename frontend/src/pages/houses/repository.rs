use crate::api::{
    ApiClient, ApiError, Booking, Category, CreateBooking, CreateReview, House, Review,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct HousesRepository {
    client: Rc<ApiClient>,
}

impl Default for HousesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl HousesRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_houses(&self) -> Result<Vec<House>, ApiError> {
        self.client.list_houses().await
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.client.list_categories().await
    }

    pub async fn fetch_house(&self, id: i64) -> Result<House, ApiError> {
        self.client.get_house(id).await
    }

    pub async fn book(&self, request: CreateBooking) -> Result<Booking, ApiError> {
        self.client.create_booking(&request).await
    }

    pub async fn fetch_reviews(&self, house_id: i64) -> Result<Vec<Review>, ApiError> {
        self.client.list_reviews(house_id).await
    }

    pub async fn add_review(&self, request: CreateReview) -> Result<Review, ApiError> {
        self.client.create_review(&request).await
    }

    pub async fn remove_review(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_review(id).await
    }
}
