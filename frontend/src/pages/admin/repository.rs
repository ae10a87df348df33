use crate::api::{
    Advantage, AdvantagePayload, ApiClient, ApiError, Booking, BookingStatus, Category,
    CategoryPayload, Faq, FaqPayload, House, HousePayload, Setting, Tour, TourPayload,
    UploadResponse, User,
};
use std::rc::Rc;

/// Back-office calls, grouped so screens share one client.
#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
}

impl AdminRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        let api = leptos::use_context::<ApiClient>().unwrap_or_default();
        Self::new_with_client(Rc::new(api))
    }

    // houses
    pub async fn houses(&self) -> Result<Vec<House>, ApiError> {
        self.client.list_houses().await
    }

    pub async fn save_house(&self, id: Option<i64>, payload: HousePayload) -> Result<(), ApiError> {
        match id {
            Some(id) => self.client.update_house(id, &payload).await,
            None => self.client.create_house(&payload).await.map(|_| ()),
        }
    }

    pub async fn delete_house(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_house(id).await
    }

    pub async fn upload_image(
        &self,
        file_name: String,
        mime: String,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, ApiError> {
        self.client.upload_image(&file_name, &mime, bytes).await
    }

    // tours
    pub async fn tours(&self) -> Result<Vec<Tour>, ApiError> {
        self.client.list_tours().await
    }

    pub async fn save_tour(&self, id: Option<i64>, payload: TourPayload) -> Result<(), ApiError> {
        match id {
            Some(id) => self.client.update_tour(id, &payload).await,
            None => self.client.create_tour(&payload).await.map(|_| ()),
        }
    }

    pub async fn delete_tour(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_tour(id).await
    }

    // bookings
    pub async fn bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.client.list_bookings().await
    }

    pub async fn set_booking_status(&self, id: i64, status: BookingStatus) -> Result<(), ApiError> {
        self.client.update_booking_status(id, status).await
    }

    pub async fn delete_booking(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_booking(id).await
    }

    // categories and advantages
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.client.list_categories().await
    }

    pub async fn save_category(&self, id: Option<i64>, payload: CategoryPayload) -> Result<(), ApiError> {
        match id {
            Some(id) => self.client.update_category(id, &payload).await,
            None => self.client.create_category(&payload).await.map(|_| ()),
        }
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_category(id).await
    }

    pub async fn advantages(&self) -> Result<Vec<Advantage>, ApiError> {
        self.client.list_advantages().await
    }

    pub async fn save_advantage(
        &self,
        id: Option<i64>,
        payload: AdvantagePayload,
    ) -> Result<(), ApiError> {
        match id {
            Some(id) => self.client.update_advantage(id, &payload).await,
            None => self.client.create_advantage(&payload).await.map(|_| ()),
        }
    }

    pub async fn delete_advantage(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_advantage(id).await
    }

    // faqs
    pub async fn faqs(&self) -> Result<Vec<Faq>, ApiError> {
        self.client.list_faqs().await
    }

    pub async fn save_faq(&self, id: Option<i64>, payload: FaqPayload) -> Result<(), ApiError> {
        match id {
            Some(id) => self.client.update_faq(id, &payload).await,
            None => self.client.create_faq(&payload).await.map(|_| ()),
        }
    }

    pub async fn delete_faq(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_faq(id).await
    }

    // users
    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.client.list_users().await
    }

    pub async fn set_user_role(&self, id: String, role: String) -> Result<(), ApiError> {
        self.client.update_user_role(&id, &role).await
    }

    pub async fn delete_user(&self, id: String) -> Result<(), ApiError> {
        self.client.delete_user(&id).await
    }

    // settings
    pub async fn settings(&self) -> Result<Vec<Setting>, ApiError> {
        self.client.get_settings().await
    }

    pub async fn save_settings(&self, settings: Vec<Setting>) -> Result<(), ApiError> {
        self.client.update_settings(&settings).await
    }
}
