use super::{
    client::ApiClient,
    types::{ApiError, Booking, BookingStatus, CreateBooking, UpdateBookingStatus},
};

impl ApiClient {
    pub async fn create_booking(&self, request: &CreateBooking) -> Result<Booking, ApiError> {
        self.post_json("/Bookings", request).await
    }

    pub async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_json("/Bookings").await
    }

    pub async fn my_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_json("/Bookings/my").await
    }

    pub async fn update_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> Result<(), ApiError> {
        self.put_empty(
            &format!("/Bookings/{}/status", id),
            &UpdateBookingStatus { status },
        )
        .await
    }

    pub async fn delete_booking(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/Bookings/{}", id)).await
    }
}
