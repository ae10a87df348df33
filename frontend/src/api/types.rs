use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---- auth ----

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

// ---- catalog ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advantage {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvantagePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

// ---- houses ----

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    #[serde(alias = "Cancelled")]
    Canceled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 3] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Canceled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Canceled => "Canceled",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "bg-status-warning-bg text-status-warning-text",
            BookingStatus::Confirmed => "bg-status-success-bg text-status-success-text",
            BookingStatus::Canceled => "bg-status-error-bg text-status-error-text",
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Canceled)
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "canceled" | "cancelled" => Some(BookingStatus::Canceled),
            _ => None,
        }
    }
}

/// Accepts both `2025-07-01` and `2025-07-01T00:00:00` forms.
fn lenient_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let date_part = raw.get(..10).unwrap_or(&raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedPeriod {
    #[serde(deserialize_with = "lenient_date")]
    pub check_in: NaiveDate,
    #[serde(deserialize_with = "lenient_date")]
    pub check_out: NaiveDate,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub price_per_night: f64,
    #[serde(default)]
    pub room_count: u32,
    #[serde(default)]
    pub max_guests: u32,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub advantages: Vec<Advantage>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub bookings: Vec<BookedPeriod>,
}

impl House {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HousePayload {
    pub name: String,
    pub description: String,
    pub location: String,
    pub price_per_night: f64,
    pub room_count: u32,
    pub max_guests: u32,
    pub category_id: Option<i64>,
    pub advantage_ids: Vec<i64>,
    pub images: Vec<String>,
}

// ---- tours ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPackage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub duration_days: u32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub packages: Vec<TourPackage>,
}

impl Tour {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Cheapest package price, shown as "from" on listings.
    pub fn starting_price(&self) -> Option<f64> {
        self.packages
            .iter()
            .map(|package| package.price)
            .filter(|price| price.is_finite())
            .min_by(|a, b| a.total_cmp(b))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPayload {
    pub title: String,
    pub description: String,
    pub destination: String,
    pub duration_days: u32,
    pub start_date: Option<NaiveDate>,
    pub images: Vec<String>,
    pub packages: Vec<TourPackage>,
}

// ---- bookings ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub house_id: i64,
    #[serde(default)]
    pub house_name: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient_date")]
    pub check_in: NaiveDate,
    #[serde(deserialize_with = "lenient_date")]
    pub check_out: NaiveDate,
    #[serde(default)]
    pub guests: u32,
    #[serde(default)]
    pub total_price: f64,
    pub status: BookingStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub house_id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingStatus {
    pub status: BookingStatus,
}

// ---- users ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub email_confirmed: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_role() -> String {
    "User".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRole {
    pub role: String,
}

// ---- reviews ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub house_id: i64,
    #[serde(default)]
    pub author_name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    pub house_id: i64,
    pub rating: u8,
    pub comment: String,
}

// ---- common ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPayload {
    pub question: String,
    pub answer: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(alias = "name", alias = "url")]
    pub file_name: String,
}

// ---- errors ----

use leptos::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized() -> Self {
        Self::from_status(401)
    }

    pub fn timeout() -> Self {
        Self::with_code("The server took too long to respond.", "TIMEOUT")
    }

    pub fn from_status(status: u16) -> Self {
        let (msg, code) = match status {
            400 => ("The request was rejected.", "BAD_REQUEST"),
            401 => ("Your session has expired. Please sign in again.", "UNAUTHORIZED"),
            403 => ("You are not allowed to do that.", "FORBIDDEN"),
            404 => ("The requested item was not found.", "NOT_FOUND"),
            409 => ("The request conflicts with existing data.", "CONFLICT"),
            500..=599 => ("The server failed to handle the request.", "SERVER_ERROR"),
            _ => ("Unexpected response from the server.", "UNKNOWN"),
        };
        Self::with_code(msg, code)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    /// Builds an error from a non-success response body. The API is not
    /// consistent about error shapes, so JSON `message`/`error`/`title`
    /// fields, ASP.NET validation `errors` maps and plain text are all
    /// accepted before falling back to a status-derived message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let mut error = Self::from_status(status);
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return error;
        }

        let Ok(value) = serde_json::from_str::<Value>(trimmed) else {
            if trimmed.len() <= 300 && !trimmed.starts_with('<') {
                error.error = trimmed.trim_matches('"').to_string();
            }
            return error;
        };

        if let Some(text) = value.as_str() {
            error.error = text.to_string();
            return error;
        }

        if let Some(text) = ["message", "error", "title", "detail"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str))
        {
            error.error = text.to_string();
        }
        if let Some(code) = value.get("code").and_then(Value::as_str) {
            error.code = code.to_string();
        }

        let messages = collect_validation_messages(&value);
        if !messages.is_empty() {
            error.code = "VALIDATION_ERROR".to_string();
            error.details = Some(serde_json::json!({ "errors": messages }));
        } else if let Some(details) = value.get("details").cloned() {
            error.details = Some(details);
        }
        error
    }
}

fn collect_validation_messages(value: &Value) -> Vec<String> {
    match value.get("errors") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .or_else(|| item.get("description").and_then(Value::as_str).map(str::to_string))
            })
            .collect(),
        Some(Value::Object(fields)) => fields
            .values()
            .flat_map(|messages| match messages {
                Value::Array(list) => list
                    .iter()
                    .filter_map(|m| m.as_str().map(str::to_string))
                    .collect::<Vec<_>>(),
                Value::String(single) => vec![single.clone()],
                _ => Vec::new(),
            })
            .collect(),
        _ => Vec::new(),
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use leptos::IntoView;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        assert_eq!(ApiError::validation("invalid").code, "VALIDATION_ERROR");
        assert_eq!(ApiError::unknown("x").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("x").code, "REQUEST_FAILED");
        assert!(ApiError::unauthorized().is_unauthorized());
        assert_eq!(ApiError::timeout().code, "TIMEOUT");
        assert_eq!(ApiError::from_status(404).code, "NOT_FOUND");
        assert_eq!(ApiError::from_status(503).code, "SERVER_ERROR");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");
        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn api_error_can_be_converted_to_view() {
        let _: View = ApiError::request_failed("request failed").into_view();
    }

    #[test]
    fn from_response_reads_message_field() {
        let error = ApiError::from_response(400, r#"{"message":"House is already booked"}"#);
        assert_eq!(error.error, "House is already booked");
        assert_eq!(error.code, "BAD_REQUEST");
    }

    #[test]
    fn from_response_flattens_problem_details_errors() {
        let body = json!({
            "title": "One or more validation errors occurred.",
            "status": 400,
            "errors": {
                "Email": ["The Email field is required."],
                "Password": ["Too short", "Needs a digit"]
            }
        })
        .to_string();
        let error = ApiError::from_response(400, &body);
        assert_eq!(error.error, "One or more validation errors occurred.");
        assert_eq!(error.code, "VALIDATION_ERROR");
        let errors = error.details.unwrap()["errors"].as_array().unwrap().len();
        assert_eq!(errors, 3);
    }

    #[test]
    fn from_response_accepts_identity_error_lists() {
        let body = json!({
            "errors": [{ "code": "DuplicateEmail", "description": "Email is taken" }]
        })
        .to_string();
        let error = ApiError::from_response(400, &body);
        assert_eq!(error.details.unwrap()["errors"][0], json!("Email is taken"));
    }

    #[test]
    fn from_response_uses_plain_text_or_status() {
        assert_eq!(
            ApiError::from_response(409, "Dates are not available").error,
            "Dates are not available"
        );
        assert_eq!(
            ApiError::from_response(500, "<html>oops</html>").error,
            "The server failed to handle the request."
        );
        assert_eq!(
            ApiError::from_response(404, "").error,
            "The requested item was not found."
        );
    }

    #[test]
    fn booking_status_accepts_both_spellings() {
        let status: BookingStatus = serde_json::from_value(json!("Cancelled")).unwrap();
        assert_eq!(status, BookingStatus::Canceled);
        assert_eq!(serde_json::to_value(BookingStatus::Canceled).unwrap(), json!("Canceled"));
        assert_eq!(BookingStatus::parse(" confirmed "), Some(BookingStatus::Confirmed));
        assert_eq!(BookingStatus::parse("unknown"), None);
        assert!(!BookingStatus::Canceled.is_active());
    }

    #[test]
    fn house_deserializes_with_optional_fields_missing() {
        let house: House = serde_json::from_value(json!({
            "id": 1,
            "name": "Lake Cabin",
            "pricePerNight": 120.0
        }))
        .unwrap();
        assert_eq!(house.room_count, 0);
        assert!(house.bookings.is_empty());
        assert!(house.cover_image().is_none());
    }

    #[test]
    fn booking_dates_accept_datetime_strings() {
        let booking: Booking = serde_json::from_value(json!({
            "id": 9,
            "houseId": 1,
            "checkIn": "2025-07-01T00:00:00",
            "checkOut": "2025-07-04",
            "status": "Pending"
        }))
        .unwrap();
        assert_eq!(booking.check_in, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(booking.check_out, NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
    }

    #[test]
    fn tour_starting_price_is_cheapest_package() {
        let tour: Tour = serde_json::from_value(json!({
            "id": 1,
            "title": "Caucasus Trek",
            "packages": [
                { "name": "Comfort", "price": 450.0 },
                { "name": "Standard", "price": 300.0 }
            ]
        }))
        .unwrap();
        assert_eq!(tour.starting_price(), Some(300.0));

        let empty: Tour = serde_json::from_value(json!({ "id": 2, "title": "Soon" })).unwrap();
        assert_eq!(empty.starting_price(), None);
    }

    #[test]
    fn login_response_accepts_access_token_alias() {
        let response: LoginResponse =
            serde_json::from_value(json!({ "accessToken": "a.b.c" })).unwrap();
        assert_eq!(response.token, "a.b.c");
    }
}
