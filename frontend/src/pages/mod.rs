pub mod admin;
pub mod confirm_email;
pub mod faq;
pub mod forgot_password;
pub mod home;
pub mod houses;
pub mod login;
pub mod my_bookings;
pub mod register;
pub mod reset_password;
pub mod tours;

pub use confirm_email::ConfirmEmailPage;
pub use faq::FaqPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use houses::{HouseDetailPage, HousesPage};
pub use login::LoginPage;
pub use my_bookings::MyBookingsPage;
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;
pub use tours::{TourDetailPage, ToursPage};
