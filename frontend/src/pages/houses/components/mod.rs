pub mod booking_form;
pub mod filter;
pub mod gallery;
pub mod reviews;
