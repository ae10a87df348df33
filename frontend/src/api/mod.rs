mod auth;
mod bookings;
mod catalog;
pub mod client;
mod common;
pub mod files;
mod houses;
mod reviews;
mod tours;
pub mod types;
mod users;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
