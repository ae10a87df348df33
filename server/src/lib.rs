//! Site server for the booking frontend: serves the static bundle with an
//! SPA fallback, publishes runtime config, robots and sitemap, and keeps
//! non-admins out of `/admin`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod session;
pub mod sitemap;
pub mod state;

pub use router::build_router;
