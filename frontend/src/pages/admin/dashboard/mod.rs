mod panel;
pub mod utils;

pub use panel::{AdminDashboardPage, DashboardView};
