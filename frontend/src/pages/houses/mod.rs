use leptos::*;

pub mod components;
mod detail;
mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use detail::{parse_id, HouseDetailPage};
pub use panel::HousesPanel;

#[component]
pub fn HousesPage() -> impl IntoView {
    view! { <HousesPanel /> }
}
