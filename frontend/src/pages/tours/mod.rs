use leptos::*;

mod detail;
mod panel;
pub mod repository;
pub mod utils;

pub use detail::TourDetailPage;
pub use panel::TourList;

#[component]
pub fn ToursPage() -> impl IntoView {
    view! { <panel::ToursPanel /> }
}
