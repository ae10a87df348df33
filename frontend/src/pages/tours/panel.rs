use super::{repository::ToursRepository, utils::search_tours};
use crate::{
    api::Tour,
    components::{
        cards::TourCard,
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    state::toast::use_toasts,
};
use leptos::*;

#[component]
pub fn ToursPanel() -> impl IntoView {
    let repository = ToursRepository::from_context();
    let toasts = use_toasts();
    let tours_resource = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_tours().await }
        },
    );
    create_effect(move |_| {
        if let Some(Err(err)) = tours_resource.get() {
            toasts.push_error(format!("Could not load tours: {}", err));
        }
    });
    let loading = tours_resource.loading();
    let query = create_rw_signal(String::new());
    let tours = Signal::derive(move || tours_resource.get().and_then(Result::ok).unwrap_or_default());
    let fetch_error = Signal::derive(move || tours_resource.get().and_then(Result::err).map(|err| err.to_string()));

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex flex-col gap-3 sm:flex-row sm:items-end sm:justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">"Tours"</h1>
                        <p class="text-sm text-fg-muted">"Guided trips with everything arranged."</p>
                    </div>
                    <input
                        type="search"
                        class="w-full sm:w-72 rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
                        placeholder="Search by title or destination"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </div>
                <Show when=move || loading.get()>
                    <LoadingSpinner />
                </Show>
                {move || fetch_error.get().map(|message| view! { <ErrorMessage message=message /> })}
                <TourList tours=Signal::derive(move || search_tours(&tours.get(), &query.get())) />
            </div>
        </Layout>
    }
}

#[component]
pub fn TourList(#[prop(into)] tours: Signal<Vec<Tour>>) -> impl IntoView {
    view! {
        <Show
            when=move || !tours.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="No tours found" description="Check back soon for new trips." /> }
        >
            <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3">
                <For
                    each=move || tours.get()
                    key=|tour| tour.id
                    children=|tour: Tour| view! { <TourCard tour=tour /> }
                />
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::tour;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn tour_list_renders_cards_or_empty_state() {
        let html = render_to_string(|| {
            view! { <TourList tours=Signal::derive(|| vec![tour(1, &[90.0]), tour(2, &[])]) /> }
        });
        assert!(html.contains("Tour 1"));
        assert!(html.contains("from $90.00"));
        assert!(html.contains("href=\"/tours/2\""));

        let html = render_to_string(|| view! { <TourList tours=Signal::derive(Vec::new) /> });
        assert!(html.contains("No tours found"));
    }
}
