use super::{
    components::filter::HouseFilterPanel,
    utils::HouseFilterForm,
    view_model::{use_houses_view_model, HousesViewModel},
};
use crate::{
    api::House,
    components::{
        cards::HouseCard,
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::format,
};
use leptos::*;

#[component]
pub fn HousesPanel() -> impl IntoView {
    let vm = use_houses_view_model();
    view! {
        <Layout>
            <HousesListing vm=vm />
        </Layout>
    }
}

#[component]
pub fn HousesListing(vm: HousesViewModel) -> impl IntoView {
    let on_apply = Callback::new(move |form: HouseFilterForm| vm.apply_filter(&form));
    let on_reset = Callback::new(move |_: ()| vm.reset_filter());
    let houses = vm.visible_houses();
    let loading = vm.houses_resource.loading();
    let fetch_error = Signal::derive(move || vm.houses_resource.get().and_then(Result::err));

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">"Houses"</h1>
                <p class="text-sm text-fg-muted">"Find a place to stay and check availability for your dates."</p>
            </div>
            <HouseFilterPanel
                categories=vm.category_options()
                error=vm.filter_error
                on_apply=on_apply
                on_reset=on_reset
            />
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            {move || fetch_error.get().map(|err| view! { <ErrorMessage message=err.to_string() /> })}
            <Show when=move || !loading.get() && fetch_error.get().is_none()>
                <p class="text-sm text-fg-muted">
                    {move || format!(
                        "{} available",
                        format::pluralize(houses.with(Vec::len) as i64, "house", "houses")
                    )}
                </p>
                <Show
                    when=move || !houses.with(Vec::is_empty)
                    fallback=|| view! {
                        <EmptyState
                            title="No houses match your search"
                            description="Try other dates or widen the price range."
                        />
                    }
                >
                    <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3">
                        <For
                            each=move || houses.get()
                            key=|house| house.id
                            children=|house: House| view! { <HouseCard house=house /> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
