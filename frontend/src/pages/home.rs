use crate::{
    api::{ApiClient, Faq, House, Tour},
    components::{
        cards::{HouseCard, TourCard},
        layout::{Layout, LoadingSpinner},
    },
    config,
    pages::faq::FaqList,
    state::toast::use_toasts,
};
use leptos::*;

const FEATURED_COUNT: usize = 3;
const FAQ_PREVIEW_COUNT: usize = 4;

/// Best rated first; unrated houses keep their API order at the end.
pub fn featured_houses(houses: &[House], count: usize) -> Vec<House> {
    let mut ranked = houses.to_vec();
    ranked.sort_by(|a, b| {
        b.rating
            .unwrap_or(f64::MIN)
            .total_cmp(&a.rating.unwrap_or(f64::MIN))
    });
    ranked.truncate(count);
    ranked
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let toasts = use_toasts();

    let houses_api = api.clone();
    let houses = create_resource(
        || (),
        move |_| {
            let api = houses_api.clone();
            async move { api.list_houses().await }
        },
    );
    let tours_api = api.clone();
    let tours = create_resource(
        || (),
        move |_| {
            let api = tours_api.clone();
            async move { api.list_tours().await }
        },
    );
    let faqs = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.list_faqs().await }
        },
    );

    create_effect(move |_| {
        let failed = [
            houses.get().and_then(Result::err),
            tours.get().and_then(Result::err),
            faqs.get().and_then(Result::err),
        ];
        if let Some(err) = failed.into_iter().flatten().next() {
            toasts.push_error(err.to_string());
        }
    });

    let featured = Signal::derive(move || {
        houses
            .get()
            .and_then(Result::ok)
            .map(|list| featured_houses(&list, FEATURED_COUNT))
    });
    let tour_preview = Signal::derive(move || {
        tours.get().and_then(Result::ok).map(|mut list| {
            list.truncate(FEATURED_COUNT);
            list
        })
    });
    let faq_preview = Signal::derive(move || {
        faqs.get()
            .and_then(Result::ok)
            .map(|mut list| {
                list.truncate(FAQ_PREVIEW_COUNT);
                list
            })
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <HomeSections featured=featured tours=tour_preview faqs=faq_preview />
        </Layout>
    }
}

#[component]
pub fn HomeSections(
    #[prop(into)] featured: Signal<Option<Vec<House>>>,
    #[prop(into)] tours: Signal<Option<Vec<Tour>>>,
    #[prop(into)] faqs: Signal<Vec<Faq>>,
) -> impl IntoView {
    let site_name = config::current().site_name;

    view! {
        <div class="space-y-12">
            <section class="text-center py-12">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl">{site_name}</h1>
                <p class="mt-3 max-w-2xl mx-auto text-base text-fg-muted sm:text-lg">
                    "Country houses for a weekend away and guided tours across the region."
                </p>
                <div class="mt-6 flex justify-center gap-3">
                    <a href="/houses" class="px-6 py-3 rounded-md text-base font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover">
                        "Find a house"
                    </a>
                    <a href="/tours" class="px-6 py-3 rounded-md text-base font-medium text-fg bg-surface-muted hover:bg-surface-elevated border border-border">
                        "Browse tours"
                    </a>
                </div>
            </section>

            <section class="space-y-4">
                <div class="flex items-baseline justify-between">
                    <h2 class="text-2xl font-bold text-fg">"Featured houses"</h2>
                    <a href="/houses" class="text-sm text-link hover:text-link-hover">"See all"</a>
                </div>
                {move || match featured.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(list) => view! {
                        <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3">
                            {list.into_iter().map(|house| view! { <HouseCard house=house /> }).collect_view()}
                        </div>
                    }
                    .into_view(),
                }}
            </section>

            <section class="space-y-4">
                <div class="flex items-baseline justify-between">
                    <h2 class="text-2xl font-bold text-fg">"Tours"</h2>
                    <a href="/tours" class="text-sm text-link hover:text-link-hover">"See all"</a>
                </div>
                {move || match tours.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(list) => view! {
                        <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3">
                            {list.into_iter().map(|tour| view! { <TourCard tour=tour /> }).collect_view()}
                        </div>
                    }
                    .into_view(),
                }}
            </section>

            <Show when=move || !faqs.with(Vec::is_empty)>
                <section class="space-y-4">
                    <div class="flex items-baseline justify-between">
                        <h2 class="text-2xl font-bold text-fg">"Questions"</h2>
                        <a href="/faq" class="text-sm text-link hover:text-link-hover">"All questions"</a>
                    </div>
                    <FaqList faqs=faqs />
                </section>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::featured_houses;
    use crate::test_support::helpers::house;

    #[test]
    fn featured_houses_prefers_rating() {
        let mut low = house(1, 50.0, 1);
        low.rating = Some(3.0);
        let mut unrated = house(2, 60.0, 1);
        unrated.rating = None;
        let mut top = house(3, 70.0, 1);
        top.rating = Some(4.9);

        let picked = featured_houses(&[low, unrated, top], 2);
        let ids: Vec<i64> = picked.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
