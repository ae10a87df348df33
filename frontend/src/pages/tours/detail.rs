use super::{repository::ToursRepository, utils::packages_by_price};
use crate::{
    api::{files, Tour},
    components::layout::{ErrorMessage, Layout, LoadingSpinner},
    config,
    pages::houses::parse_id,
    state::toast::use_toasts,
    utils::{format, time},
};
use leptos::*;
use leptos_router::use_params_map;

#[component]
pub fn TourDetailPage() -> impl IntoView {
    let params = use_params_map();
    let repository = ToursRepository::from_context();
    let toasts = use_toasts();
    let tour_resource = create_resource(
        move || params.with(|params| parse_id(params.get("id").map(String::as_str))),
        move |id| {
            let repo = repository.clone();
            async move {
                match id {
                    Some(id) => repo.fetch_tour(id).await,
                    None => Err(crate::api::ApiError::from_status(404)),
                }
            }
        },
    );
    create_effect(move |_| {
        if let Some(Err(err)) = tour_resource.get() {
            toasts.push_error(err.to_string());
        }
    });

    view! {
        <Layout>
            {move || match tour_resource.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! {
                    <div class="space-y-4">
                        <ErrorMessage message=err.to_string() />
                        <a href="/tours" class="text-link hover:text-link-hover text-sm">"Back to tours"</a>
                    </div>
                }
                .into_view(),
                Some(Ok(tour)) => view! { <TourDetailView tour=tour /> }.into_view(),
            }}
        </Layout>
    }
}

#[component]
pub fn TourDetailView(tour: Tour) -> impl IntoView {
    let currency = config::current().currency_symbol;
    let cover = files::image_src(tour.cover_image());
    let days = format::pluralize(tour.duration_days as i64, "day", "days");
    let from_price = tour
        .starting_price()
        .map(|price| format!("from {}", format::format_money(price, &currency)));
    let packages = packages_by_price(&tour);
    let gallery: Vec<String> = tour
        .images
        .iter()
        .skip(1)
        .map(|name| files::image_src(Some(name)))
        .collect();

    view! {
        <article class="space-y-8">
            <a href="/tours" class="text-link hover:text-link-hover text-sm">"← All tours"</a>
            <img src=cover alt=tour.title.clone() class="w-full h-72 sm:h-96 object-cover rounded-lg" />
            <header class="space-y-1">
                <h1 class="text-2xl font-bold text-fg">{tour.title.clone()}</h1>
                <p class="text-sm text-fg-muted">{format!("{} · {}", tour.destination, days)}</p>
                {tour.start_date.map(|date| view! {
                    <p class="text-sm text-fg-muted">{format!("Next departure {}", time::format_date(date))}</p>
                })}
                {from_price.map(|price| view! { <p class="text-lg font-semibold text-fg">{price}</p> })}
            </header>
            <p class="text-fg whitespace-pre-line">{tour.description.clone()}</p>
            <section class="space-y-3">
                <h2 class="text-lg font-semibold text-fg">"Packages"</h2>
                {if packages.is_empty() {
                    view! { <p class="text-sm text-fg-muted">"Prices are available on request."</p> }.into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                            {packages
                                .into_iter()
                                .map(|package| {
                                    let price = format::format_money(package.price, &currency);
                                    view! {
                                        <div class="bg-surface-elevated rounded-lg border border-border p-4 space-y-1">
                                            <div class="flex items-baseline justify-between">
                                                <h3 class="font-semibold text-fg">{package.name}</h3>
                                                <span class="font-semibold text-fg">{price}</span>
                                            </div>
                                            {package.description.map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }}
            </section>
            {(!gallery.is_empty()).then(|| view! {
                <section class="grid grid-cols-2 sm:grid-cols-4 gap-2">
                    {gallery
                        .into_iter()
                        .map(|src| view! { <img src=src alt="" class="h-32 w-full object-cover rounded-md" loading="lazy" /> })
                        .collect_view()}
                </section>
            })}
        </article>
    }
}
