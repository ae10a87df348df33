use crate::{
    api::{files, House, Review, Tour},
    config,
    utils::{format, time},
};
use leptos::*;

/// Five stars, filled up to the rounded rating.
pub fn star_fill(rating: f64) -> [bool; 5] {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    let mut stars = [false; 5];
    for star in stars.iter_mut().take(filled) {
        *star = true;
    }
    stars
}

#[component]
pub fn RatingStars(rating: f64) -> impl IntoView {
    view! {
        <span class="inline-flex items-center gap-0.5" aria-label=format!("{:.1} out of 5", rating)>
            {star_fill(rating)
                .into_iter()
                .map(|filled| {
                    view! {
                        <span class=if filled { "text-status-warning-text" } else { "text-fg-muted opacity-40" }>
                            "★"
                        </span>
                    }
                })
                .collect_view()}
        </span>
    }
}

#[component]
pub fn HouseCard(house: House) -> impl IntoView {
    let currency = config::current().currency_symbol;
    let href = format!("/houses/{}", house.id);
    let image = files::image_src(house.cover_image());
    let price = format::format_money(house.price_per_night, &currency);
    let rating = format::format_rating(house.rating);
    let rooms = format::pluralize(house.room_count as i64, "room", "rooms");
    let guests = format::pluralize(house.max_guests as i64, "guest", "guests");

    view! {
        <a href=href class="group block bg-surface-elevated rounded-lg shadow hover:shadow-lg transition-shadow overflow-hidden">
            <img src=image alt=house.name.clone() class="h-48 w-full object-cover" loading="lazy"/>
            <div class="p-4 space-y-2">
                <div class="flex items-start justify-between gap-2">
                    <h3 class="text-lg font-semibold text-fg group-hover:underline">{house.name.clone()}</h3>
                    <span class="text-sm text-fg-muted whitespace-nowrap">"★ "{rating}</span>
                </div>
                <p class="text-sm text-fg-muted">{house.location.clone()}</p>
                <p class="text-sm text-fg-muted">{format!("{} · {}", rooms, guests)}</p>
                {house.category_name.clone().map(|name| view! {
                    <span class="inline-block rounded-full bg-surface-muted px-2 py-0.5 text-xs text-fg-muted">{name}</span>
                })}
                <p class="text-base font-semibold text-fg">{price}<span class="text-sm font-normal text-fg-muted">" / night"</span></p>
            </div>
        </a>
    }
}

#[component]
pub fn TourCard(tour: Tour) -> impl IntoView {
    let currency = config::current().currency_symbol;
    let href = format!("/tours/{}", tour.id);
    let image = files::image_src(tour.cover_image());
    let price = tour
        .starting_price()
        .map(|price| format!("from {}", format::format_money(price, &currency)))
        .unwrap_or_else(|| "Price on request".into());
    let days = format::pluralize(tour.duration_days as i64, "day", "days");

    view! {
        <a href=href class="group block bg-surface-elevated rounded-lg shadow hover:shadow-lg transition-shadow overflow-hidden">
            <img src=image alt=tour.title.clone() class="h-48 w-full object-cover" loading="lazy"/>
            <div class="p-4 space-y-2">
                <h3 class="text-lg font-semibold text-fg group-hover:underline">{tour.title.clone()}</h3>
                <p class="text-sm text-fg-muted">{format!("{} · {}", tour.destination, days)}</p>
                {tour.start_date.map(|date| view! {
                    <p class="text-sm text-fg-muted">{format!("Starts {}", time::format_date(date))}</p>
                })}
                <p class="text-base font-semibold text-fg">{price}</p>
            </div>
        </a>
    }
}

#[component]
pub fn ReviewCard(
    review: Review,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let id = review.id;
    let stars = f64::from(review.rating);
    let author = if review.author_name.trim().is_empty() {
        "Guest".to_string()
    } else {
        review.author_name.clone()
    };
    view! {
        <article class="bg-surface-elevated rounded-lg border border-border p-4 space-y-2">
            <div class="flex items-center justify-between gap-2">
                <div class="flex items-center gap-2">
                    <span class="font-semibold text-fg">{author}</span>
                    <RatingStars rating=stars/>
                </div>
                {review.created_at.map(|at| view! {
                    <time class="text-xs text-fg-muted">{time::format_date(at.date_naive())}</time>
                })}
            </div>
            <p class="text-sm text-fg">{review.comment.clone()}</p>
            {on_delete.map(|callback| view! {
                <button
                    type="button"
                    class="text-xs text-action-danger-bg hover:underline"
                    on:click=move |_| callback.call(id)
                >
                    "Delete review"
                </button>
            })}
        </article>
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6">
                <dt class="text-sm font-medium text-fg-muted">{title}</dt>
                <dd class="mt-1 text-2xl font-semibold text-fg">{move || value.get()}</dd>
                {hint.map(|hint| view! { <p class="mt-1 text-xs text-fg-muted">{hint}</p> })}
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{house, tour};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn house_card_renders_price_and_link() {
        let html = render_to_string(|| view! { <HouseCard house=house(7, 1250.0, 3) /> });
        assert!(html.contains("href=\"/houses/7\""));
        assert!(html.contains("$1,250.00"));
        assert!(html.contains("3 rooms"));
        assert!(html.contains("/images/placeholder.svg"));
    }

    #[test]
    fn tour_card_shows_cheapest_package() {
        let html = render_to_string(|| view! { <TourCard tour=tour(2, &[450.0, 300.0]) /> });
        assert!(html.contains("from $300.00"));
        assert!(html.contains("3 days"));

        let html = render_to_string(|| view! { <TourCard tour=tour(3, &[]) /> });
        assert!(html.contains("Price on request"));
    }

    #[test]
    fn review_and_stat_cards_render() {
        let html = render_to_string(|| {
            let review = Review {
                id: 1,
                house_id: 7,
                author_name: "".into(),
                rating: 4,
                comment: "Lovely garden".into(),
                created_at: None,
            };
            view! {
                <div>
                    <ReviewCard review=review />
                    <StatCard title="Revenue" value="$360.00".to_string() hint="Confirmed only" />
                </div>
            }
        });
        assert!(html.contains("Guest"));
        assert!(html.contains("Lovely garden"));
        assert!(html.contains("Revenue"));
        assert!(html.contains("Confirmed only"));
        assert!(!html.contains("Delete review"));
    }
}
