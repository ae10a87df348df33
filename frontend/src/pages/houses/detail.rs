use super::{
    components::{booking_form::BookingPanel, gallery::HouseGallery, reviews::ReviewsSection},
    utils::upcoming_periods,
    view_model::{use_house_detail_view_model, HouseDetailViewModel},
};
use crate::{
    api::House,
    components::layout::{ErrorMessage, Layout, LoadingSpinner},
    utils::{format, time},
};
use leptos::*;
use leptos_router::use_params_map;

pub fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|id| *id > 0)
}

#[component]
pub fn HouseDetailPage() -> impl IntoView {
    let params = use_params_map();
    let house_id = Signal::derive(move || params.with(|params| parse_id(params.get("id").map(String::as_str))));
    let vm = use_house_detail_view_model(house_id);

    view! {
        <Layout>
            {move || match vm.house_resource.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! {
                    <div class="space-y-4">
                        <ErrorMessage message=err.to_string() />
                        <a href="/houses" class="text-link hover:text-link-hover text-sm">"Back to houses"</a>
                    </div>
                }
                .into_view(),
                Some(Ok(house)) => view! { <HouseDetailView house=house vm=vm /> }.into_view(),
            }}
        </Layout>
    }
}

#[component]
pub fn HouseDetailView(house: House, vm: HouseDetailViewModel) -> impl IntoView {
    let rooms = format::pluralize(house.room_count as i64, "room", "rooms");
    let guests = format::pluralize(house.max_guests as i64, "guest", "guests");
    let booked = upcoming_periods(&house, time::today());
    let advantages = house.advantages.clone();
    let reviews = vm.reviews();
    let reviews_loading = vm.reviews_resource.loading();

    view! {
        <div class="space-y-8">
            <a href="/houses" class="text-link hover:text-link-hover text-sm">"← All houses"</a>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2 space-y-6">
                    <HouseGallery images=house.images.clone() alt=house.name.clone() />
                    <div class="space-y-2">
                        <h1 class="text-2xl font-bold text-fg">{house.name.clone()}</h1>
                        <p class="text-sm text-fg-muted">
                            {format!("{} · {} · {}", house.location, rooms, guests)}
                        </p>
                        {house.category_name.clone().map(|name| view! {
                            <span class="inline-block rounded-full bg-surface-muted px-2 py-0.5 text-xs text-fg-muted">{name}</span>
                        })}
                    </div>
                    <p class="text-fg whitespace-pre-line">{house.description.clone()}</p>
                    {(!advantages.is_empty()).then(|| view! {
                        <section>
                            <h2 class="text-lg font-semibold text-fg mb-2">"Amenities"</h2>
                            <ul class="grid grid-cols-2 gap-2 text-sm text-fg">
                                {advantages
                                    .into_iter()
                                    .map(|advantage| view! {
                                        <li class="flex items-center gap-2">
                                            {advantage.icon.map(|icon| view! { <span aria-hidden="true">{icon}</span> })}
                                            {advantage.name}
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </section>
                    })}
                    <section>
                        <h2 class="text-lg font-semibold text-fg mb-2">"Booked dates"</h2>
                        {if booked.is_empty() {
                            view! { <p class="text-sm text-fg-muted">"No upcoming bookings. All dates are open."</p> }.into_view()
                        } else {
                            view! {
                                <ul class="space-y-1 text-sm text-fg">
                                    {booked
                                        .into_iter()
                                        .map(|period| view! {
                                            <li>{time::format_range(period.check_in, period.check_out)}</li>
                                        })
                                        .collect_view()}
                                </ul>
                            }
                            .into_view()
                        }}
                    </section>
                    <ReviewsSection
                        house_id=house.id
                        reviews=reviews
                        loading=reviews_loading
                        review_action=vm.review_action
                        delete_review_action=vm.delete_review_action
                    />
                </div>
                <aside>
                    <BookingPanel house=house.clone() booking_action=vm.booking_action />
                </aside>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn parse_id_rejects_garbage() {
        assert_eq!(parse_id(Some("12")), Some(12));
        assert_eq!(parse_id(Some("0")), None);
        assert_eq!(parse_id(Some("abc")), None);
        assert_eq!(parse_id(None), None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{Advantage, BookingStatus};
    use crate::test_support::helpers::{booked, date, house, provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    fn detailed_house() -> House {
        let mut house = house(5, 150.0, 2);
        house.advantages = vec![Advantage {
            id: 1,
            name: "Fireplace".into(),
            icon: None,
        }];
        house.bookings = vec![
            booked(date(2099, 8, 1), date(2099, 8, 4), BookingStatus::Confirmed),
            booked(date(2099, 9, 1), date(2099, 9, 4), BookingStatus::Canceled),
        ];
        house
    }

    #[test]
    fn detail_view_lists_amenities_and_active_bookings() {
        let html = render_to_string(|| {
            provide_auth(None);
            let vm = use_house_detail_view_model(Signal::derive(|| Some(5)));
            view! { <HouseDetailView house=detailed_house() vm=vm /> }
        });
        assert!(html.contains("House 5"));
        assert!(html.contains("Fireplace"));
        assert!(html.contains("01 Aug 2099"));
        assert!(!html.contains("01 Sep 2099"));
        assert!(html.contains("Request booking"));
        assert!(html.contains("Sign in"));
        assert!(html.contains("Guests (up to 4)"));
    }

    #[test]
    fn signed_in_visitors_get_review_form() {
        let html = render_to_string(|| {
            provide_auth(Some(regular_user()));
            let vm = use_house_detail_view_model(Signal::derive(|| Some(5)));
            view! { <HouseDetailView house=detailed_house() vm=vm /> }
        });
        assert!(html.contains("Write a review"));
        assert!(!html.contains("to leave a review"));
    }
}
