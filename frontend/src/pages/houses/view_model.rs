use super::{
    repository::HousesRepository,
    utils::{HouseFilter, HouseFilterForm},
};
use crate::{
    api::{ApiClient, ApiError, Booking, Category, CreateBooking, CreateReview, House, Review},
    state::toast::use_toasts,
};
use leptos::*;
use std::rc::Rc;

fn repository() -> HousesRepository {
    let api = use_context::<ApiClient>().unwrap_or_default();
    HousesRepository::new_with_client(Rc::new(api))
}

#[derive(Clone, Copy)]
pub struct HousesViewModel {
    pub filter: RwSignal<HouseFilter>,
    pub filter_error: RwSignal<Option<String>>,
    pub houses_resource: Resource<(), Result<Vec<House>, ApiError>>,
    pub categories_resource: Resource<(), Result<Vec<Category>, ApiError>>,
}

impl HousesViewModel {
    pub fn apply_filter(&self, form: &HouseFilterForm) {
        let (filter, error) = form.to_filter();
        log::debug!("house filter applied: {:?}", filter);
        self.filter.set(filter);
        self.filter_error.set(error);
    }

    pub fn reset_filter(&self) {
        self.filter.set(HouseFilter::default());
        self.filter_error.set(None);
    }

    pub fn visible_houses(&self) -> Signal<Vec<House>> {
        let resource = self.houses_resource;
        let filter = self.filter;
        Signal::derive(move || {
            let houses = resource
                .get()
                .and_then(Result::ok)
                .unwrap_or_default();
            filter.with(|filter| filter.apply(&houses))
        })
    }

    pub fn category_options(&self) -> Signal<Vec<(String, String)>> {
        let resource = self.categories_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(Result::ok)
                .unwrap_or_default()
                .into_iter()
                .map(|category| (category.id.to_string(), category.name))
                .collect()
        })
    }
}

pub fn use_houses_view_model() -> HousesViewModel {
    let repository = repository();
    let toasts = use_toasts();

    let repo_for_houses = repository.clone();
    let houses_resource = create_resource(
        || (),
        move |_| {
            let repo = repo_for_houses.clone();
            async move { repo.fetch_houses().await }
        },
    );
    let repo_for_categories = repository;
    let categories_resource = create_resource(
        || (),
        move |_| {
            let repo = repo_for_categories.clone();
            async move { repo.fetch_categories().await }
        },
    );

    create_effect(move |_| {
        if let Some(Err(err)) = houses_resource.get() {
            toasts.push_error(format!("Could not load houses: {}", err));
        }
    });

    HousesViewModel {
        filter: create_rw_signal(HouseFilter::default()),
        filter_error: create_rw_signal(None),
        houses_resource,
        categories_resource,
    }
}

#[derive(Clone, Copy)]
pub struct HouseDetailViewModel {
    pub house_id: Signal<Option<i64>>,
    pub house_reload: RwSignal<u32>,
    pub reviews_reload: RwSignal<u32>,
    pub house_resource: Resource<(Option<i64>, u32), Result<House, ApiError>>,
    pub reviews_resource: Resource<(Option<i64>, u32), Result<Vec<Review>, ApiError>>,
    pub booking_action: Action<CreateBooking, Result<Booking, ApiError>>,
    pub review_action: Action<CreateReview, Result<Review, ApiError>>,
    pub delete_review_action: Action<i64, Result<(), ApiError>>,
}

impl HouseDetailViewModel {
    pub fn reviews(&self) -> Signal<Vec<Review>> {
        let resource = self.reviews_resource;
        Signal::derive(move || resource.get().and_then(Result::ok).unwrap_or_default())
    }
}

pub fn use_house_detail_view_model(house_id: Signal<Option<i64>>) -> HouseDetailViewModel {
    let repository = repository();
    let toasts = use_toasts();
    let house_reload = create_rw_signal(0u32);
    let reviews_reload = create_rw_signal(0u32);

    let repo_for_house = repository.clone();
    let house_resource = create_resource(
        move || (house_id.get(), house_reload.get()),
        move |(id, _)| {
            let repo = repo_for_house.clone();
            async move {
                match id {
                    Some(id) => repo.fetch_house(id).await,
                    None => Err(ApiError::from_status(404)),
                }
            }
        },
    );

    let repo_for_reviews = repository.clone();
    let reviews_resource = create_resource(
        move || (house_id.get(), reviews_reload.get()),
        move |(id, _)| {
            let repo = repo_for_reviews.clone();
            async move {
                match id {
                    Some(id) => repo.fetch_reviews(id).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    let repo_for_booking = repository.clone();
    let booking_action = create_action(move |request: &CreateBooking| {
        let repo = repo_for_booking.clone();
        let request = request.clone();
        async move { repo.book(request).await }
    });

    let repo_for_review = repository.clone();
    let review_action = create_action(move |request: &CreateReview| {
        let repo = repo_for_review.clone();
        let request = request.clone();
        async move { repo.add_review(request).await }
    });

    let repo_for_delete = repository;
    let delete_review_action = create_action(move |id: &i64| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { repo.remove_review(id).await }
    });

    create_effect(move |_| {
        if let Some(result) = booking_action.value().get() {
            match result {
                Ok(booking) => {
                    log::info!("booking {} created", booking.id);
                    toasts.push_success("Booking request sent. We will confirm it shortly.");
                    house_reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    toasts.push_error(err.to_string());
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = review_action.value().get() {
            match result {
                Ok(_) => {
                    toasts.push_success("Thanks for your review!");
                    reviews_reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    toasts.push_error(err.to_string());
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_review_action.value().get() {
            match result {
                Ok(()) => {
                    toasts.push_success("Review deleted.");
                    reviews_reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    toasts.push_error(err.to_string());
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(Err(err)) = house_resource.get() {
            toasts.push_error(err.to_string());
        }
    });

    HouseDetailViewModel {
        house_id,
        house_reload,
        reviews_reload,
        house_resource,
        reviews_resource,
        booking_action,
        review_action,
        delete_review_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::date;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn apply_filter_records_error_and_keeps_valid_criteria() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = use_houses_view_model();
            vm.apply_filter(&HouseFilterForm {
                check_in: "2025-07-05".into(),
                check_out: "2025-07-01".into(),
                max_price: "150".into(),
                ..HouseFilterForm::default()
            });
            assert_eq!(vm.filter.get().max_price, Some(150.0));
            assert!(vm.filter.get().stay().is_none());
            assert!(vm.filter_error.get().is_some());

            vm.apply_filter(&HouseFilterForm {
                check_in: "2025-07-01".into(),
                check_out: "2025-07-05".into(),
                ..HouseFilterForm::default()
            });
            assert_eq!(
                vm.filter.get().stay(),
                Some((date(2025, 7, 1), date(2025, 7, 5)))
            );
            assert!(vm.filter_error.get().is_none());

            vm.reset_filter();
            assert!(vm.filter.get().is_empty());
            assert!(vm.visible_houses().get().is_empty());
            leptos_reactive::suppress_resource_load(false);
        });
    }
}
