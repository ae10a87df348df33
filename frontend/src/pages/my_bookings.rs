use crate::{
    api::{ApiClient, ApiError, Booking, BookingStatus},
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        guard::RequireAuth,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    config,
    state::toast::use_toasts,
    utils::{format, time},
};
use leptos::*;

/// Guests may withdraw a request only until staff have acted on it.
pub fn can_cancel(booking: &Booking) -> bool {
    booking.status == BookingStatus::Pending
}

/// Upcoming stays first (soonest on top), then past ones (latest on top).
pub fn sort_for_guest(mut bookings: Vec<Booking>, today: chrono::NaiveDate) -> Vec<Booking> {
    bookings.sort_by(|a, b| {
        let a_upcoming = a.check_out > today;
        let b_upcoming = b.check_out > today;
        b_upcoming.cmp(&a_upcoming).then_with(|| {
            if a_upcoming {
                a.check_in.cmp(&b.check_in)
            } else {
                b.check_in.cmp(&a.check_in)
            }
        })
    });
    bookings
}

#[component]
pub fn MyBookingsPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <Layout>
                <MyBookings />
            </Layout>
        </RequireAuth>
    }
}

#[component]
fn MyBookings() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let toasts = use_toasts();
    let reload = create_rw_signal(0u32);

    let list_api = api.clone();
    let bookings_resource = create_resource(
        move || reload.get(),
        move |_| {
            let api = list_api.clone();
            async move { api.my_bookings().await }
        },
    );

    let cancel_action = create_action(move |id: &i64| {
        let api = api.clone();
        let id = *id;
        async move { api.update_booking_status(id, BookingStatus::Canceled).await }
    });
    let pending_cancel = create_rw_signal(None::<i64>);

    create_effect(move |_| {
        if let Some(result) = cancel_action.value().get() {
            pending_cancel.set(None);
            match result {
                Ok(()) => {
                    toasts.push_success("Booking canceled.");
                    reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    toasts.push_error(err.to_string());
                }
            }
        }
    });
    create_effect(move |_| {
        if let Some(Err(err)) = bookings_resource.get() {
            toasts.push_error(err.to_string());
        }
    });

    let bookings = Signal::derive(move || {
        bookings_resource
            .get()
            .map(|result| result.map(|list| sort_for_guest(list, time::today())))
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-fg">"My bookings"</h1>
            <BookingList bookings=bookings on_cancel=Callback::new(move |id| pending_cancel.set(Some(id))) />
            <ConfirmDialog
                is_open=Signal::derive(move || pending_cancel.get().is_some())
                title="Cancel this booking?"
                message="The house will be released for these dates."
                confirm_label="Cancel booking"
                cancel_label="Keep it"
                destructive=true
                pending=cancel_action.pending()
                on_confirm=Callback::new(move |_| {
                    if let Some(id) = pending_cancel.get_untracked() {
                        cancel_action.dispatch(id);
                    }
                })
                on_cancel=Callback::new(move |_| pending_cancel.set(None))
            />
        </div>
    }
}

#[component]
pub fn BookingList(
    #[prop(into)] bookings: Signal<Option<Result<Vec<Booking>, ApiError>>>,
    on_cancel: Callback<i64>,
) -> impl IntoView {
    let currency = config::current().currency_symbol;
    view! {
        {move || match bookings.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
            Some(Ok(list)) if list.is_empty() => view! {
                <EmptyState
                    title="No bookings yet"
                    description="Find a house you like and request your dates."
                    action=("/houses", "Browse houses")
                />
            }
            .into_view(),
            Some(Ok(list)) => {
                let currency = currency.clone();
                view! {
                    <ul class="space-y-3">
                        {list
                            .into_iter()
                            .map(|booking| {
                                let id = booking.id;
                                let cancellable = can_cancel(&booking);
                                let house = booking
                                    .house_name
                                    .clone()
                                    .unwrap_or_else(|| format!("House #{}", booking.house_id));
                                view! {
                                    <li class="bg-surface-elevated rounded-lg shadow p-4 flex flex-col gap-2 sm:flex-row sm:items-center sm:justify-between">
                                        <div class="space-y-1">
                                            <a href=format!("/houses/{}", booking.house_id) class="font-semibold text-fg hover:underline">{house}</a>
                                            <p class="text-sm text-fg-muted">
                                                {format!(
                                                    "{} · {} · {}",
                                                    time::format_range(booking.check_in, booking.check_out),
                                                    format::pluralize(booking.guests as i64, "guest", "guests"),
                                                    format::format_money(booking.total_price, &currency)
                                                )}
                                            </p>
                                        </div>
                                        <div class="flex items-center gap-3">
                                            <span class=format!("rounded-full px-2 py-0.5 text-xs font-medium {}", booking.status.badge_class())>
                                                {booking.status.label()}
                                            </span>
                                            {cancellable.then(|| view! {
                                                <button
                                                    type="button"
                                                    class="text-sm text-action-danger-bg hover:underline"
                                                    on:click=move |_| on_cancel.call(id)
                                                >
                                                    "Cancel"
                                                </button>
                                            })}
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_view()
            }
        }}
    }
}
