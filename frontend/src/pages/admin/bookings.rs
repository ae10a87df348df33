use crate::{
    api::{Booking, BookingStatus},
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    config,
    pages::admin::{repository::AdminRepository, AdminShell},
    state::toast::use_toasts,
    utils::{format, time},
};
use leptos::*;

/// Status filter plus a free-text match on guest, email and house.
pub fn filter_bookings(bookings: &[Booking], status: Option<BookingStatus>, query: &str) -> Vec<Booking> {
    let needle = query.trim().to_lowercase();
    let mut matched: Vec<Booking> = bookings
        .iter()
        .filter(|booking| status.map_or(true, |wanted| booking.status == wanted))
        .filter(|booking| {
            needle.is_empty()
                || booking.full_name.to_lowercase().contains(&needle)
                || booking.email.to_lowercase().contains(&needle)
                || booking
                    .house_name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();
    matched.sort_by(|a, b| b.check_in.cmp(&a.check_in).then_with(|| b.id.cmp(&a.id)));
    matched
}

pub fn set_status(bookings: &mut [Booking], id: i64, status: BookingStatus) {
    if let Some(booking) = bookings.iter_mut().find(|booking| booking.id == id) {
        booking.status = status;
    }
}

/// Which transitions the table offers for a booking in `status`.
pub fn next_statuses(status: BookingStatus) -> &'static [BookingStatus] {
    match status {
        BookingStatus::Pending => &[BookingStatus::Confirmed, BookingStatus::Canceled],
        BookingStatus::Confirmed => &[BookingStatus::Canceled],
        BookingStatus::Canceled => &[BookingStatus::Pending],
    }
}

fn action_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "Reopen",
        BookingStatus::Confirmed => "Confirm",
        BookingStatus::Canceled => "Cancel",
    }
}

#[component]
pub fn AdminBookingsPage() -> impl IntoView {
    view! {
        <AdminShell title="Bookings">
            <BookingsManager />
        </AdminShell>
    }
}

#[component]
fn BookingsManager() -> impl IntoView {
    let repository = AdminRepository::from_context();
    let toasts = use_toasts();
    let rows = create_rw_signal(Vec::<Booking>::new());
    let status_filter = create_rw_signal(String::new());
    let query = create_rw_signal(String::new());
    let pending_delete = create_rw_signal(None::<i64>);

    let repo = repository.clone();
    let bookings = create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { repo.bookings().await }
        },
    );
    create_effect(move |_| {
        if let Some(Ok(list)) = bookings.get() {
            rows.set(list);
        }
    });

    let repo = repository.clone();
    let status_action = create_action(move |(id, status): &(i64, BookingStatus)| {
        let repo = repo.clone();
        let (id, status) = (*id, *status);
        async move { repo.set_booking_status(id, status).await.map(|_| (id, status)) }
    });
    let repo = repository;
    let delete_action = create_action(move |id: &i64| {
        let repo = repo.clone();
        let id = *id;
        async move { repo.delete_booking(id).await.map(|_| id) }
    });

    create_effect(move |_| {
        if let Some(result) = status_action.value().get() {
            match result {
                Ok((id, status)) => {
                    rows.update(|list| set_status(list, id, status));
                    toasts.push_success(format!("Booking #{} is now {}.", id, status.label().to_lowercase()));
                }
                Err(err) => {
                    toasts.push_error(err.to_string());
                }
            }
        }
    });
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            pending_delete.set(None);
            match result {
                Ok(id) => {
                    rows.update(|list| list.retain(|booking| booking.id != id));
                    toasts.push_success("Booking deleted.");
                }
                Err(err) => {
                    toasts.push_error(err.to_string());
                }
            }
        }
    });

    let visible = Signal::derive(move || {
        let status = BookingStatus::parse(&status_filter.get());
        rows.with(|list| filter_bookings(list, status, &query.get()))
    });
    let busy = Signal::derive(move || status_action.pending().get());

    view! {
        <div class="flex flex-col gap-3 sm:flex-row sm:items-end">
            <label class="text-sm text-fg-muted">
                "Status"
                <select
                    class="ml-2 rounded-md border border-form-control-border bg-form-control-bg px-2 py-1 text-sm text-fg"
                    on:change=move |ev| status_filter.set(event_target_value(&ev))
                >
                    <option value="">"All"</option>
                    {BookingStatus::ALL
                        .iter()
                        .map(|status| view! { <option value=status.label()>{status.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <input
                type="search"
                placeholder="Search guest, email or house"
                class="flex-1 rounded-md border border-form-control-border bg-form-control-bg px-3 py-1.5 text-sm text-fg"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>
        {move || match bookings.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
            Some(Ok(_)) => view! {
                <BookingsTable
                    bookings=visible
                    busy=busy
                    on_status=Callback::new(move |change| status_action.dispatch(change))
                    on_delete=Callback::new(move |id| pending_delete.set(Some(id)))
                />
            }
            .into_view(),
        }}
        <ConfirmDialog
            is_open=Signal::derive(move || pending_delete.with(Option::is_some))
            title="Delete booking"
            message=Signal::derive(move || {
                pending_delete
                    .get()
                    .map(|id| format!("Booking #{} will be removed permanently.", id))
                    .unwrap_or_default()
            })
            confirm_label="Delete"
            destructive=true
            pending=delete_action.pending()
            on_confirm=Callback::new(move |_| {
                if let Some(id) = pending_delete.get_untracked() {
                    delete_action.dispatch(id);
                }
            })
            on_cancel=Callback::new(move |_| pending_delete.set(None))
        />
    }
}

#[component]
pub fn BookingsTable(
    #[prop(into)] bookings: Signal<Vec<Booking>>,
    #[prop(into)] busy: Signal<bool>,
    on_status: Callback<(i64, BookingStatus)>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let currency = config::current().currency_symbol;
    view! {
        <Show
            when=move || bookings.with(|list| !list.is_empty())
            fallback=|| view! { <EmptyState title="No bookings" description="Nothing matches the current filter." /> }
        >
            <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
                <table class="min-w-full text-sm">
                    <thead class="bg-surface-muted text-left text-fg-muted">
                        <tr>
                            <th class="px-4 py-2">"#"</th>
                            <th class="px-4 py-2">"Guest"</th>
                            <th class="px-4 py-2">"House"</th>
                            <th class="px-4 py-2">"Dates"</th>
                            <th class="px-4 py-2 text-right">"Total"</th>
                            <th class="px-4 py-2">"Status"</th>
                            <th class="px-4 py-2"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || bookings.get()
                            key=|booking| (booking.id, booking.status)
                            children={
                                let currency = currency.clone();
                                move |booking: Booking| {
                                    let id = booking.id;
                                    view! {
                                        <tr class="border-t border-border align-top">
                                            <td class="px-4 py-2 text-fg-muted">{id}</td>
                                            <td class="px-4 py-2">
                                                <div class="font-medium text-fg">{booking.full_name.clone()}</div>
                                                <div class="text-xs text-fg-muted">{booking.email.clone()}</div>
                                                {booking.phone.clone().map(|phone| view! { <div class="text-xs text-fg-muted">{phone}</div> })}
                                            </td>
                                            <td class="px-4 py-2">
                                                {booking.house_name.clone().unwrap_or_else(|| format!("House #{}", booking.house_id))}
                                            </td>
                                            <td class="px-4 py-2 whitespace-nowrap">
                                                {time::format_range(booking.check_in, booking.check_out)}
                                                <div class="text-xs text-fg-muted">
                                                    {format::pluralize(booking.guests as i64, "guest", "guests")}
                                                </div>
                                            </td>
                                            <td class="px-4 py-2 text-right">{format::format_money(booking.total_price, &currency)}</td>
                                            <td class="px-4 py-2">
                                                <span class=format!("rounded-full px-2 py-0.5 text-xs {}", booking.status.badge_class())>
                                                    {booking.status.label()}
                                                </span>
                                            </td>
                                            <td class="px-4 py-2 text-right space-x-2 whitespace-nowrap">
                                                {next_statuses(booking.status)
                                                    .iter()
                                                    .map(|next| {
                                                        let next = *next;
                                                        view! {
                                                            <button
                                                                class="text-link hover:text-link-hover disabled:opacity-50"
                                                                disabled=move || busy.get()
                                                                on:click=move |_| on_status.call((id, next))
                                                            >
                                                                {action_label(next)}
                                                            </button>
                                                        }
                                                    })
                                                    .collect_view()}
                                                <button class="text-status-error-text" on:click=move |_| on_delete.call(id)>"Delete"</button>
                                            </td>
                                        </tr>
                                    }
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
