use crate::{
    api::{ApiError, Booking, CreateBooking, House},
    components::{
        forms::{DateField, NumberField, TextField},
        layout::ErrorMessage,
    },
    config,
    pages::houses::utils::BookingFormState,
    state::auth::use_auth,
    utils::{format, time},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn BookingPanel(
    house: House,
    booking_action: Action<CreateBooking, Result<Booking, ApiError>>,
) -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (user_name, user_email) = auth.with_untracked(|state| {
        state
            .user
            .as_ref()
            .map(|user| (user.name.clone(), user.email.clone()))
            .unwrap_or_default()
    });
    let initial = BookingFormState::prefilled(&user_name, &user_email);

    let full_name = create_rw_signal(initial.full_name);
    let email = create_rw_signal(initial.email);
    let phone = create_rw_signal(initial.phone);
    let check_in = create_rw_signal(initial.check_in);
    let check_out = create_rw_signal(initial.check_out);
    let guests = create_rw_signal(initial.guests);
    let error = create_rw_signal(None::<String>);
    let pending = booking_action.pending();

    let price = house.price_per_night;
    let capacity = house.max_guests.max(1);
    let house = store_value(house);
    let currency = config::current().currency_symbol;
    let min_date = time::format_date_input(time::today());

    let form_state = move || BookingFormState {
        full_name: full_name.get(),
        email: email.get(),
        phone: phone.get(),
        check_in: check_in.get(),
        check_out: check_out.get(),
        guests: guests.get(),
    };

    create_effect(move |_| {
        if let Some(Ok(_)) = booking_action.value().get() {
            check_in.set(String::new());
            check_out.set(String::new());
            error.set(None);
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let state = form_state();
        match house.with_value(|house| state.validate(house, time::today())) {
            Ok(request) => {
                error.set(None);
                booking_action.dispatch(request);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let quote_currency = currency.clone();
    let quote = move || match form_state().quote(price) {
        Some((nights, total)) => format!(
            "{} × {} = {}",
            format::pluralize(nights, "night", "nights"),
            format::format_money(price, &quote_currency),
            format::format_money(total, &quote_currency)
        ),
        None => "Choose your dates to see the total.".to_string(),
    };

    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=handle_submit>
            <div class="flex items-baseline justify-between">
                <h2 class="text-lg font-semibold text-fg">"Book this house"</h2>
                <span class="text-fg">
                    {format::format_money(price, &currency)}
                    <span class="text-sm text-fg-muted">" / night"</span>
                </span>
            </div>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <DateField label="Check-in" value=check_in min=min_date.clone() />
                <DateField label="Check-out" value=check_out min=min_date />
            </div>
            <TextField label="Full name" value=full_name id="booking-name" autocomplete="name" required=true />
            <TextField label="Email" value=email id="booking-email" input_type="email" autocomplete="email" required=true />
            <TextField label="Phone" value=phone id="booking-phone" input_type="tel" autocomplete="tel" />
            <NumberField
                label=format!("Guests (up to {})", capacity)
                value=guests
                id="booking-guests"
                min="1".to_string()
                max=capacity.to_string()
            />
            <p class="text-sm text-fg-muted" data-testid="booking-quote">{quote}</p>
            {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
            <button
                type="submit"
                class="w-full inline-flex justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                disabled=move || pending.get()
            >
                {move || if pending.get() { "Sending..." } else { "Request booking" }}
            </button>
        </form>
    }
}
