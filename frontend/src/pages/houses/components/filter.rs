use crate::{
    components::forms::{DateField, NumberField, SelectField},
    pages::houses::utils::HouseFilterForm,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn HouseFilterPanel(
    #[prop(into)] categories: Signal<Vec<(String, String)>>,
    #[prop(into)] error: Signal<Option<String>>,
    on_apply: Callback<HouseFilterForm>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let check_in = create_rw_signal(String::new());
    let check_out = create_rw_signal(String::new());
    let min_price = create_rw_signal(String::new());
    let max_price = create_rw_signal(String::new());
    let min_rooms = create_rw_signal(String::new());
    let category_id = create_rw_signal(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_apply.call(HouseFilterForm {
            check_in: check_in.get(),
            check_out: check_out.get(),
            min_price: min_price.get(),
            max_price: max_price.get(),
            min_rooms: min_rooms.get(),
            category_id: category_id.get(),
        });
    };

    let handle_reset = move |_| {
        for field in [check_in, check_out, min_price, max_price, min_rooms, category_id] {
            field.set(String::new());
        }
        on_reset.call(());
    };

    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-4 space-y-4" on:submit=handle_submit>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                <DateField label="Check-in" value=check_in />
                <DateField label="Check-out" value=check_out />
                <SelectField
                    label="Category"
                    value=category_id
                    options=categories
                    placeholder="Any category".to_string()
                    id="filter-category"
                />
                <NumberField label="Min price" value=min_price id="filter-min-price" min="0".to_string() step="0.01" />
                <NumberField label="Max price" value=max_price id="filter-max-price" min="0".to_string() step="0.01" />
                <NumberField label="Rooms (at least)" value=min_rooms id="filter-rooms" min="1".to_string() />
            </div>
            {move || error.get().map(|message| view! {
                <p class="text-sm text-status-error-text" role="alert">{message}</p>
            })}
            <div class="flex gap-2 justify-end">
                <button
                    type="button"
                    class="px-4 py-2 rounded-md text-sm text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                    on:click=handle_reset
                >
                    "Reset"
                </button>
                <button
                    type="submit"
                    class="px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                >
                    "Search"
                </button>
            </div>
        </form>
    }
}
