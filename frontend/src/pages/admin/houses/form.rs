use super::utils::{toggle_id, HouseFormState};
use crate::{
    api::{Advantage, ApiError, Category, HousePayload},
    components::{
        forms::{NumberField, SelectField, TextAreaField, TextField},
        layout::ErrorMessage,
    },
    pages::admin::upload::{ImagePicker, UploadAction},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn HouseEditor(
    initial: HouseFormState,
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(into)] advantages: Signal<Vec<Advantage>>,
    save_action: Action<(Option<i64>, HousePayload), Result<(), ApiError>>,
    upload_action: UploadAction,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let id = initial.id;
    let heading = if initial.is_new() { "New house" } else { "Edit house" };
    let name = create_rw_signal(initial.name);
    let description = create_rw_signal(initial.description);
    let location = create_rw_signal(initial.location);
    let price = create_rw_signal(initial.price_per_night);
    let rooms = create_rw_signal(initial.room_count);
    let guests = create_rw_signal(initial.max_guests);
    let category = create_rw_signal(initial.category_id);
    let selected_advantages = create_rw_signal(initial.advantage_ids);
    let images = create_rw_signal(initial.images);
    let error = create_rw_signal(None::<String>);
    let saving = save_action.pending();
    let uploading = upload_action.pending();

    let category_options = Signal::derive(move || {
        categories
            .get()
            .into_iter()
            .map(|category| (category.id.to_string(), category.name))
            .collect::<Vec<_>>()
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let state = HouseFormState {
            id,
            name: name.get(),
            description: description.get(),
            location: location.get(),
            price_per_night: price.get(),
            room_count: rooms.get(),
            max_guests: guests.get(),
            category_id: category.get(),
            advantage_ids: selected_advantages.get(),
            images: images.get(),
        };
        match state.to_payload() {
            Ok(payload) => {
                error.set(None);
                save_action.dispatch((id, payload));
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=handle_submit>
            <h2 class="text-lg font-semibold text-fg">{heading}</h2>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                <TextField label="Name" value=name id="house-name" required=true />
                <TextField label="Location" value=location id="house-location" required=true />
                <NumberField label="Price per night" value=price id="house-price" min="0".to_string() step="0.01" required=true />
                <SelectField label="Category" value=category options=category_options placeholder="No category".to_string() id="house-category" />
                <NumberField label="Rooms" value=rooms id="house-rooms" min="1".to_string() required=true />
                <NumberField label="Max guests" value=guests id="house-guests" min="1".to_string() required=true />
            </div>
            <TextAreaField label="Description" value=description id="house-description" rows=5 />

            <fieldset class="space-y-2">
                <legend class="text-sm font-medium text-fg-muted">"Amenities"</legend>
                <div class="flex flex-wrap gap-3">
                    <For
                        each=move || advantages.get()
                        key=|advantage| advantage.id
                        children=move |advantage: Advantage| {
                            let advantage_id = advantage.id;
                            view! {
                                <label class="inline-flex items-center gap-2 text-sm text-fg">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selected_advantages.with(|ids| ids.contains(&advantage_id))
                                        on:change=move |_| selected_advantages.update(|ids| toggle_id(ids, advantage_id))
                                    />
                                    {advantage.name}
                                </label>
                            }
                        }
                    />
                </div>
            </fieldset>

            <ImagePicker images=images upload_action=upload_action error=error />

            {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="px-4 py-2 rounded-md text-sm text-fg-muted hover:bg-action-ghost-bg-hover"
                    on:click=move |_| on_cancel.call(())
                >
                    "Cancel"
                </button>
                <button
                    type="submit"
                    class="px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    disabled=move || saving.get() || uploading.get()
                >
                    {move || if saving.get() { "Saving..." } else { "Save house" }}
                </button>
            </div>
        </form>
    }
}
