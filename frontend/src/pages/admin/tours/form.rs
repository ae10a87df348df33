use super::utils::{PackageRow, TourFormState};
use crate::{
    api::{ApiError, TourPayload},
    components::{
        forms::{DateField, NumberField, TextAreaField, TextField},
        layout::ErrorMessage,
    },
    pages::admin::upload::{ImagePicker, UploadAction},
};
use leptos::{ev::SubmitEvent, *};

/// Editable package row; `key` keeps inputs stable while rows come and go.
#[derive(Clone, Copy)]
struct PackageSignals {
    key: usize,
    id: Option<i64>,
    name: RwSignal<String>,
    price: RwSignal<String>,
    description: RwSignal<String>,
}

impl PackageSignals {
    fn new(key: usize, row: PackageRow) -> Self {
        Self {
            key,
            id: row.id,
            name: create_rw_signal(row.name),
            price: create_rw_signal(row.price),
            description: create_rw_signal(row.description),
        }
    }

    fn snapshot(&self) -> PackageRow {
        PackageRow {
            id: self.id,
            name: self.name.get(),
            price: self.price.get(),
            description: self.description.get(),
        }
    }
}

#[component]
pub fn TourEditor(
    initial: TourFormState,
    save_action: Action<(Option<i64>, TourPayload), Result<(), ApiError>>,
    upload_action: UploadAction,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let id = initial.id;
    let heading = if initial.is_new() { "New tour" } else { "Edit tour" };
    let title = create_rw_signal(initial.title);
    let description = create_rw_signal(initial.description);
    let destination = create_rw_signal(initial.destination);
    let duration = create_rw_signal(initial.duration_days);
    let start_date = create_rw_signal(initial.start_date);
    let images = create_rw_signal(initial.images);
    let next_key = store_value(initial.packages.len());
    let packages = create_rw_signal(
        initial
            .packages
            .into_iter()
            .enumerate()
            .map(|(key, row)| PackageSignals::new(key, row))
            .collect::<Vec<_>>(),
    );
    let error = create_rw_signal(None::<String>);
    let saving = save_action.pending();

    let add_package = move |_| {
        let key = next_key.get_value();
        next_key.set_value(key + 1);
        packages.update(|rows| rows.push(PackageSignals::new(key, PackageRow::default())));
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let state = TourFormState {
            id,
            title: title.get(),
            description: description.get(),
            destination: destination.get(),
            duration_days: duration.get(),
            start_date: start_date.get(),
            images: images.get(),
            packages: packages.with(|rows| rows.iter().map(PackageSignals::snapshot).collect()),
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
                <TextField label="Title" value=title id="tour-title" required=true />
                <TextField label="Destination" value=destination id="tour-destination" required=true />
                <NumberField label="Duration (days)" value=duration id="tour-duration" min="1".to_string() required=true />
                <DateField label="Start date" value=start_date />
            </div>
            <TextAreaField label="Description" value=description id="tour-description" rows=5 />

            <fieldset class="space-y-3">
                <legend class="text-sm font-medium text-fg-muted">"Packages"</legend>
                <For
                    each=move || packages.get()
                    key=|row| row.key
                    children=move |row: PackageSignals| {
                        let key = row.key;
                        view! {
                            <div class="grid grid-cols-1 gap-2 sm:grid-cols-[2fr_1fr_3fr_auto] items-end">
                                <TextField label="Package name" value=row.name />
                                <NumberField label="Price" value=row.price min="0".to_string() step="0.01" />
                                <TextField label="Includes" value=row.description />
                                <button
                                    type="button"
                                    class="px-3 py-2 text-sm text-status-error-text"
                                    on:click=move |_| packages.update(|rows| rows.retain(|existing| existing.key != key))
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    }
                />
                <button type="button" class="text-sm text-link hover:text-link-hover" on:click=add_package>
                    "+ Add package"
                </button>
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
                    disabled=move || saving.get() || upload_action.pending().get()
                >
                    {move || if saving.get() { "Saving..." } else { "Save tour" }}
                </button>
            </div>
        </form>
    }
}
