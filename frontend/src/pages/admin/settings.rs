use crate::{
    api::Setting,
    components::layout::{ErrorMessage, LoadingSpinner},
    pages::admin::{
        repository::AdminRepository,
        utils::{MessageBanner, MessageState},
        AdminShell,
    },
};
use leptos::{ev::SubmitEvent, *};
use std::collections::HashSet;

/// Trims keys, drops fully blank rows and rejects empty or repeated keys.
pub fn normalize_settings(rows: &[(String, String)]) -> Result<Vec<Setting>, String> {
    let mut seen = HashSet::new();
    let mut settings = Vec::with_capacity(rows.len());
    for (key, value) in rows {
        let key = key.trim();
        if key.is_empty() {
            if value.trim().is_empty() {
                continue;
            }
            return Err("Every value needs a key.".into());
        }
        if !seen.insert(key.to_lowercase()) {
            return Err(format!("The key \"{}\" is used more than once.", key));
        }
        settings.push(Setting {
            key: key.to_string(),
            value: value.clone(),
        });
    }
    Ok(settings)
}

#[derive(Clone, Copy)]
struct SettingRow {
    key_id: usize,
    key: RwSignal<String>,
    value: RwSignal<String>,
}

impl SettingRow {
    fn new(key_id: usize, setting: Setting) -> Self {
        Self {
            key_id,
            key: create_rw_signal(setting.key),
            value: create_rw_signal(setting.value),
        }
    }
}

#[component]
pub fn AdminSettingsPage() -> impl IntoView {
    view! {
        <AdminShell title="Site settings">
            <SettingsManager />
        </AdminShell>
    }
}

#[component]
fn SettingsManager() -> impl IntoView {
    let repository = AdminRepository::from_context();
    let repo = repository.clone();
    let settings = create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { repo.settings().await }
        },
    );
    let save_action = create_action(move |settings: &Vec<Setting>| {
        let repo = repository.clone();
        let settings = settings.clone();
        async move { repo.save_settings(settings).await }
    });

    view! {
        {move || match settings.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
            Some(Ok(list)) => view! { <SettingsEditor initial=list save_action=save_action /> }.into_view(),
        }}
    }
}

#[component]
pub fn SettingsEditor(
    initial: Vec<Setting>,
    save_action: Action<Vec<Setting>, Result<(), crate::api::ApiError>>,
) -> impl IntoView {
    let next_id = store_value(initial.len());
    let rows = create_rw_signal(
        initial
            .into_iter()
            .enumerate()
            .map(|(key_id, setting)| SettingRow::new(key_id, setting))
            .collect::<Vec<_>>(),
    );
    let messages = create_rw_signal(MessageState::default());
    let saving = save_action.pending();

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => messages.update(|state| state.set_success("Settings saved.")),
                Err(err) => messages.update(|state| state.set_error(err.to_string())),
            }
        }
    });

    let add_row = move |_| {
        let key_id = next_id.get_value();
        next_id.set_value(key_id + 1);
        rows.update(|list| {
            list.push(SettingRow::new(
                key_id,
                Setting {
                    key: String::new(),
                    value: String::new(),
                },
            ))
        });
    };
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let raw: Vec<(String, String)> =
            rows.with(|list| list.iter().map(|row| (row.key.get(), row.value.get())).collect());
        match normalize_settings(&raw) {
            Ok(settings) => {
                messages.update(MessageState::clear);
                save_action.dispatch(settings);
            }
            Err(message) => messages.update(|state| state.set_error(message)),
        }
    };

    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=handle_submit>
            <p class="text-sm text-fg-muted">
                "Contact details and texts shown across the public site. Keys are case-insensitive."
            </p>
            <div class="space-y-2">
                <For
                    each=move || rows.get()
                    key=|row| row.key_id
                    children=move |row: SettingRow| {
                        let key_id = row.key_id;
                        view! {
                            <div class="flex gap-2">
                                <input
                                    class="w-1/3 rounded-md border border-form-control-border bg-form-control-bg px-3 py-1.5 text-sm font-mono text-fg"
                                    placeholder="key"
                                    aria-label="Key"
                                    prop:value=move || row.key.get()
                                    on:input=move |ev| row.key.set(event_target_value(&ev))
                                />
                                <input
                                    class="flex-1 rounded-md border border-form-control-border bg-form-control-bg px-3 py-1.5 text-sm text-fg"
                                    placeholder="value"
                                    aria-label="Value"
                                    prop:value=move || row.value.get()
                                    on:input=move |ev| row.value.set(event_target_value(&ev))
                                />
                                <button
                                    type="button"
                                    aria-label="Remove setting"
                                    class="px-2 text-status-error-text"
                                    on:click=move |_| rows.update(|list| list.retain(|existing| existing.key_id != key_id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
            <button type="button" class="text-sm text-link hover:text-link-hover" on:click=add_row>
                "+ Add setting"
            </button>
            <MessageBanner messages=messages />
            <div class="flex justify-end">
                <button
                    type="submit"
                    class="px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    disabled=move || saving.get()
                >
                    {move || if saving.get() { "Saving..." } else { "Save settings" }}
                </button>
            </div>
        </form>
    }
}
