use crate::{
    api::{Advantage, AdvantagePayload, ApiError, Category, CategoryPayload},
    components::{confirm_dialog::ConfirmDialog, layout::LoadingSpinner},
    pages::admin::{repository::AdminRepository, utils::bump, AdminShell},
    state::toast::use_toasts,
    utils::validation,
};
use leptos::{ev::SubmitEvent, *};

/// Row shared by the category and advantage lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogEntry {
    pub id: i64,
    pub name: String,
    pub icon: Option<String>,
}

impl From<Category> for CatalogEntry {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            icon: None,
        }
    }
}

impl From<Advantage> for CatalogEntry {
    fn from(advantage: Advantage) -> Self {
        Self {
            id: advantage.id,
            name: advantage.name,
            icon: advantage.icon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Category,
    Advantage,
}

impl CatalogKind {
    fn noun(&self) -> &'static str {
        match self {
            CatalogKind::Category => "category",
            CatalogKind::Advantage => "amenity",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            CatalogKind::Category => "Category",
            CatalogKind::Advantage => "Amenity",
        }
    }
}

/// Names are required and unique (case-insensitive) within one list.
pub fn validate_entry(
    entries: &[CatalogEntry],
    id: Option<i64>,
    name: &str,
    icon: &str,
) -> Result<(String, Option<String>), String> {
    let name = validation::non_blank(name).ok_or("Name is required.")?;
    let duplicate = entries
        .iter()
        .any(|entry| Some(entry.id) != id && entry.name.eq_ignore_ascii_case(&name));
    if duplicate {
        return Err(format!("\"{}\" already exists.", name));
    }
    Ok((name, validation::non_blank(icon)))
}

type SaveRequest = (Option<i64>, String, Option<String>);

#[component]
pub fn AdminCategoriesPage() -> impl IntoView {
    view! {
        <AdminShell title="Categories and amenities">
            <CatalogManager />
        </AdminShell>
    }
}

#[component]
fn CatalogManager() -> impl IntoView {
    let repository = AdminRepository::from_context();
    let toasts = use_toasts();
    let categories_version = create_rw_signal(0u32);
    let advantages_version = create_rw_signal(0u32);
    let pending_delete = create_rw_signal(None::<(CatalogKind, CatalogEntry)>);

    let repo = repository.clone();
    let categories = create_resource(
        move || categories_version.get(),
        move |_| {
            let repo = repo.clone();
            async move { repo.categories().await }
        },
    );
    let repo = repository.clone();
    let advantages = create_resource(
        move || advantages_version.get(),
        move |_| {
            let repo = repo.clone();
            async move { repo.advantages().await }
        },
    );

    let repo = repository.clone();
    let save_action = create_action(move |(kind, (id, name, icon)): &(CatalogKind, SaveRequest)| {
        let repo = repo.clone();
        let (kind, id, name, icon) = (*kind, *id, name.clone(), icon.clone());
        async move {
            let result = match kind {
                CatalogKind::Category => repo.save_category(id, CategoryPayload { name }).await,
                CatalogKind::Advantage => repo.save_advantage(id, AdvantagePayload { name, icon }).await,
            };
            result.map(|_| kind)
        }
    });
    let repo = repository;
    let delete_action = create_action(move |(kind, id): &(CatalogKind, i64)| {
        let repo = repo.clone();
        let (kind, id) = (*kind, *id);
        async move {
            let result = match kind {
                CatalogKind::Category => repo.delete_category(id).await,
                CatalogKind::Advantage => repo.delete_advantage(id).await,
            };
            result.map(|_| kind)
        }
    });

    let refresh = move |kind: CatalogKind| match kind {
        CatalogKind::Category => bump(categories_version),
        CatalogKind::Advantage => bump(advantages_version),
    };
    let report = move |result: Result<CatalogKind, ApiError>, verb: &str| match result {
        Ok(kind) => {
            toasts.push_success(format!("{} {}.", kind.title(), verb));
            refresh(kind);
        }
        Err(err) => {
            toasts.push_error(err.to_string());
        }
    };
    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            report(result, "saved");
        }
    });
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            pending_delete.set(None);
            report(result, "deleted");
        }
    });

    let category_entries = Signal::derive(move || {
        categories
            .get()
            .and_then(Result::ok)
            .map(|list| list.into_iter().map(CatalogEntry::from).collect())
            .unwrap_or_default()
    });
    let advantage_entries = Signal::derive(move || {
        advantages
            .get()
            .and_then(Result::ok)
            .map(|list| list.into_iter().map(CatalogEntry::from).collect())
            .unwrap_or_default()
    });
    let saving = Signal::derive(move || save_action.pending().get());
    let request_delete = move |kind: CatalogKind| {
        Callback::new(move |entry: CatalogEntry| pending_delete.set(Some((kind, entry))))
    };

    view! {
        <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
            <Suspense fallback=|| view! { <LoadingSpinner /> }>
                <CatalogSection
                    title="House categories"
                    kind=CatalogKind::Category
                    entries=category_entries
                    version=categories_version
                    saving=saving
                    on_save=Callback::new(move |request| save_action.dispatch((CatalogKind::Category, request)))
                    on_delete=request_delete(CatalogKind::Category)
                />
                <CatalogSection
                    title="Amenities"
                    kind=CatalogKind::Advantage
                    entries=advantage_entries
                    version=advantages_version
                    saving=saving
                    on_save=Callback::new(move |request| save_action.dispatch((CatalogKind::Advantage, request)))
                    on_delete=request_delete(CatalogKind::Advantage)
                />
            </Suspense>
        </div>
        <ConfirmDialog
            is_open=Signal::derive(move || pending_delete.with(Option::is_some))
            title="Delete entry"
            message=Signal::derive(move || {
                pending_delete
                    .get()
                    .map(|(kind, entry)| format!("Delete the {} \"{}\"? Houses using it will lose it.", kind.noun(), entry.name))
                    .unwrap_or_default()
            })
            confirm_label="Delete"
            destructive=true
            pending=delete_action.pending()
            on_confirm=Callback::new(move |_| {
                if let Some((kind, entry)) = pending_delete.get_untracked() {
                    delete_action.dispatch((kind, entry.id));
                }
            })
            on_cancel=Callback::new(move |_| pending_delete.set(None))
        />
    }
}

#[component]
pub fn CatalogSection(
    #[prop(into)] title: String,
    kind: CatalogKind,
    #[prop(into)] entries: Signal<Vec<CatalogEntry>>,
    /// Bumped after every successful change; clears drafts.
    #[prop(into)] version: Signal<u32>,
    #[prop(into)] saving: Signal<bool>,
    on_save: Callback<SaveRequest>,
    on_delete: Callback<CatalogEntry>,
) -> impl IntoView {
    let with_icon = kind == CatalogKind::Advantage;
    let new_name = create_rw_signal(String::new());
    let new_icon = create_rw_signal(String::new());
    let editing = create_rw_signal(None::<i64>);
    let edit_name = create_rw_signal(String::new());
    let edit_icon = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    create_effect(move |previous: Option<u32>| {
        let current = version.get();
        if previous.is_some_and(|previous| previous != current) {
            new_name.set(String::new());
            new_icon.set(String::new());
            editing.set(None);
        }
        current
    });

    let submit = move |id: Option<i64>, name: String, icon: String| {
        let validated = entries.with(|list| validate_entry(list, id, &name, &icon));
        match validated {
            Ok((name, icon)) => {
                error.set(None);
                on_save.call((id, name, if with_icon { icon } else { None }));
            }
            Err(message) => error.set(Some(message)),
        }
    };
    let handle_add = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit(None, new_name.get(), new_icon.get());
    };

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">{title}</h2>
            <form class="flex flex-wrap gap-2" on:submit=handle_add>
                <input
                    class="flex-1 rounded-md border border-form-control-border bg-form-control-bg px-3 py-1.5 text-sm text-fg"
                    placeholder=format!("New {}", kind.noun())
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <Show when=move || with_icon>
                    <input
                        class="w-32 rounded-md border border-form-control-border bg-form-control-bg px-3 py-1.5 text-sm text-fg"
                        placeholder="Icon"
                        prop:value=move || new_icon.get()
                        on:input=move |ev| new_icon.set(event_target_value(&ev))
                    />
                </Show>
                <button
                    type="submit"
                    class="px-3 py-1.5 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    disabled=move || saving.get()
                >
                    "Add"
                </button>
            </form>
            {move || error.get().map(|message| view! { <p class="text-sm text-status-error-text">{message}</p> })}
            <ul class="divide-y divide-border">
                <For
                    each=move || entries.get()
                    key=|entry| entry.clone()
                    children=move |entry: CatalogEntry| {
                        let id = entry.id;
                        let start_edit = {
                            let entry = entry.clone();
                            move |_| {
                                edit_name.set(entry.name.clone());
                                edit_icon.set(entry.icon.clone().unwrap_or_default());
                                editing.set(Some(entry.id));
                            }
                        };
                        let delete_entry = entry.clone();
                        view! {
                            <li class="py-2 flex items-center gap-2 text-sm">
                                <Show
                                    when=move || editing.get() == Some(id)
                                    fallback={
                                        let entry = entry.clone();
                                        move || view! {
                                            <span class="flex-1 text-fg">
                                                {entry.icon.clone().map(|icon| view! { <span class="mr-2 text-fg-muted">{icon}</span> })}
                                                {entry.name.clone()}
                                            </span>
                                        }
                                    }
                                >
                                    <input
                                        class="flex-1 rounded-md border border-form-control-border bg-form-control-bg px-2 py-1 text-sm text-fg"
                                        prop:value=move || edit_name.get()
                                        on:input=move |ev| edit_name.set(event_target_value(&ev))
                                    />
                                    <Show when=move || with_icon>
                                        <input
                                            class="w-24 rounded-md border border-form-control-border bg-form-control-bg px-2 py-1 text-sm text-fg"
                                            prop:value=move || edit_icon.get()
                                            on:input=move |ev| edit_icon.set(event_target_value(&ev))
                                        />
                                    </Show>
                                    <button
                                        class="text-link hover:text-link-hover"
                                        on:click=move |_| submit(Some(id), edit_name.get(), edit_icon.get())
                                    >
                                        "Save"
                                    </button>
                                    <button class="text-fg-muted" on:click=move |_| editing.set(None)>"Cancel"</button>
                                </Show>
                                <Show when=move || editing.get() != Some(id)>
                                    <button class="text-link hover:text-link-hover" on:click=start_edit.clone()>"Edit"</button>
                                    <button
                                        class="text-status-error-text"
                                        on:click={
                                            let entry = delete_entry.clone();
                                            move |_| on_delete.call(entry.clone())
                                        }
                                    >
                                        "Delete"
                                    </button>
                                </Show>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn section_lists_entries_with_icons() {
        let html = render_to_string(|| {
            let entries = vec![CatalogEntry { id: 3, name: "Sauna".into(), icon: Some("hot".into()) }];
            view! {
                <CatalogSection
                    title="Amenities"
                    kind=CatalogKind::Advantage
                    entries=Signal::derive(move || entries.clone())
                    version=Signal::derive(|| 0)
                    saving=Signal::derive(|| false)
                    on_save=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Sauna"));
        assert!(html.contains("hot"));
        assert!(html.contains("New amenity"));
    }
}
