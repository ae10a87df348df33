use super::{form::HouseEditor, utils::HouseFormState};
use crate::{
    api::{House, HousePayload},
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    config,
    pages::admin::{
        repository::AdminRepository,
        upload::use_upload_action,
        utils::bump,
        AdminShell,
    },
    state::toast::use_toasts,
    utils::format,
};
use leptos::*;

#[component]
pub fn AdminHousesPage() -> impl IntoView {
    view! {
        <AdminShell title="Houses">
            <HousesManager />
        </AdminShell>
    }
}

#[component]
fn HousesManager() -> impl IntoView {
    let repository = AdminRepository::from_context();
    let toasts = use_toasts();
    let reload = create_rw_signal(0u32);
    let editor = create_rw_signal(None::<HouseFormState>);
    let pending_delete = create_rw_signal(None::<House>);

    let repo = repository.clone();
    let houses = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo.clone();
            async move { repo.houses().await }
        },
    );
    let repo = repository.clone();
    let categories = create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { repo.categories().await }
        },
    );
    let repo = repository.clone();
    let advantages = create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { repo.advantages().await }
        },
    );

    let repo = repository.clone();
    let save_action = create_action(move |(id, payload): &(Option<i64>, HousePayload)| {
        let repo = repo.clone();
        let (id, payload) = (*id, payload.clone());
        async move { repo.save_house(id, payload).await }
    });
    let upload_action = use_upload_action();
    let repo = repository;
    let delete_action = create_action(move |id: &i64| {
        let repo = repo.clone();
        let id = *id;
        async move { repo.delete_house(id).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => {
                    toasts.push_success("House saved.");
                    editor.set(None);
                    bump(reload);
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
                Ok(()) => {
                    toasts.push_success("House deleted.");
                    bump(reload);
                }
                Err(err) => {
                    toasts.push_error(err.to_string());
                }
            }
        }
    });

    let category_list = Signal::derive(move || {
        categories
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });
    let advantage_list = Signal::derive(move || {
        advantages
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });
    let on_edit = Callback::new(move |house: House| editor.set(Some(HouseFormState::from_house(&house))));
    let on_delete = Callback::new(move |house: House| pending_delete.set(Some(house)));

    view! {
        <div class="flex justify-end">
            <button
                class="px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                on:click=move |_| editor.set(Some(HouseFormState::default()))
            >
                "New house"
            </button>
        </div>
        {move || {
            editor
                .get()
                .map(|initial| {
                    view! {
                        <HouseEditor
                            initial=initial
                            categories=category_list
                            advantages=advantage_list
                            save_action=save_action
                            upload_action=upload_action
                            on_cancel=Callback::new(move |_: ()| editor.set(None))
                        />
                    }
                })
        }}
        {move || match houses.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
            Some(Ok(list)) => view! { <HousesTable houses=list on_edit=on_edit on_delete=on_delete /> }.into_view(),
        }}
        <ConfirmDialog
            is_open=Signal::derive(move || pending_delete.with(Option::is_some))
            title="Delete house"
            message=Signal::derive(move || {
                pending_delete
                    .get()
                    .map(|house| format!("Delete \"{}\" and its photos? This cannot be undone.", house.name))
                    .unwrap_or_default()
            })
            confirm_label="Delete"
            destructive=true
            pending=delete_action.pending()
            on_confirm=Callback::new(move |_| {
                if let Some(house) = pending_delete.get_untracked() {
                    delete_action.dispatch(house.id);
                }
            })
            on_cancel=Callback::new(move |_| pending_delete.set(None))
        />
    }
}

#[component]
pub fn HousesTable(
    houses: Vec<House>,
    on_edit: Callback<House>,
    on_delete: Callback<House>,
) -> impl IntoView {
    if houses.is_empty() {
        return view! {
            <EmptyState title="No houses yet" description="Add the first listing with the New house button." />
        }
        .into_view();
    }
    let currency = config::current().currency_symbol;
    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
            <table class="min-w-full text-sm">
                <thead class="bg-surface-muted text-left text-fg-muted">
                    <tr>
                        <th class="px-4 py-2">"Name"</th>
                        <th class="px-4 py-2">"Location"</th>
                        <th class="px-4 py-2">"Category"</th>
                        <th class="px-4 py-2 text-right">"Price / night"</th>
                        <th class="px-4 py-2 text-right">"Rooms"</th>
                        <th class="px-4 py-2"></th>
                    </tr>
                </thead>
                <tbody>
                    {houses
                        .into_iter()
                        .map(|house| {
                            let edit = house.clone();
                            let delete = house.clone();
                            view! {
                                <tr class="border-t border-border">
                                    <td class="px-4 py-2 font-medium text-fg">
                                        <a href=format!("/houses/{}", house.id) class="hover:underline">{house.name.clone()}</a>
                                    </td>
                                    <td class="px-4 py-2 text-fg-muted">{house.location.clone()}</td>
                                    <td class="px-4 py-2 text-fg-muted">{house.category_name.clone().unwrap_or_else(|| "–".into())}</td>
                                    <td class="px-4 py-2 text-right">{format::format_money(house.price_per_night, &currency)}</td>
                                    <td class="px-4 py-2 text-right">{house.room_count}</td>
                                    <td class="px-4 py-2 text-right space-x-2 whitespace-nowrap">
                                        <button class="text-link hover:text-link-hover" on:click=move |_| on_edit.call(edit.clone())>"Edit"</button>
                                        <button class="text-status-error-text" on:click=move |_| on_delete.call(delete.clone())>"Delete"</button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}
