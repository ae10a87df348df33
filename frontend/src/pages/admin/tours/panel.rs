use super::{form::TourEditor, utils::TourFormState};
use crate::{
    api::{Tour, TourPayload},
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
    utils::{format, time},
};
use leptos::*;

#[component]
pub fn AdminToursPage() -> impl IntoView {
    view! {
        <AdminShell title="Tours">
            <ToursManager />
        </AdminShell>
    }
}

#[component]
fn ToursManager() -> impl IntoView {
    let repository = AdminRepository::from_context();
    let toasts = use_toasts();
    let reload = create_rw_signal(0u32);
    let editor = create_rw_signal(None::<TourFormState>);
    let pending_delete = create_rw_signal(None::<Tour>);

    let repo = repository.clone();
    let tours = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo.clone();
            async move { repo.tours().await }
        },
    );
    let repo = repository.clone();
    let save_action = create_action(move |(id, payload): &(Option<i64>, TourPayload)| {
        let repo = repo.clone();
        let (id, payload) = (*id, payload.clone());
        async move { repo.save_tour(id, payload).await }
    });
    let repo = repository;
    let delete_action = create_action(move |id: &i64| {
        let repo = repo.clone();
        let id = *id;
        async move { repo.delete_tour(id).await }
    });
    let upload_action = use_upload_action();

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => {
                    toasts.push_success("Tour saved.");
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
                    toasts.push_success("Tour deleted.");
                    bump(reload);
                }
                Err(err) => {
                    toasts.push_error(err.to_string());
                }
            }
        }
    });

    let on_edit = Callback::new(move |tour: Tour| editor.set(Some(TourFormState::from_tour(&tour))));
    let on_delete = Callback::new(move |tour: Tour| pending_delete.set(Some(tour)));

    view! {
        <div class="flex justify-end">
            <button
                class="px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                on:click=move |_| editor.set(Some(TourFormState::blank()))
            >
                "New tour"
            </button>
        </div>
        {move || {
            editor.get().map(|initial| {
                view! {
                    <TourEditor
                        initial=initial
                        save_action=save_action
                        upload_action=upload_action
                        on_cancel=Callback::new(move |_: ()| editor.set(None))
                    />
                }
            })
        }}
        {move || match tours.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
            Some(Ok(list)) => view! { <ToursTable tours=list on_edit=on_edit on_delete=on_delete /> }.into_view(),
        }}
        <ConfirmDialog
            is_open=Signal::derive(move || pending_delete.with(Option::is_some))
            title="Delete tour"
            message=Signal::derive(move || {
                pending_delete
                    .get()
                    .map(|tour| format!("Delete \"{}\" with all its packages?", tour.title))
                    .unwrap_or_default()
            })
            confirm_label="Delete"
            destructive=true
            pending=delete_action.pending()
            on_confirm=Callback::new(move |_| {
                if let Some(tour) = pending_delete.get_untracked() {
                    delete_action.dispatch(tour.id);
                }
            })
            on_cancel=Callback::new(move |_| pending_delete.set(None))
        />
    }
}

#[component]
pub fn ToursTable(tours: Vec<Tour>, on_edit: Callback<Tour>, on_delete: Callback<Tour>) -> impl IntoView {
    if tours.is_empty() {
        return view! { <EmptyState title="No tours yet" description="Create a tour and give it at least one package." /> }
            .into_view();
    }
    let currency = config::current().currency_symbol;
    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
            <table class="min-w-full text-sm">
                <thead class="bg-surface-muted text-left text-fg-muted">
                    <tr>
                        <th class="px-4 py-2">"Title"</th>
                        <th class="px-4 py-2">"Destination"</th>
                        <th class="px-4 py-2">"Starts"</th>
                        <th class="px-4 py-2 text-right">"Days"</th>
                        <th class="px-4 py-2 text-right">"From"</th>
                        <th class="px-4 py-2"></th>
                    </tr>
                </thead>
                <tbody>
                    {tours
                        .into_iter()
                        .map(|tour| {
                            let from = tour
                                .starting_price()
                                .map(|price| format::format_money(price, &currency))
                                .unwrap_or_else(|| "–".into());
                            let starts = tour.start_date.map(time::format_date).unwrap_or_else(|| "Flexible".into());
                            let edit = tour.clone();
                            let delete = tour.clone();
                            view! {
                                <tr class="border-t border-border">
                                    <td class="px-4 py-2 font-medium text-fg">
                                        <a href=format!("/tours/{}", tour.id) class="hover:underline">{tour.title.clone()}</a>
                                    </td>
                                    <td class="px-4 py-2 text-fg-muted">{tour.destination.clone()}</td>
                                    <td class="px-4 py-2 text-fg-muted">{starts}</td>
                                    <td class="px-4 py-2 text-right">{tour.duration_days}</td>
                                    <td class="px-4 py-2 text-right">{from}</td>
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
