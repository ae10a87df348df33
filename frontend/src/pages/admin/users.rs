use crate::{
    api::User,
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::admin::{repository::AdminRepository, AdminShell},
    state::{auth::use_auth, toast::use_toasts},
    utils::time,
};
use leptos::*;

pub const ROLES: [&str; 2] = ["User", "Admin"];

pub fn set_role(users: &mut [User], id: &str, role: &str) {
    if let Some(user) = users.iter_mut().find(|user| user.id == id) {
        user.role = role.to_string();
    }
}

/// Admins first, then alphabetical by e-mail.
pub fn sort_users(mut users: Vec<User>) -> Vec<User> {
    users.sort_by(|a, b| {
        let a_admin = a.role.eq_ignore_ascii_case("admin");
        let b_admin = b.role.eq_ignore_ascii_case("admin");
        b_admin
            .cmp(&a_admin)
            .then_with(|| a.email.to_lowercase().cmp(&b.email.to_lowercase()))
    });
    users
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <AdminShell title="Users">
            <UsersManager />
        </AdminShell>
    }
}

#[component]
fn UsersManager() -> impl IntoView {
    let repository = AdminRepository::from_context();
    let toasts = use_toasts();
    let (auth, _) = use_auth();
    let rows = create_rw_signal(Vec::<User>::new());
    let pending_delete = create_rw_signal(None::<User>);

    let repo = repository.clone();
    let users = create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { repo.users().await.map(sort_users) }
        },
    );
    create_effect(move |_| {
        if let Some(Ok(list)) = users.get() {
            rows.set(list);
        }
    });

    let repo = repository.clone();
    let role_action = create_action(move |(id, role): &(String, String)| {
        let repo = repo.clone();
        let (id, role) = (id.clone(), role.clone());
        async move {
            repo.set_user_role(id.clone(), role.clone())
                .await
                .map(|_| (id, role))
        }
    });
    let repo = repository;
    let delete_action = create_action(move |id: &String| {
        let repo = repo.clone();
        let id = id.clone();
        async move { repo.delete_user(id.clone()).await.map(|_| id) }
    });

    create_effect(move |_| {
        if let Some(result) = role_action.value().get() {
            match result {
                Ok((id, role)) => {
                    rows.update(|list| set_role(list, &id, &role));
                    toasts.push_success(format!("Role changed to {}.", role));
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
                    rows.update(|list| list.retain(|user| user.id != id));
                    toasts.push_success("User deleted.");
                }
                Err(err) => {
                    toasts.push_error(err.to_string());
                }
            }
        }
    });

    let current_user_id = Signal::derive(move || {
        auth.with(|state| state.user.as_ref().map(|user| user.id.clone()))
    });

    view! {
        {move || match users.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
            Some(Ok(_)) => view! {
                <UsersTable
                    users=rows
                    current_user_id=current_user_id
                    on_role=Callback::new(move |change| role_action.dispatch(change))
                    on_delete=Callback::new(move |user| pending_delete.set(Some(user)))
                />
            }
            .into_view(),
        }}
        <ConfirmDialog
            is_open=Signal::derive(move || pending_delete.with(Option::is_some))
            title="Delete user"
            message=Signal::derive(move || {
                pending_delete
                    .get()
                    .map(|user| format!("Delete the account {}? Their bookings stay on record.", user.email))
                    .unwrap_or_default()
            })
            confirm_label="Delete"
            destructive=true
            pending=delete_action.pending()
            on_confirm=Callback::new(move |_| {
                if let Some(user) = pending_delete.get_untracked() {
                    delete_action.dispatch(user.id);
                }
            })
            on_cancel=Callback::new(move |_| pending_delete.set(None))
        />
    }
}

/// The signed-in admin cannot demote or delete their own account here.
#[component]
pub fn UsersTable(
    #[prop(into)] users: Signal<Vec<User>>,
    #[prop(into)] current_user_id: Signal<Option<String>>,
    on_role: Callback<(String, String)>,
    on_delete: Callback<User>,
) -> impl IntoView {
    view! {
        <Show
            when=move || users.with(|list| !list.is_empty())
            fallback=|| view! { <EmptyState title="No users" /> }
        >
            <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
                <table class="min-w-full text-sm">
                    <thead class="bg-surface-muted text-left text-fg-muted">
                        <tr>
                            <th class="px-4 py-2">"Name"</th>
                            <th class="px-4 py-2">"E-mail"</th>
                            <th class="px-4 py-2">"Joined"</th>
                            <th class="px-4 py-2">"Role"</th>
                            <th class="px-4 py-2"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || users.get()
                            key=|user| (user.id.clone(), user.role.clone())
                            children=move |user: User| {
                                let is_self = current_user_id.get_untracked().as_deref() == Some(user.id.as_str());
                                let id = user.id.clone();
                                let role = user.role.clone();
                                let delete = user.clone();
                                view! {
                                    <tr class="border-t border-border">
                                        <td class="px-4 py-2 font-medium text-fg">
                                            {if user.full_name.is_empty() { "–".to_string() } else { user.full_name.clone() }}
                                            {is_self.then(|| view! { <span class="ml-1 text-xs text-fg-muted">"(you)"</span> })}
                                        </td>
                                        <td class="px-4 py-2">
                                            {user.email.clone()}
                                            {(!user.email_confirmed).then(|| view! {
                                                <span class="ml-2 rounded-full px-2 py-0.5 text-xs bg-status-warning-bg text-status-warning-text">"unconfirmed"</span>
                                            })}
                                        </td>
                                        <td class="px-4 py-2 text-fg-muted">
                                            {user.created_at.map(|at| time::format_date(at.date_naive())).unwrap_or_else(|| "–".into())}
                                        </td>
                                        <td class="px-4 py-2">
                                            <select
                                                class="rounded-md border border-form-control-border bg-form-control-bg px-2 py-1 text-sm text-fg disabled:opacity-50"
                                                disabled=is_self
                                                on:change=move |ev| on_role.call((id.clone(), event_target_value(&ev)))
                                            >
                                                {ROLES
                                                    .iter()
                                                    .map(|option| {
                                                        let selected = option.eq_ignore_ascii_case(&role);
                                                        view! { <option value=*option selected=selected>{*option}</option> }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </td>
                                        <td class="px-4 py-2 text-right">
                                            <Show when=move || !is_self>
                                                <button
                                                    class="text-status-error-text"
                                                    on:click={
                                                        let user = delete.clone();
                                                        move |_| on_delete.call(user.clone())
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
