use super::{
    components::form::LoginForm,
    utils::validate_credentials,
    view_model::use_login_view_model,
};
use crate::{api::LoginRequest, components::layout::Layout, utils::navigation};
use leptos::{ev::SubmitEvent, *};
use leptos_router::use_query_map;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let query = use_query_map();
    let redirect_to = Signal::derive(move || {
        query.with(|query| navigation::safe_redirect_target(query.get("redirect").map(String::as_str)))
    });
    let vm = use_login_view_model(redirect_to);
    let form = vm.form;
    let error = vm.error;
    let login_action = vm.login_action;
    let pending = login_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email = form.email.get_untracked();
        let password = form.password.get_untracked();
        if let Err(err) = validate_credentials(&email, &password) {
            error.set(Some(err));
            return;
        }
        error.set(None);
        login_action.dispatch(LoginRequest {
            email: email.trim().to_string(),
            password,
        });
    });

    view! {
        <Layout>
            <LoginForm form=form error=error pending=pending on_submit=handle_submit />
        </Layout>
    }
}
