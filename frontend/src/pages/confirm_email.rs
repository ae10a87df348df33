use crate::{
    api::{ApiClient, ApiError, MessageResponse},
    components::{
        auth_card::{AuthCard, AuthSuccess},
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
};
use leptos::*;
use leptos_router::use_query_map;

/// Both link parameters are required; blank values count as missing.
pub fn confirmation_params(user_id: Option<&str>, token: Option<&str>) -> Option<(String, String)> {
    let user_id = user_id.map(str::trim).filter(|v| !v.is_empty())?;
    let token = token.map(str::trim).filter(|v| !v.is_empty())?;
    Some((user_id.to_string(), token.to_string()))
}

#[component]
pub fn ConfirmEmailPage() -> impl IntoView {
    let query = use_query_map();
    let params = Signal::derive(move || {
        query.with(|q| {
            confirmation_params(
                q.get("userId").map(String::as_str),
                q.get("token").map(String::as_str),
            )
        })
    });
    let api = use_context::<ApiClient>().unwrap_or_default();
    let confirmation = create_resource(
        move || params.get(),
        move |params| {
            let api = api.clone();
            async move {
                let (user_id, token) = params
                    .ok_or_else(|| ApiError::validation("This confirmation link is invalid or incomplete."))?;
                api.confirm_email(&user_id, &token).await
            }
        },
    );

    view! {
        <Layout>
            <ConfirmEmailStatus result=Signal::derive(move || confirmation.get()) />
        </Layout>
    }
}

#[component]
pub fn ConfirmEmailStatus(
    #[prop(into)] result: Signal<Option<Result<MessageResponse, ApiError>>>,
) -> impl IntoView {
    view! {
        <AuthCard title="Email confirmation">
            {move || match result.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Ok(response)) => {
                    let message = if response.message.trim().is_empty() {
                        "Your email address is confirmed. You can sign in now.".to_string()
                    } else {
                        response.message
                    };
                    view! { <AuthSuccess message=message /> }.into_view()
                }
                Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
            }}
        </AuthCard>
    }
}

#[cfg(test)]
mod tests {
    use super::confirmation_params;

    #[test]
    fn requires_both_params() {
        assert_eq!(
            confirmation_params(Some("u1"), Some(" tok ")),
            Some(("u1".to_string(), "tok".to_string()))
        );
        assert_eq!(confirmation_params(Some("u1"), None), None);
        assert_eq!(confirmation_params(Some(" "), Some("tok")), None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn shows_each_state() {
        let html = render_to_string(|| view! { <ConfirmEmailStatus result=Signal::derive(|| None) /> });
        assert!(html.contains("animate-spin"));

        let html = render_to_string(|| {
            view! {
                <ConfirmEmailStatus result=Signal::derive(|| Some(Ok(MessageResponse::default()))) />
            }
        });
        assert!(html.contains("Your email address is confirmed."));

        let html = render_to_string(|| {
            view! {
                <ConfirmEmailStatus result=Signal::derive(|| Some(Err(ApiError::validation("Link expired.")))) />
            }
        });
        assert!(html.contains("Link expired."));
    }
}
