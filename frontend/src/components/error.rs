use crate::api::ApiError;
use leptos::*;

const GENERIC_CODES: [&str; 3] = ["UNKNOWN", "VALIDATION_ERROR", "REQUEST_FAILED"];

/// Field messages carried in `details.errors`, if any.
pub fn validation_messages(error: &ApiError) -> Vec<String> {
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
            >
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .map(|e| {
                            let messages = validation_messages(&e);
                            if !messages.is_empty() {
                                view! {
                                    <ul class="list-disc list-inside text-sm">
                                        {messages
                                            .into_iter()
                                            .map(|message| view! { <li>{message}</li> })
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_view()
                            } else if !e.code.is_empty() && !GENERIC_CODES.contains(&e.code.as_str()) {
                                view! { <div class="text-xs opacity-75">{"Code: "}{e.code}</div> }
                                    .into_view()
                            } else {
                                ().into_view()
                            }
                        })
                        .unwrap_or_else(|| ().into_view())
                }}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn validation_messages_reads_details() {
        let error = ApiError {
            error: "Validation failed".into(),
            code: "VALIDATION_ERROR".into(),
            details: Some(json!({ "errors": ["Email is taken"] })),
        };
        assert_eq!(validation_messages(&error), vec!["Email is taken".to_string()]);
        assert!(validation_messages(&ApiError::unknown("x")).is_empty());
    }

    #[test]
    fn inline_error_renders_validation_details() {
        let html = render_to_string(move || {
            let error = ApiError {
                error: "One or more validation errors occurred.".into(),
                code: "VALIDATION_ERROR".into(),
                details: Some(json!({
                    "errors": ["Full name is required", "Email is invalid"]
                })),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("One or more validation errors occurred."));
        assert!(html.contains("Full name is required"));
        assert!(html.contains("Email is invalid"));
    }

    #[test]
    fn inline_error_shows_specific_codes_only() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::from_status(409)));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Code: CONFLICT"));

        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::request_failed("offline")));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(!html.contains("Code:"));
    }
}
