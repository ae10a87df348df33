use crate::{
    api::{ApiClient, Faq},
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    state::toast::use_toasts,
};
use leptos::*;

#[component]
pub fn FaqPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let toasts = use_toasts();
    let faqs_resource = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.list_faqs().await }
        },
    );
    create_effect(move |_| {
        if let Some(Err(err)) = faqs_resource.get() {
            toasts.push_error(err.to_string());
        }
    });
    let faqs = Signal::derive(move || faqs_resource.get().and_then(Result::ok).unwrap_or_default());

    view! {
        <Layout>
            <div class="max-w-3xl mx-auto space-y-6">
                <h1 class="text-2xl font-bold text-fg">"Frequently asked questions"</h1>
                {move || match faqs_resource.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
                    Some(Ok(list)) if list.is_empty() => view! {
                        <EmptyState title="No questions yet" />
                    }
                    .into_view(),
                    Some(Ok(_)) => view! { <FaqList faqs=faqs /> }.into_view(),
                }}
            </div>
        </Layout>
    }
}

#[component]
pub fn FaqList(#[prop(into)] faqs: Signal<Vec<Faq>>) -> impl IntoView {
    view! {
        <div class="divide-y divide-border rounded-lg border border-border bg-surface-elevated">
            <For
                each=move || faqs.get()
                key=|faq| faq.id
                children=|faq: Faq| view! {
                    <details class="group p-4">
                        <summary class="cursor-pointer font-medium text-fg list-none flex justify-between">
                            {faq.question}
                            <span class="text-fg-muted group-open:rotate-45 transition-transform">"+"</span>
                        </summary>
                        <p class="mt-2 text-sm text-fg-muted whitespace-pre-line">{faq.answer}</p>
                    </details>
                }
            />
        </div>
    }
}
