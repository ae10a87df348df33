use crate::state::toast::{use_toasts, Toast};
use leptos::*;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let items = toasts.toasts();

    view! {
        <div
            class="fixed bottom-4 right-4 z-[80] flex flex-col gap-2 w-80 max-w-[calc(100vw-2rem)]"
            aria-live="polite"
        >
            <For
                each=move || items.get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            role="status"
                            class=format!(
                                "flex items-start justify-between gap-3 rounded-lg border px-4 py-3 shadow-lg text-sm {}",
                                toast.kind.class()
                            )
                        >
                            <p>{toast.message}</p>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="opacity-70 hover:opacity-100"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
