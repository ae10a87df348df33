use leptos::*;

/// Centered card used by the sign-in and account recovery screens.
#[component]
pub fn AuthCard(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">{title}</h2>
                    {subtitle.map(|text| view! { <p class="mt-2 text-center text-sm text-fg-muted">{text}</p> })}
                </div>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn AuthSuccess(
    #[prop(into)] message: String,
    #[prop(default = "/login")] link_href: &'static str,
    #[prop(default = "Go to sign in")] link_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="rounded-md bg-status-success-bg p-4 text-status-success-text space-y-3" role="status">
            <p class="text-sm font-medium">{message}</p>
            <a href=link_href class="inline-block text-sm font-semibold underline">{link_label}</a>
        </div>
    }
}
