use super::utils::{bar_width, compute_stats, recent_bookings, DashboardStats, RECENT_BOOKINGS};
use crate::{
    api::Booking,
    components::{
        cards::StatCard,
        layout::{ErrorMessage, LoadingSpinner},
    },
    config,
    pages::admin::{repository::AdminRepository, AdminShell},
    state::toast::use_toasts,
    utils::{format, time},
};
use leptos::*;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <AdminShell title="Dashboard">
            <DashboardLoader />
        </AdminShell>
    }
}

#[component]
fn DashboardLoader() -> impl IntoView {
    let repository = AdminRepository::from_context();
    let toasts = use_toasts();
    let bookings = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move { repo.bookings().await }
        },
    );
    create_effect(move |_| {
        if let Some(Err(err)) = bookings.get() {
            toasts.push_error(err.to_string());
        }
    });

    view! {
        {move || match bookings.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
            Some(Ok(list)) => view! { <DashboardView bookings=list /> }.into_view(),
        }}
    }
}

#[component]
pub fn DashboardView(bookings: Vec<Booking>) -> impl IntoView {
    let currency = config::current().currency_symbol;
    let DashboardStats {
        total_bookings,
        pending,
        confirmed,
        canceled,
        total_revenue,
        average_booking_value,
        monthly,
        top_houses,
    } = compute_stats(&bookings);
    let recent = recent_bookings(&bookings, RECENT_BOOKINGS);
    let money = {
        let currency = currency.clone();
        move |amount: f64| format::format_money(amount, &currency)
    };
    let best_month = monthly.iter().map(|m| m.revenue).fold(0.0_f64, f64::max);

    view! {
        <div class="space-y-8">
            <dl class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                <StatCard title="Revenue" value=money(total_revenue) hint="Confirmed bookings" />
                <StatCard title="Bookings" value=total_bookings.to_string() hint=format!("{} pending · {} canceled", pending, canceled) />
                <StatCard title="Confirmed" value=confirmed.to_string() />
                <StatCard
                    title="Average booking"
                    value=average_booking_value.map(&money).unwrap_or_else(|| "–".into())
                />
            </dl>

            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-3">
                <h2 class="text-lg font-semibold text-fg">"Revenue by month"</h2>
                {if monthly.is_empty() {
                    view! { <p class="text-sm text-fg-muted">"No confirmed bookings yet."</p> }.into_view()
                } else {
                    monthly
                        .into_iter()
                        .map(|month| {
                            let width = format!("width: {:.1}%", bar_width(month.revenue, best_month));
                            view! {
                                <div class="flex items-center gap-3 text-sm">
                                    <span class="w-20 text-fg-muted">{month.label()}</span>
                                    <div class="flex-1 h-3 rounded bg-surface-muted">
                                        <div class="h-3 rounded bg-action-primary-bg" style=width></div>
                                    </div>
                                    <span class="w-28 text-right text-fg">{money(month.revenue)}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </section>

            <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-3">
                    <h2 class="text-lg font-semibold text-fg">"Top houses"</h2>
                    <table class="min-w-full text-sm">
                        <thead>
                            <tr class="text-left text-fg-muted">
                                <th class="py-1">"House"</th>
                                <th class="py-1 text-right">"Stays"</th>
                                <th class="py-1 text-right">"Revenue"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {top_houses
                                .into_iter()
                                .map(|house| view! {
                                    <tr class="border-t border-border">
                                        <td class="py-1 text-fg">{house.house_name}</td>
                                        <td class="py-1 text-right">{house.bookings}</td>
                                        <td class="py-1 text-right">{money(house.revenue)}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </section>
                <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-3">
                    <div class="flex items-baseline justify-between">
                        <h2 class="text-lg font-semibold text-fg">"Recent bookings"</h2>
                        <a href="/admin/bookings" class="text-sm text-link hover:text-link-hover">"All bookings"</a>
                    </div>
                    <ul class="divide-y divide-border text-sm">
                        {recent
                            .into_iter()
                            .map(|booking| view! {
                                <li class="py-2 flex justify-between gap-2">
                                    <span>
                                        <span class="font-medium text-fg">{booking.full_name.clone()}</span>
                                        <span class="text-fg-muted">
                                            {format!(
                                                " · {} · {}",
                                                booking.house_name.clone().unwrap_or_else(|| format!("House #{}", booking.house_id)),
                                                time::format_range(booking.check_in, booking.check_out)
                                            )}
                                        </span>
                                    </span>
                                    <span class=format!("rounded-full px-2 py-0.5 text-xs {}", booking.status.badge_class())>
                                        {booking.status.label()}
                                    </span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </section>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::BookingStatus;
    use crate::test_support::helpers::booking;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_renders_totals() {
        let html = render_to_string(|| {
            let bookings = vec![
                booking(1, 3, 360.0, BookingStatus::Confirmed),
                booking(2, 3, 1000.0, BookingStatus::Canceled),
            ];
            view! { <DashboardView bookings=bookings /> }
        });
        assert!(html.contains("$360.00"));
        assert!(html.contains("0 pending · 1 canceled"));
        assert!(html.contains("Jul 2025"));
        assert!(html.contains("Ayla Guest"));
    }
}
