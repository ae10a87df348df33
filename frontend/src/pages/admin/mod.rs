use crate::components::{guard::RequireAdmin, layout::AdminLayout};
use leptos::*;

pub mod bookings;
pub mod categories;
pub mod dashboard;
pub mod faqs;
pub mod houses;
pub mod repository;
pub mod settings;
pub mod tours;
pub mod upload;
pub mod users;
pub mod utils;

pub use bookings::AdminBookingsPage;
pub use categories::AdminCategoriesPage;
pub use dashboard::AdminDashboardPage;
pub use faqs::AdminFaqsPage;
pub use houses::AdminHousesPage;
pub use settings::AdminSettingsPage;
pub use tours::AdminToursPage;
pub use users::AdminUsersPage;

/// Every back-office screen sits behind the admin guard and sidebar.
#[component]
pub fn AdminShell(#[prop(into)] title: String, children: ChildrenFn) -> impl IntoView {
    let title = store_value(title);
    let children = store_value(children);
    view! {
        <RequireAdmin>
            <AdminLayout>
                <div class="space-y-6">
                    <h1 class="text-2xl font-bold text-fg">{title.get_value()}</h1>
                    {children.with_value(|children| children())}
                </div>
            </AdminLayout>
        </RequireAdmin>
    }
}
