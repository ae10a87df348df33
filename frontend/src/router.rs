use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::layout::Layout,
    pages::{
        admin::{
            AdminBookingsPage, AdminCategoriesPage, AdminDashboardPage, AdminFaqsPage,
            AdminHousesPage, AdminSettingsPage, AdminToursPage, AdminUsersPage,
        },
        ConfirmEmailPage, FaqPage, ForgotPasswordPage, HomePage, HouseDetailPage, HousesPage,
        LoginPage, MyBookingsPage, RegisterPage, ResetPasswordPage, TourDetailPage, ToursPage,
    },
    state::{auth::AuthProvider, toast::provide_toasts},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/houses",
    "/houses/:id",
    "/tours",
    "/tours/:id",
    "/faq",
    "/login",
    "/register",
    "/confirm-email",
    "/forgot-password",
    "/reset-password",
    "/my-bookings",
    "/admin",
    "/admin/houses",
    "/admin/tours",
    "/admin/bookings",
    "/admin/categories",
    "/admin/faqs",
    "/admin/users",
    "/admin/settings",
];

/// Signed-in users only; admin routes are listed separately as well.
pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/my-bookings",
    "/admin",
    "/admin/houses",
    "/admin/tours",
    "/admin/bookings",
    "/admin/categories",
    "/admin/faqs",
    "/admin/users",
    "/admin/settings",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &[
    "/admin",
    "/admin/houses",
    "/admin/tours",
    "/admin/bookings",
    "/admin/categories",
    "/admin/faqs",
    "/admin/users",
    "/admin/settings",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[
    "/",
    "/houses",
    "/houses/:id",
    "/tours",
    "/tours/:id",
    "/faq",
    "/login",
    "/register",
    "/confirm-email",
    "/forgot-password",
    "/reset-password",
];

/// Indexable pages without parameters; the site server adds detail pages.
pub const SITEMAP_STATIC_PATHS: &[&str] = &["/", "/houses", "/tours", "/faq"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_toasts();
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/houses" view=HousesPage/>
                    <Route path="/houses/:id" view=HouseDetailPage/>
                    <Route path="/tours" view=ToursPage/>
                    <Route path="/tours/:id" view=TourDetailPage/>
                    <Route path="/faq" view=FaqPage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/confirm-email" view=ConfirmEmailPage/>
                    <Route path="/forgot-password" view=ForgotPasswordPage/>
                    <Route path="/reset-password" view=ResetPasswordPage/>
                    <Route path="/my-bookings" view=MyBookingsPage/>
                    <Route path="/admin" view=AdminDashboardPage/>
                    <Route path="/admin/houses" view=AdminHousesPage/>
                    <Route path="/admin/tours" view=AdminToursPage/>
                    <Route path="/admin/bookings" view=AdminBookingsPage/>
                    <Route path="/admin/categories" view=AdminCategoriesPage/>
                    <Route path="/admin/faqs" view=AdminFaqsPage/>
                    <Route path="/admin/users" view=AdminUsersPage/>
                    <Route path="/admin/settings" view=AdminSettingsPage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="text-center py-16 space-y-4">
                <h1 class="text-3xl font-bold text-fg">"Page not found"</h1>
                <p class="text-fg-muted">"The page you are looking for does not exist or has moved."</p>
                <a href="/" class="text-link hover:text-link-hover">"Back to the home page"</a>
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_paths_include_admin_routes() {
        for path in ADMIN_ROUTE_PATHS {
            assert!(ROUTE_PATHS.contains(path), "admin path missing: {}", path);
            assert!(PROTECTED_ROUTE_PATHS.contains(path), "admin path unprotected: {}", path);
        }
    }

    #[test]
    fn every_route_is_public_or_protected() {
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        assert!(public.is_disjoint(&protected));
        for path in ROUTE_PATHS {
            assert!(
                public.contains(path) || protected.contains(path),
                "route not classified: {}",
                path
            );
        }
        assert_eq!(public.len() + protected.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn sitemap_lists_only_public_static_pages() {
        for path in SITEMAP_STATIC_PATHS {
            assert!(PUBLIC_ROUTE_PATHS.contains(path));
            assert!(!path.contains(':'));
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn admin_nav_points_at_admin_routes() {
        for (href, _) in crate::components::layout::ADMIN_NAV {
            assert!(ADMIN_ROUTE_PATHS.contains(&href), "nav entry without route: {}", href);
        }
    }
}
