pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: logging, runtime config warm-up, then the router.
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!("starting booking frontend");

    // window.__BOOKING_ENV (env.js) wins over ./config.json when present.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
