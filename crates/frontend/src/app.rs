use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::shared::notify::{NotificationService, Toaster};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();

    // Toasts live at the root so they outlive the page that raised them.
    provide_context(NotificationService::new(config.notifications.timeout_ms));
    provide_context(config);

    view! {
        <AppRoutes />
        <Toaster />
    }
}
