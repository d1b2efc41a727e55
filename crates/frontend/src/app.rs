use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::provide_config;
use crate::shared::notifications::provide_notifications;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = provide_config();

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    provide_notifications(config.notifications.display_ms);

    view! {
        <ConfigProvider>
            <ThemeProvider>
                <AppRoutes />
            </ThemeProvider>
        </ConfigProvider>
    }
}
