pub mod global_context;
pub mod left;
pub mod top_header;

use crate::shared::notifications::NotificationHost;
use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |           |          TopHeader           |
/// |  Sidebar  +------------------------------+
/// |  (Left)   |       routed page            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <left::Left>
                <left::Sidebar />
            </left::Left>
            <div class="app-body">
                <TopHeader />
                <main class="app-main">
                    {children()}
                </main>
            </div>
            <NotificationHost />
        </div>
    }
}
