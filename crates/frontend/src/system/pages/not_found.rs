use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    log::warn!("no route for {}", location.pathname.get_untracked());

    view! {
        <div class="not-found-panel not-found-panel--page">
            <div class="not-found-panel__icon">{icon("alert")}</div>
            <h1 class="not-found-panel__title">"404"</h1>
            <p class="not-found-panel__text">"Trang bạn tìm kiếm không tồn tại."</p>
            <A href="/dashboard">"Về trang tổng quan"</A>
        </div>
    }
}
