//! TopHeader: sidebar toggle, theme toggle and the current user menu.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::modals::use_modals;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderMenu {
    User,
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let is_sidebar_visible = move || ctx.left_open.get();
    let user_menu = use_modals(&[HeaderMenu::User]).get(HeaderMenu::User);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Thu gọn menu" } else { "Mở rộng menu" }
                >
                    {icon("menu")}
                </button>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />

                <A href="/dashboard/settings" attr:class="top-header__icon-btn" attr:title="Cài đặt">
                    {icon("settings")}
                </A>

                <div class="user-menu">
                    <button class="top-header__user" on:click=move |_| user_menu.toggle()>
                        <span class="avatar avatar--small">{move || ctx.profile.with(|p| p.initials())}</span>
                        <span class="top-header__user-name">{move || ctx.profile.with(|p| p.full_name.clone())}</span>
                        {icon("chevron-down")}
                    </button>

                    <Show when=move || user_menu.is_open()>
                        <div class="user-menu__panel" on:click=move |_| user_menu.close()>
                            <div class="user-menu__header">
                                <div class="user-menu__name">{move || ctx.profile.with(|p| p.full_name.clone())}</div>
                                <div class="user-menu__email">{move || ctx.profile.with(|p| p.email.clone())}</div>
                            </div>
                            <A href="/dashboard/profile" attr:class="user-menu__item">
                                {icon("profile")}
                                <span>"Hồ sơ cá nhân"</span>
                            </A>
                            <A href="/dashboard/settings" attr:class="user-menu__item">
                                {icon("settings")}
                                <span>"Cài đặt"</span>
                            </A>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
