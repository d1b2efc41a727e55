//! Sidebar navigation

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
}

pub fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem { id: "dashboard", label: "Tổng quan", icon: "dashboard", path: "/dashboard" },
        MenuItem { id: "materials", label: "Vật tư", icon: "inventory", path: "/dashboard/inventory" },
        MenuItem { id: "category", label: "Danh mục", icon: "category", path: "/dashboard/category" },
        MenuItem { id: "warehouse", label: "Kho hàng", icon: "warehouse", path: "/dashboard/warehouse" },
        MenuItem { id: "projects", label: "Dự án", icon: "projects", path: "/dashboard/projects" },
        MenuItem { id: "profile", label: "Hồ sơ cá nhân", icon: "profile", path: "/dashboard/profile" },
        MenuItem { id: "settings", label: "Cài đặt", icon: "settings", path: "/dashboard/settings" },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let expanded = move || ctx.left_open.get();

    view! {
        <div class="sidebar">
            <div class="sidebar__header">
                <div class="sidebar__logo" on:click=move |_| if !expanded() { ctx.toggle_left() }>
                    {icon("projects")}
                </div>
                <Show when=expanded>
                    <div class="sidebar__brand">
                        <span class="sidebar__title">"Vật Tư XD"</span>
                        <span class="sidebar__subtitle">"Quản lý vật tư"</span>
                    </div>
                    <button class="button button--icon sidebar__toggle" on:click=move |_| ctx.toggle_left()>
                        {icon("menu")}
                    </button>
                </Show>
            </div>
            <nav class="sidebar__nav">
                <ul>
                    {menu_items().into_iter().map(|item| {
                        // the overview entry must not stay highlighted on its child routes
                        let exact = item.path == "/dashboard";
                        view! {
                            <li data-menu-id=item.id>
                                <A href=item.path exact=exact attr:class="sidebar__item" attr:title=item.label>
                                    <span class="sidebar__icon">{icon(item.icon)}</span>
                                    <Show when=expanded>
                                        <span class="sidebar__label">{item.label}</span>
                                    </Show>
                                </A>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_paths_are_unique_and_nested() {
        let items = menu_items();
        let mut paths: Vec<_> = items.iter().map(|i| i.path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), items.len());
        assert!(items.iter().all(|i| i.path.starts_with("/dashboard")));
    }
}
