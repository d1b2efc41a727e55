use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_inventory_item::ui::list::InventoryList;
use crate::domain::a003_warehouse::ui::list::WarehouseList;
use crate::domain::a004_project::ui::details::ProjectDetail;
use crate::domain::a004_project::ui::list::ProjectList;
use crate::domain::a004_project::ui::workspace::ProjectsLayout;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::profile::ProfilePage;
use crate::system::pages::settings::SettingsPage;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn DashboardLayout() -> impl IntoView {
    view! {
        <Shell>
            <Outlet />
        </Shell>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/dashboard" /> } />
                <ParentRoute path=path!("/dashboard") view=DashboardLayout>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("category") view=CategoryList />
                    <Route path=path!("inventory") view=InventoryList />
                    <Route path=path!("warehouse") view=WarehouseList />
                    <ParentRoute path=path!("projects") view=ProjectsLayout>
                        <Route path=path!("") view=ProjectList />
                        <Route path=path!(":id") view=ProjectDetail />
                    </ParentRoute>
                    <Route path=path!("profile") view=ProfilePage />
                    <Route path=path!("settings") view=SettingsPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
