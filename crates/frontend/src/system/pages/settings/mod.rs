//! Settings page: one panel per tab, the active tab kept in `?tab=`.

mod about;
mod appearance;
mod data;
mod notifications;
mod security;

use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use serde::{Deserialize, Serialize};

use about::SystemPanel;
use appearance::AppearancePanel;
use data::DataPanel;
use notifications::NotificationsPanel;
use security::SecurityPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    #[default]
    Appearance,
    Notifications,
    Security,
    Data,
    System,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsQuery {
    #[serde(default)]
    tab: SettingsTab,
}

impl SettingsTab {
    pub fn all() -> [SettingsTab; 5] {
        [
            SettingsTab::Appearance,
            SettingsTab::Notifications,
            SettingsTab::Security,
            SettingsTab::Data,
            SettingsTab::System,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Appearance => "Giao diện",
            SettingsTab::Notifications => "Thông báo",
            SettingsTab::Security => "Bảo mật",
            SettingsTab::Data => "Dữ liệu",
            SettingsTab::System => "Hệ thống",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            SettingsTab::Appearance => "sun",
            SettingsTab::Notifications => "info",
            SettingsTab::Security => "check",
            SettingsTab::Data => "download",
            SettingsTab::System => "settings",
        }
    }

    /// Unknown or missing values fall back to the appearance tab
    pub fn from_query(search: &str) -> Self {
        serde_qs::from_str::<SettingsQuery>(search.trim_start_matches('?'))
            .map(|q| q.tab)
            .unwrap_or_default()
    }

    pub fn href(&self) -> String {
        match serde_qs::to_string(&SettingsQuery { tab: *self }) {
            Ok(query) => format!("/dashboard/settings?{}", query),
            Err(e) => {
                log::warn!("settings tab query: {}", e);
                "/dashboard/settings".to_string()
            }
        }
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let location = use_location();
    let tab = Signal::derive(move || SettingsTab::from_query(&location.search.get()));

    view! {
        <PageFrame page_id="system--settings" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Cài đặt".to_string() subtitle="Quản lý tài khoản và tùy chọn hệ thống" />

            <nav class="tabs">
                {SettingsTab::all().into_iter().map(|t| {
                    let class = move || {
                        if tab.get() == t { "tabs__tab tabs__tab--active" } else { "tabs__tab" }
                    };
                    view! {
                        <span class=class>
                            <A href=t.href()>{icon(t.icon_name())}<span>{t.label()}</span></A>
                        </span>
                    }
                }).collect_view()}
            </nav>

            <div class="tabs__content">
                {move || match tab.get() {
                    SettingsTab::Appearance => view! { <AppearancePanel /> }.into_any(),
                    SettingsTab::Notifications => view! { <NotificationsPanel /> }.into_any(),
                    SettingsTab::Security => view! { <SecurityPanel /> }.into_any(),
                    SettingsTab::Data => view! { <DataPanel /> }.into_any(),
                    SettingsTab::System => view! { <SystemPanel /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_query() {
        assert_eq!(SettingsTab::from_query(""), SettingsTab::Appearance);
        assert_eq!(SettingsTab::from_query("?tab=security"), SettingsTab::Security);
        assert_eq!(SettingsTab::from_query("?tab=data"), SettingsTab::Data);
        assert_eq!(SettingsTab::from_query("?tab=billing"), SettingsTab::Appearance);
    }

    #[test]
    fn test_href_round_trip() {
        for tab in SettingsTab::all() {
            let href = tab.href();
            let query = href.split_once('?').map(|(_, q)| q).unwrap_or_default();
            assert_eq!(SettingsTab::from_query(query), tab);
        }
    }
}
