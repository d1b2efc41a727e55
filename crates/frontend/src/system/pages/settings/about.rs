use crate::shared::components::confirm_delete::ConfirmDelete;
use crate::shared::components::ui::Button;
use crate::shared::config::{use_config, UiConfig};
use crate::shared::modals::use_modals;
use crate::shared::notifications::use_notifications;
use crate::shared::theme::use_theme;
use contracts::shared::settings::ThemePreference;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SystemModal {
    ResetDefaults,
}

/// Label/value rows of the system information card
pub fn system_info(config: &UiConfig) -> Vec<(&'static str, String)> {
    vec![
        ("Phiên bản", env!("CARGO_PKG_VERSION").to_string()),
        ("Số dòng mặc định mỗi trang", config.table.default_page_size.to_string()),
        ("Độ trễ tìm kiếm", format!("{} ms", config.search.debounce_ms)),
        ("Thời gian hiển thị thông báo", format!("{} ms", config.notifications.display_ms)),
        (
            "Chủ đề mặc định",
            ThemePreference::from_str(&config.theme.default).display_name().to_string(),
        ),
    ]
}

#[component]
pub fn SystemPanel() -> impl IntoView {
    let config = use_config();
    let theme = use_theme();
    let notifications = use_notifications();
    let reset = use_modals(&[SystemModal::ResetDefaults]).get(SystemModal::ResetDefaults);
    let default_theme = ThemePreference::from_str(&config.theme.default);

    let rows = system_info(&config)
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="info-row">
                    <span class="info-row__label">{label}</span>
                    <span class="info-row__value">{value}</span>
                </div>
            }
        })
        .collect_view();

    let on_confirm_reset = Callback::new(move |_| {
        theme.reset_theme(default_theme);
        reset.close();
        log::info!("settings reset to defaults");
        notifications.success("Đã khôi phục cài đặt mặc định");
    });

    view! {
        <section class="card settings__section">
            <h3 class="card__title">"Thông tin hệ thống"</h3>
            {rows}
        </section>

        <section class="card settings__section">
            <h3 class="card__title">"Bảo trì"</h3>
            <p class="settings__hint">"Đưa giao diện về cài đặt ban đầu của hệ thống."</p>
            <div class="settings__actions settings__actions--start">
                <Button variant="danger" on_click=Callback::new(move |_| reset.open())>
                    "Khôi phục mặc định"
                </Button>
            </div>
        </section>

        <ConfirmDelete
            open=reset.signal()
            title="Khôi phục mặc định".to_string()
            record_name="cài đặt giao diện".to_string()
            message="Bạn có chắc chắn muốn khôi phục"
            confirm_label="Khôi phục"
            cancel_label="Hủy"
            on_confirm=on_confirm_reset
            on_cancel=reset.on_close()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_info_reflects_config() {
        let config = UiConfig::default();
        let info = system_info(&config);
        assert_eq!(info[0], ("Phiên bản", env!("CARGO_PKG_VERSION").to_string()));
        assert!(info
            .iter()
            .any(|(_, v)| *v == format!("{} ms", config.search.debounce_ms)));
    }
}
