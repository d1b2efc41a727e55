use crate::shared::components::ui::{Button, Checkbox, Select};
use crate::shared::notifications::use_notifications;
use contracts::shared::settings::{DigestFrequency, NotificationPreferences};
use leptos::prelude::*;

type PrefAccess = (fn(&NotificationPreferences) -> bool, fn(&mut NotificationPreferences, bool));

fn channels() -> [(&'static str, &'static str, &'static str, PrefAccess); 6] {
    [
        ("pref-email", "Email", "Nhận thông báo qua email", (|p| p.email_notifications, |p, v| p.email_notifications = v)),
        ("pref-push", "Thông báo đẩy", "Hiển thị thông báo trên trình duyệt", (|p| p.push_notifications, |p, v| p.push_notifications = v)),
        ("pref-sms", "SMS", "Nhận tin nhắn khi có cảnh báo tồn kho", (|p| p.sms_notifications, |p, v| p.sms_notifications = v)),
        ("pref-orders", "Cập nhật đơn hàng", "Trạng thái đặt hàng vật tư", (|p| p.order_updates, |p, v| p.order_updates = v)),
        ("pref-promotions", "Khuyến mãi", "Ưu đãi từ nhà cung cấp", (|p| p.promotions, |p, v| p.promotions = v)),
        ("pref-newsletter", "Bản tin", "Tin tức ngành xây dựng hàng tuần", (|p| p.newsletter, |p, v| p.newsletter = v)),
    ]
}

#[component]
pub fn NotificationsPanel() -> impl IntoView {
    let notifications = use_notifications();
    let prefs = RwSignal::new(NotificationPreferences::default());

    let frequency_options = Signal::derive(|| {
        DigestFrequency::all()
            .iter()
            .map(|f| (f.as_str().to_string(), f.display_name().to_string()))
            .collect::<Vec<_>>()
    });

    let channel_switches = channels()
        .into_iter()
        .map(|(id, label, hint, (get, set))| {
            view! {
                <Checkbox
                    id=id
                    label=label.to_string()
                    description=hint
                    checked=Signal::derive(move || prefs.with(get))
                    on_change=Callback::new(move |v: bool| prefs.update(|p| set(p, v)))
                />
            }
        })
        .collect_view();

    let on_save = Callback::new(move |_| {
        let saved = prefs.get_untracked();
        log::info!(
            "notification preferences saved: {}",
            serde_json::to_string(&saved).unwrap_or_default()
        );
        notifications.success("Đã lưu cài đặt thông báo");
    });

    view! {
        <section class="card settings__section">
            <h3 class="card__title">"Thông báo"</h3>
            {channel_switches}
            <Select
                label="Tần suất tổng hợp"
                id="settings-frequency"
                value=Signal::derive(move || prefs.with(|p| p.frequency.as_str().to_string()))
                on_change=Callback::new(move |v: String| {
                    prefs.update(|p| p.frequency = DigestFrequency::from_str(&v))
                })
                options=frequency_options
            />
            <div class="settings__actions">
                <Button variant="primary" icon_name="check" on_click=on_save>
                    "Lưu thông báo"
                </Button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_switches_cover_every_flag() {
        let mut prefs = NotificationPreferences::default();
        for (_, _, _, (get, set)) in channels() {
            let before = get(&prefs);
            set(&mut prefs, !before);
            assert_eq!(get(&prefs), !before);
        }
        assert!(!prefs.email_notifications);
        assert!(prefs.push_notifications);
        assert!(!prefs.newsletter);
    }
}
