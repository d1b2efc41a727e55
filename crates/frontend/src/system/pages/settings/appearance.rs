use crate::shared::components::ui::{Button, RadioGroup, Select};
use crate::shared::notifications::use_notifications;
use crate::shared::theme::use_theme;
use contracts::shared::settings::{AppearanceSettings, Language, ThemePreference};
use leptos::prelude::*;

/// Keeps the unsaved form in step with theme changes made elsewhere,
/// e.g. the header toggle while this tab is open.
fn follow_theme(appearance: RwSignal<AppearanceSettings>) -> impl Fn(ThemePreference) + Send + Sync + 'static {
    move |theme| appearance.update(|a| a.theme = theme)
}

#[component]
pub fn AppearancePanel() -> impl IntoView {
    let theme = use_theme();
    let notifications = use_notifications();

    let appearance = RwSignal::new(AppearanceSettings {
        theme: theme.theme.get_untracked(),
        ..Default::default()
    });
    let listener = theme.subscribe(follow_theme(appearance));
    on_cleanup(move || {
        theme.unsubscribe(listener);
    });

    let theme_options: Vec<(&'static str, &'static str)> = ThemePreference::all()
        .iter()
        .map(|t| (t.as_str(), t.display_name()))
        .collect();
    let language_options = Signal::derive(|| {
        Language::all()
            .iter()
            .map(|l| (l.code().to_string(), l.display_name().to_string()))
            .collect::<Vec<_>>()
    });

    let on_save = Callback::new(move |_| {
        let settings = appearance.get_untracked();
        theme.set_theme(settings.theme);
        log::info!(
            "appearance saved: theme={} language={}",
            settings.theme.as_str(),
            settings.language.code()
        );
        notifications.success("Đã lưu cài đặt giao diện");
    });

    view! {
        <section class="card settings__section">
            <h3 class="card__title">"Giao diện"</h3>
            <RadioGroup
                label="Chủ đề"
                name="theme"
                value=Signal::derive(move || appearance.with(|a| a.theme.as_str().to_string()))
                on_change=Callback::new(move |v: String| {
                    appearance.update(|a| a.theme = ThemePreference::from_str(&v))
                })
                options=theme_options
            />
            <Select
                label="Ngôn ngữ"
                id="settings-language"
                value=Signal::derive(move || appearance.with(|a| a.language.code().to_string()))
                on_change=Callback::new(move |v: String| {
                    appearance.update(|a| a.language = Language::from_code(&v))
                })
                options=language_options
            />
            <div class="settings__actions">
                <Button variant="primary" icon_name="check" on_click=on_save>
                    "Lưu giao diện"
                </Button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;
    use crate::shared::theme::ThemeStore;

    #[test]
    fn test_form_follows_theme_until_unsubscribed() {
        let owner = Owner::new();
        owner.with(|| {
            let appearance = RwSignal::new(AppearanceSettings {
                language: Language::Vi,
                ..Default::default()
            });
            let mut store = ThemeStore::load(MemoryStorage::default(), "theme", ThemePreference::Light);
            let id = store.subscribe(follow_theme(appearance));

            store.set(ThemePreference::Dark);
            assert_eq!(appearance.get_untracked().theme, ThemePreference::Dark);
            assert_eq!(appearance.get_untracked().language, Language::Vi);

            assert!(store.unsubscribe(id));
            store.set(ThemePreference::Auto);
            assert_eq!(appearance.get_untracked().theme, ThemePreference::Dark);
        });
    }
}
