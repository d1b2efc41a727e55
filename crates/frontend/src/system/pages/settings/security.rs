use crate::shared::components::ui::{Button, Checkbox, Input, NumberInput};
use crate::shared::form::FormState;
use crate::shared::notifications::use_notifications;
use contracts::domain::a005_user_profile::ChangePasswordDto;
use contracts::shared::settings::{SecuritySettings, SESSION_TIMEOUT_MAX, SESSION_TIMEOUT_MIN};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SecurityViewModel {
    pub settings: FormState<SecuritySettings>,
    /// Left blank to keep the current password
    pub password: FormState<ChangePasswordDto>,
}

impl SecurityViewModel {
    pub fn new() -> Self {
        Self {
            settings: FormState::new(),
            password: FormState::new(),
        }
    }

    fn wants_password_change(&self) -> bool {
        self.password.draft.with_untracked(|d| *d != ChangePasswordDto::default())
    }

    /// Both forms are checked so every message shows at once.
    /// On success the password fields are cleared.
    pub fn save(&self) -> Option<SecuritySettings> {
        let change_password = self.wants_password_change();
        let settings = self.settings.submit(SecuritySettings::validate);
        let password_ok = !change_password || self.password.submit(ChangePasswordDto::validate).is_some();
        let settings = settings.filter(|_| password_ok)?;

        if change_password {
            log::info!("password change requested");
            self.password.reset(ChangePasswordDto::default());
        }
        log::info!(
            "security saved: two_factor={} auto_logout={} timeout={}m",
            settings.two_factor,
            settings.auto_logout,
            settings.session_timeout_minutes
        );
        Some(settings)
    }
}

impl Default for SecurityViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn SecurityPanel() -> impl IntoView {
    let notifications = use_notifications();
    let vm = SecurityViewModel::new();
    let settings = vm.settings;
    let password = vm.password;

    let (current, set_current) = password.bind(
        "current_password",
        |d| d.current_password.clone(),
        |d, v| d.current_password = v,
    );
    let (new_password, set_new_password) =
        password.bind("new_password", |d| d.new_password.clone(), |d, v| d.new_password = v);
    let (confirm, set_confirm) = password.bind(
        "confirm_password",
        |d| d.confirm_password.clone(),
        |d, v| d.confirm_password = v,
    );

    let (two_factor, set_two_factor) = settings.bind("two_factor", |d| d.two_factor, |d, v| d.two_factor = v);
    let (auto_logout, set_auto_logout) =
        settings.bind("auto_logout", |d| d.auto_logout, |d, v| d.auto_logout = v);
    let (timeout, set_timeout) = settings.bind(
        "session_timeout_minutes",
        |d| d.session_timeout_minutes as f64,
        |d, v: f64| d.session_timeout_minutes = v.max(0.0).round() as u32,
    );

    let on_save = Callback::new(move |_| {
        if vm.save().is_some() {
            notifications.success("Đã cập nhật cài đặt bảo mật");
        }
    });

    view! {
        <section class="card settings__section">
            <h3 class="card__title">"Bảo mật"</h3>
            <p class="settings__hint">
                "Nên dùng mật khẩu mạnh và bật xác thực hai lớp để bảo vệ tài khoản."
            </p>

            <h4 class="settings__subtitle">"Đổi mật khẩu"</h4>
            <div class="details-form">
                <Input label="Mật khẩu hiện tại" id="security-current" input_type="password"
                    autocomplete="current-password" value=current on_input=set_current
                    error=password.error("current_password") />
                <Input label="Mật khẩu mới" id="security-new" input_type="password"
                    autocomplete="new-password" value=new_password on_input=set_new_password
                    error=password.error("new_password") />
                <Input label="Xác nhận mật khẩu mới" id="security-confirm" input_type="password"
                    autocomplete="new-password" value=confirm on_input=set_confirm
                    error=password.error("confirm_password") />
            </div>

            <h4 class="settings__subtitle">"Xác thực hai lớp"</h4>
            <Checkbox id="security-2fa" label="Bật 2FA".to_string()
                description="Thêm một lớp bảo vệ khi đăng nhập"
                checked=two_factor on_change=set_two_factor />

            <h4 class="settings__subtitle">"Phiên đăng nhập"</h4>
            <Checkbox id="security-auto-logout" label="Tự động đăng xuất".to_string()
                description="Đăng xuất sau một thời gian không hoạt động"
                checked=auto_logout on_change=set_auto_logout />
            <Show when=move || auto_logout.get()>
                <NumberInput label="Thời gian chờ (phút)" id="security-timeout"
                    value=timeout on_input=set_timeout
                    min=SESSION_TIMEOUT_MIN as f64 max=SESSION_TIMEOUT_MAX as f64 step=5.0
                    error=settings.error("session_timeout_minutes") />
            </Show>

            <div class="settings__actions">
                <Button variant="primary" icon_name="check" on_click=on_save>
                    "Cập nhật bảo mật"
                </Button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_password_keeps_current_one() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = SecurityViewModel::new();
            vm.settings.draft.update(|s| s.two_factor = true);
            let saved = vm.save().unwrap();
            assert!(saved.two_factor);
            assert!(vm.password.errors.get_untracked().is_empty());
        });
    }

    #[test]
    fn test_bad_timeout_and_password_are_both_reported() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = SecurityViewModel::new();
            vm.settings.draft.update(|s| s.session_timeout_minutes = 240);
            vm.password.draft.update(|d| d.new_password = "NewPass123".into());

            assert!(vm.save().is_none());
            assert_eq!(
                vm.settings.error("session_timeout_minutes").get_untracked().as_deref(),
                Some("Thời gian chờ từ 5-120 phút!")
            );
            assert!(vm.password.error("current_password").get_untracked().is_some());
        });
    }

    #[test]
    fn test_password_change_clears_fields() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = SecurityViewModel::new();
            vm.password.draft.update(|d| {
                d.current_password = "old-secret".into();
                d.new_password = "NewPass123".into();
                d.confirm_password = "NewPass123".into();
            });
            assert!(vm.save().is_some());
            assert_eq!(vm.password.draft.get_untracked(), ChangePasswordDto::default());
        });
    }
}
