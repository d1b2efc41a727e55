use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input};
use crate::shared::form::FormState;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use contracts::domain::a005_user_profile::{ChangePasswordDto, UserProfile};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    /// Last saved profile, shared with the header
    pub profile: RwSignal<UserProfile>,
    pub form: FormState<UserProfile>,
    pub password: FormState<ChangePasswordDto>,
}

impl ProfileViewModel {
    pub fn new(profile: RwSignal<UserProfile>) -> Self {
        let form = FormState::new();
        form.reset(profile.get_untracked());
        Self {
            profile,
            form,
            password: FormState::new(),
        }
    }

    pub fn save_profile(&self) -> Option<UserProfile> {
        let saved = self.form.submit(UserProfile::validate)?;
        log::info!("profile updated: {} <{}>", saved.full_name, saved.email);
        self.profile.set(saved.clone());
        Some(saved)
    }

    /// Drop unsaved edits
    pub fn discard(&self) {
        self.form.reset(self.profile.get_untracked());
    }

    /// Valid requests are logged and the form is cleared
    pub fn change_password(&self) -> bool {
        if self.password.submit(ChangePasswordDto::validate).is_none() {
            return false;
        }
        log::info!("password change requested");
        self.password.reset(ChangePasswordDto::default());
        true
    }
}

#[component]
fn ProfileCard(profile: RwSignal<UserProfile>) -> impl IntoView {
    view! {
        <section class="card profile-card">
            <div class="profile-card__avatar">{move || profile.with(|p| p.initials())}</div>
            <h3 class="profile-card__name">{move || profile.with(|p| p.full_name.clone())}</h3>
            <p class="profile-card__position">{move || profile.with(|p| p.position.clone())}</p>
            <p class="profile-card__meta">{move || profile.with(|p| p.department.clone())}</p>
            <p class="profile-card__meta">{move || profile.with(|p| p.email.clone())}</p>
        </section>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let notifications = use_notifications();
    let vm = ProfileViewModel::new(use_app_context().profile);
    let form = vm.form;
    let password = vm.password;

    let (full_name, set_full_name) = form.bind("full_name", |d| d.full_name.clone(), |d, v| d.full_name = v);
    let (email, set_email) = form.bind("email", |d| d.email.clone(), |d, v| d.email = v);
    let (phone, set_phone) = form.bind("phone", |d| d.phone.clone(), |d, v| d.phone = v);
    let (position, set_position) = form.bind("position", |d| d.position.clone(), |d, v| d.position = v);
    let (department, set_department) =
        form.bind("department", |d| d.department.clone(), |d, v| d.department = v);
    let (address, set_address) = form.bind("address", |d| d.address.clone(), |d, v| d.address = v);

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

    let on_save = Callback::new(move |_| {
        if vm.save_profile().is_some() {
            notifications.success("Cập nhật thông tin thành công!");
        }
    });
    let on_discard = Callback::new(move |_| vm.discard());
    let on_change_password = Callback::new(move |_| {
        if vm.change_password() {
            notifications.success("Đổi mật khẩu thành công!");
        }
    });

    view! {
        <PageFrame page_id="system--profile" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Hồ sơ cá nhân".to_string() subtitle="Quản lý thông tin tài khoản" />

            <div class="profile">
                <ProfileCard profile=vm.profile />

                <div class="profile__forms">
                    <section class="card">
                        <h3 class="card__title">"Thông tin cá nhân"</h3>
                        <div class="details-form details-form--grid">
                            <Input label="Họ và tên" id="profile-name" value=full_name on_input=set_full_name
                                required=true error=form.error("full_name") />
                            <Input label="Email" id="profile-email" input_type="email" value=email
                                on_input=set_email required=true error=form.error("email") />
                            <Input label="Số điện thoại" id="profile-phone" input_type="tel" value=phone
                                on_input=set_phone required=true error=form.error("phone") />
                            <Input label="Chức vụ" id="profile-position" value=position on_input=set_position />
                            <Input label="Phòng ban" id="profile-department" value=department
                                on_input=set_department />
                            <Input label="Địa chỉ" id="profile-address" value=address on_input=set_address />
                        </div>
                        <div class="settings__actions">
                            <Button variant="secondary" on_click=on_discard>"Hủy"</Button>
                            <Button variant="primary" icon_name="check" on_click=on_save>"Lưu thay đổi"</Button>
                        </div>
                    </section>

                    <section class="card">
                        <h3 class="card__title">"Đổi mật khẩu"</h3>
                        <div class="details-form">
                            <Input label="Mật khẩu hiện tại" id="password-current" input_type="password"
                                autocomplete="current-password" value=current on_input=set_current
                                required=true error=password.error("current_password") />
                            <Input label="Mật khẩu mới" id="password-new" input_type="password"
                                autocomplete="new-password" value=new_password on_input=set_new_password
                                required=true error=password.error("new_password") />
                            <Input label="Xác nhận mật khẩu mới" id="password-confirm" input_type="password"
                                autocomplete="new-password" value=confirm on_input=set_confirm
                                required=true error=password.error("confirm_password") />
                        </div>
                        <div class="settings__actions">
                            <Button variant="primary" on_click=on_change_password>"Đổi mật khẩu"</Button>
                        </div>
                    </section>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_profile_keeps_saved_copy() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ProfileViewModel::new(RwSignal::new(UserProfile::default()));
            vm.form.draft.update(|p| p.phone = "12ab".into());
            assert!(vm.save_profile().is_none());
            assert_eq!(vm.profile.get_untracked().phone, "0123456789");

            vm.form.draft.update(|p| p.phone = "09876543210".into());
            let saved = vm.save_profile().unwrap();
            assert_eq!(vm.profile.get_untracked(), saved);

            vm.form.draft.update(|p| p.full_name = "Trần B".into());
            vm.discard();
            assert_eq!(vm.form.draft.get_untracked().full_name, "Nguyễn Văn A");
        });
    }

    #[test]
    fn test_password_form_clears_after_success() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ProfileViewModel::new(RwSignal::new(UserProfile::default()));
            vm.password.draft.update(|d| {
                d.current_password = "old-secret".into();
                d.new_password = "NewPass123".into();
                d.confirm_password = "NewPass124".into();
            });
            assert!(!vm.change_password());
            assert!(vm.password.error("confirm_password").get_untracked().is_some());

            vm.password.draft.update(|d| d.confirm_password = "NewPass123".into());
            assert!(vm.change_password());
            assert_eq!(vm.password.draft.get_untracked(), ChangePasswordDto::default());
        });
    }
}
