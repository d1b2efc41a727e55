use super::dated_work::DatedWorkFields;
use super::view_model::ProjectDetailsViewModel;
use crate::shared::components::ui::Button;
use crate::shared::crud::CrudModal;
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;
use leptos::prelude::*;

#[component]
pub fn ProjectDetails(vm: ProjectDetailsViewModel) -> impl IntoView {
    let notifications = use_notifications();
    let store = vm.store;

    let open = Signal::derive(move || {
        store.is_open(CrudModal::Create) || store.is_open(CrudModal::Update)
    });
    Effect::new(move |_| {
        if open.get() {
            vm.load(untrack(move || store.selected()));
        }
    });

    let title = Signal::derive(move || {
        if vm.is_edit_mode() { "Sửa dự án" } else { "Thêm dự án mới" }.to_string()
    });

    let on_submit = Callback::new(move |_| {
        let editing = vm.is_edit_mode();
        if let Some(saved) = vm.save_command() {
            notifications.success(if editing {
                format!("Đã cập nhật dự án {}", saved.name)
            } else {
                format!("Đã thêm dự án {}", saved.name)
            });
        }
    });
    let on_cancel = store.on_cancel();

    let footer = move || {
        view! {
            <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                "Hủy"
            </Button>
            <Button variant="primary" on_click=on_submit>
                {move || if vm.is_edit_mode() { "Cập nhật" } else { "Thêm mới" }}
            </Button>
        }
    };

    view! {
        <Modal open=open title=title on_close=on_cancel footer=footer wide=true>
            <div class="details-form">
                <DatedWorkFields
                    form=vm.form
                    id_prefix="project"
                    name_label="Tên dự án"
                    name_placeholder="Nhập tên dự án"
                />
            </div>
        </Modal>
    }
}
