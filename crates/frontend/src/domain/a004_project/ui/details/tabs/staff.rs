use crate::domain::a004_project::ui::workspace::use_project_workspace;
use crate::shared::components::confirm_delete::ConfirmDelete;
use crate::shared::components::data_table::{row_actions, Column, DataTable};
use crate::shared::components::ui::{Badge, Button, Input, Select};
use crate::shared::config::use_config;
use crate::shared::crud::{CrudMode, CrudModal, CrudStore};
use crate::shared::form::FormState;
use crate::shared::list_view::ListViewState;
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;
use contracts::domain::a004_project::{Staff, StaffDto, StaffStatus};
use leptos::prelude::*;
use std::sync::Arc;

#[derive(Clone, Copy)]
pub struct StaffViewModel {
    pub store: CrudStore<Staff>,
    pub form: FormState<StaffDto>,
    project_id: StoredValue<String>,
}

impl StaffViewModel {
    pub fn new(store: CrudStore<Staff>, project_id: String) -> Self {
        Self {
            store,
            form: FormState::new(),
            project_id: StoredValue::new(project_id),
        }
    }

    pub fn records(&self) -> Vec<Arc<Staff>> {
        let project_id = self.project_id.get_value();
        self.store
            .records()
            .into_iter()
            .filter(|s| s.project_id == project_id)
            .collect()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.store.mode() == CrudMode::Editing
    }

    pub fn load(&self, selected: Option<Arc<Staff>>) {
        self.form
            .reset(selected.map(|s| s.to_dto()).unwrap_or_default());
    }

    pub fn save_command(&self) -> Option<Arc<Staff>> {
        let dto = self.form.submit(StaffDto::validate)?;
        let project_id = self.project_id.get_value();
        match self.store.mode() {
            CrudMode::Creating => self.store.run("create", |s| {
                s.submit_create(|id| Staff::from_dto(id, &project_id, &dto))
            }),
            CrudMode::Editing => self.store.run("update", |s| s.submit_update(&dto.to_patch())),
            mode => {
                log::warn!("staff save ignored in {:?}", mode);
                None
            }
        }
    }
}

#[component]
fn StaffForm(vm: StaffViewModel) -> impl IntoView {
    let notifications = use_notifications();
    let store = vm.store;
    let form = vm.form;

    let open = Signal::derive(move || {
        store.is_open(CrudModal::Create) || store.is_open(CrudModal::Update)
    });
    Effect::new(move |_| {
        if open.get() {
            vm.load(untrack(move || store.selected()));
        }
    });

    let title = Signal::derive(move || {
        if vm.is_edit_mode() {
            "Sửa nhân sự".to_string()
        } else {
            "Thêm nhân sự".to_string()
        }
    });

    let (name, set_name) = form.bind("name", |d| d.name.clone(), |d, v| d.name = v);
    let (role, set_role) = form.bind("role", |d| d.role.clone(), |d, v| d.role = v);
    let (status, set_status) = form.bind(
        "status",
        |d| d.status.as_str().to_string(),
        |d, v: String| {
            if let Some(s) = StaffStatus::from_str(&v) {
                d.status = s;
            }
        },
    );
    let status_options = Signal::derive(|| {
        StaffStatus::all()
            .iter()
            .map(|s| (s.as_str().to_string(), s.label().to_string()))
            .collect::<Vec<_>>()
    });

    let on_submit = Callback::new(move |_| {
        let editing = vm.is_edit_mode();
        if let Some(saved) = vm.save_command() {
            notifications.success(if editing {
                format!("Đã cập nhật nhân sự {}", saved.name)
            } else {
                format!("Đã thêm nhân sự {}", saved.name)
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
        <Modal open=open title=title on_close=on_cancel footer=footer>
            <div class="details-form">
                <Input label="Họ tên" id="staff-name" value=name on_input=set_name
                    placeholder="VD: Nguyễn Văn An" required=true error=form.error("name") />
                <Input label="Vai trò" id="staff-role" value=role on_input=set_role
                    placeholder="VD: Kỹ sư kết cấu" required=true error=form.error("role") />
                <Select label="Trạng thái" id="staff-status" value=status on_change=set_status
                    options=status_options />
            </div>
        </Modal>
    }
}

#[component]
pub fn StaffTab(project_id: String) -> impl IntoView {
    let config = use_config();
    let notifications = use_notifications();
    let store = use_project_workspace().staff;
    let vm = StaffViewModel::new(store, project_id);
    let state = RwSignal::new(ListViewState::with_page_size(config.table.default_page_size));

    let records = Signal::derive(move || vm.records());
    let heading = move || format!("Danh sách nhân sự ({})", records.with(|r| r.len()));

    let columns = vec![
        Column::new("Họ tên", "name").sortable().min_width(200.0),
        Column::new("Vai trò", "role").sortable().min_width(180.0),
        Column::new("Trạng thái", "status")
            .sortable()
            .render(|s: &Arc<Staff>, _| {
                let variant = match s.status {
                    StaffStatus::Active => "success",
                    StaffStatus::Inactive => "neutral",
                };
                let label = s.status.label().to_string();
                view! { <Badge variant=variant>{label}</Badge> }
            }),
    ];

    let actions = row_actions(move |s: &Arc<Staff>| {
        let edit_id = s.id.clone();
        let delete_id = s.id.clone();
        view! {
            <Button variant="ghost" size="sm" icon_name="edit" title="Sửa"
                on_click=Callback::new(move |_| store.begin_edit(&edit_id)) />
            <Button variant="ghost" size="sm" icon_name="trash" title="Xóa"
                on_click=Callback::new(move |_| store.begin_delete(&delete_id)) />
        }
    });

    let on_confirm_delete = Callback::new(move |_| {
        if let Some(removed) = store.run("delete", |s| s.confirm_delete()) {
            notifications.success(format!("Đã xóa nhân sự {}", removed.name));
        }
    });

    view! {
        <div class="tab-panel">
            <div class="tab-panel__header">
                <h3 class="tab-panel__title">{heading}</h3>
                <Button variant="primary" size="sm" on_click=Callback::new(move |_| store.begin_create())>
                    "+ Thêm nhân sự"
                </Button>
            </div>
            <DataTable
                columns=columns
                records=records
                state=state
                empty_title="Chưa có nhân sự"
                empty_description="Phân công nhân sự cho dự án"
                actions=actions
            />
            <StaffForm vm=vm />
            <ConfirmDelete
                open=store.open_signal(CrudModal::Delete)
                title="Xóa nhân sự".to_string()
                record_name=Signal::derive(move || store.selected().map(|s| s.name.clone()).unwrap_or_default())
                message="Bạn có chắc chắn muốn xóa nhân sự"
                confirm_label="Xóa"
                cancel_label="Hủy"
                on_confirm=on_confirm_delete
                on_cancel=store.on_cancel()
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_project::seed;
    use contracts::shared::collection::from_seed;

    #[test]
    fn test_staff_role_required() {
        let owner = Owner::new();
        owner.with(|| {
            let store = CrudStore::new(from_seed(seed::staff()));
            let vm = StaffViewModel::new(store, "3".into());
            assert_eq!(vm.records().len(), 1);

            store.begin_create();
            vm.load(None);
            vm.form.draft.update(|d| d.name = "Võ Thị Lan".into());
            assert!(vm.save_command().is_none());
            assert!(vm.form.error("role").get_untracked().is_some());

            vm.form.draft.update(|d| d.role = "Kế toán công trường".into());
            assert!(vm.save_command().is_some());
            assert_eq!(vm.records().len(), 2);
        });
    }
}
