use crate::domain::a004_project::ui::workspace::use_project_workspace;
use crate::shared::components::confirm_delete::ConfirmDelete;
use crate::shared::components::data_table::{row_actions, Column, DataTable};
use crate::shared::components::ui::{Badge, Button, Input, NumberInput, Select};
use crate::shared::config::use_config;
use crate::shared::crud::{CrudMode, CrudModal, CrudStore};
use crate::shared::form::FormState;
use crate::shared::format::format_quantity;
use crate::shared::list_view::ListViewState;
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;
use contracts::domain::a004_project::{Material, MaterialDto, MaterialStatus};
use leptos::prelude::*;
use std::sync::Arc;

fn material_badge(status: MaterialStatus) -> impl IntoView {
    let variant = match status {
        MaterialStatus::Available => "success",
        MaterialStatus::Ordered => "warning",
        MaterialStatus::OutOfStock => "error",
    };
    view! { <Badge variant=variant>{status.label()}</Badge> }
}

#[derive(Clone, Copy)]
pub struct MaterialsViewModel {
    pub store: CrudStore<Material>,
    pub form: FormState<MaterialDto>,
    project_id: StoredValue<String>,
}

impl MaterialsViewModel {
    pub fn new(store: CrudStore<Material>, project_id: String) -> Self {
        Self {
            store,
            form: FormState::new(),
            project_id: StoredValue::new(project_id),
        }
    }

    pub fn records(&self) -> Vec<Arc<Material>> {
        let project_id = self.project_id.get_value();
        self.store
            .records()
            .into_iter()
            .filter(|m| m.project_id == project_id)
            .collect()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.store.mode() == CrudMode::Editing
    }

    /// New materials start from a named placeholder
    pub fn load(&self, selected: Option<Arc<Material>>) {
        self.form.reset(
            selected
                .map(|m| m.to_dto())
                .unwrap_or_else(MaterialDto::placeholder),
        );
    }

    pub fn save_command(&self) -> Option<Arc<Material>> {
        let dto = self.form.submit(MaterialDto::validate)?;
        let project_id = self.project_id.get_value();
        match self.store.mode() {
            CrudMode::Creating => self.store.run("create", |s| {
                s.submit_create(|id| Material::from_dto(id, &project_id, &dto))
            }),
            CrudMode::Editing => self.store.run("update", |s| s.submit_update(&dto.to_patch())),
            mode => {
                log::warn!("material save ignored in {:?}", mode);
                None
            }
        }
    }
}

#[component]
fn MaterialForm(vm: MaterialsViewModel) -> impl IntoView {
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
            "Sửa vật tư".to_string()
        } else {
            "Thêm vật tư".to_string()
        }
    });

    let (name, set_name) = form.bind("name", |d| d.name.clone(), |d, v| d.name = v);
    let (quantity, set_quantity) = form.bind("quantity", |d| d.quantity, |d, v| d.quantity = v);
    let (unit, set_unit) = form.bind("unit", |d| d.unit.clone(), |d, v| d.unit = v);
    let (status, set_status) = form.bind(
        "status",
        |d| d.status.as_str().to_string(),
        |d, v: String| {
            if let Some(s) = MaterialStatus::from_str(&v) {
                d.status = s;
            }
        },
    );
    let status_options = Signal::derive(|| {
        MaterialStatus::all()
            .iter()
            .map(|s| (s.as_str().to_string(), s.label().to_string()))
            .collect::<Vec<_>>()
    });

    let on_submit = Callback::new(move |_| {
        let editing = vm.is_edit_mode();
        if let Some(saved) = vm.save_command() {
            notifications.success(if editing {
                format!("Đã cập nhật vật tư {}", saved.name)
            } else {
                format!("Đã thêm vật tư {}", saved.name)
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
                <Input label="Tên vật tư" id="material-name" value=name on_input=set_name
                    required=true error=form.error("name") />
                <div class="form__row">
                    <NumberInput label="Số lượng" id="material-quantity" value=quantity
                        on_input=set_quantity min=0.0 error=form.error("quantity") />
                    <Input label="Đơn vị" id="material-unit" value=unit on_input=set_unit
                        required=true error=form.error("unit") />
                </div>
                <Select label="Trạng thái" id="material-status" value=status on_change=set_status
                    options=status_options />
            </div>
        </Modal>
    }
}

#[component]
pub fn MaterialsTab(project_id: String) -> impl IntoView {
    let config = use_config();
    let notifications = use_notifications();
    let store = use_project_workspace().materials;
    let vm = MaterialsViewModel::new(store, project_id);
    let state = RwSignal::new(ListViewState::with_page_size(config.table.default_page_size));

    let records = Signal::derive(move || vm.records());
    let heading = move || format!("Danh sách vật tư ({})", records.with(|r| r.len()));

    let columns = vec![
        Column::new("Tên vật tư", "name").sortable().min_width(220.0),
        Column::new("Số lượng", "quantity")
            .sortable()
            .render(|m: &Arc<Material>, _| view! { <span>{format_quantity(m.quantity)}</span> }),
        Column::new("Đơn vị", "unit").sortable(),
        Column::new("Trạng thái", "status")
            .sortable()
            .render(|m: &Arc<Material>, _| material_badge(m.status)),
    ];

    let actions = row_actions(move |m: &Arc<Material>| {
        let edit_id = m.id.clone();
        let delete_id = m.id.clone();
        view! {
            <Button variant="ghost" size="sm" icon_name="edit" title="Sửa"
                on_click=Callback::new(move |_| store.begin_edit(&edit_id)) />
            <Button variant="ghost" size="sm" icon_name="trash" title="Xóa"
                on_click=Callback::new(move |_| store.begin_delete(&delete_id)) />
        }
    });

    let on_confirm_delete = Callback::new(move |_| {
        if let Some(removed) = store.run("delete", |s| s.confirm_delete()) {
            notifications.success(format!("Đã xóa vật tư {}", removed.name));
        }
    });

    view! {
        <div class="tab-panel">
            <div class="tab-panel__header">
                <h3 class="tab-panel__title">{heading}</h3>
                <Button variant="primary" size="sm" on_click=Callback::new(move |_| store.begin_create())>
                    "+ Thêm vật tư"
                </Button>
            </div>
            <DataTable
                columns=columns
                records=records
                state=state
                empty_title="Chưa có vật tư"
                empty_description="Thêm vật tư cần dùng cho dự án"
                actions=actions
            />
            <MaterialForm vm=vm />
            <ConfirmDelete
                open=store.open_signal(CrudModal::Delete)
                title="Xóa vật tư".to_string()
                record_name=Signal::derive(move || store.selected().map(|m| m.name.clone()).unwrap_or_default())
                message="Bạn có chắc chắn muốn xóa vật tư"
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
    fn test_create_starts_from_placeholder() {
        let owner = Owner::new();
        owner.with(|| {
            let store = CrudStore::new(from_seed(seed::materials()));
            let vm = MaterialsViewModel::new(store, "1".into());
            assert_eq!(vm.records().len(), 3);

            store.begin_create();
            vm.load(None);
            assert_eq!(vm.form.draft.get_untracked(), MaterialDto::placeholder());
            let created = vm.save_command().unwrap();
            assert_eq!(created.name, "Vật tư mới");
            assert_eq!(created.project_id, "1");
            assert_eq!(vm.records().len(), 4);
        });
    }
}
