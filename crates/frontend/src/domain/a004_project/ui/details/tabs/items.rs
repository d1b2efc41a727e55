use super::super::dated_work::DatedWorkFields;
use crate::domain::a004_project::ui::progress::{status_badge, ProgressBar};
use crate::domain::a004_project::ui::workspace::use_project_workspace;
use crate::shared::components::confirm_delete::ConfirmDelete;
use crate::shared::components::data_table::{row_actions, Column, DataTable};
use crate::shared::components::ui::Button;
use crate::shared::config::use_config;
use crate::shared::crud::{CrudMode, CrudModal, CrudStore};
use crate::shared::form::FormState;
use crate::shared::format::{format_date, today};
use crate::shared::list_utils::highlight_matches;
use crate::shared::list_view::ListViewState;
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;
use contracts::domain::a004_project::{ProjectItem, ProjectItemDto, Schedule};
use leptos::prelude::*;
use std::sync::Arc;

/// Work items of one project
#[derive(Clone, Copy)]
pub struct ItemsViewModel {
    pub store: CrudStore<ProjectItem>,
    pub form: FormState<ProjectItemDto>,
    project_id: StoredValue<String>,
}

impl ItemsViewModel {
    pub fn new(store: CrudStore<ProjectItem>, project_id: String) -> Self {
        Self {
            store,
            form: FormState::new(),
            project_id: StoredValue::new(project_id),
        }
    }

    pub fn records(&self) -> Vec<Arc<ProjectItem>> {
        let project_id = self.project_id.get_value();
        self.store
            .records()
            .into_iter()
            .filter(|i| i.project_id == project_id)
            .collect()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.store.mode() == CrudMode::Editing
    }

    pub fn load(&self, selected: Option<Arc<ProjectItem>>) {
        self.form
            .reset(selected.map(|i| i.to_dto()).unwrap_or_default());
    }

    pub fn save_command(&self) -> Option<Arc<ProjectItem>> {
        let dto = self.form.submit(ProjectItemDto::validate)?;
        let project_id = self.project_id.get_value();
        match self.store.mode() {
            CrudMode::Creating => self.store.run("create", |s| {
                s.submit_create(|id| ProjectItem::from_dto(id, &project_id, &dto))
            }),
            CrudMode::Editing => self.store.run("update", |s| s.submit_update(&dto.to_patch())),
            mode => {
                log::warn!("item save ignored in {:?}", mode);
                None
            }
        }
    }
}

fn item_overdue(item: &ProjectItem) -> bool {
    Schedule::compute(item.start_date, item.end_date, item.status, today()).overdue
}

#[component]
fn ItemForm(vm: ItemsViewModel) -> impl IntoView {
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
        if vm.is_edit_mode() {
            "Sửa hạng mục".to_string()
        } else {
            "Thêm hạng mục".to_string()
        }
    });

    let on_submit = Callback::new(move |_| {
        let editing = vm.is_edit_mode();
        if let Some(saved) = vm.save_command() {
            notifications.success(if editing {
                format!("Đã cập nhật hạng mục {}", saved.name)
            } else {
                format!("Đã thêm hạng mục {}", saved.name)
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
                <DatedWorkFields
                    form=vm.form
                    id_prefix="item"
                    name_label="Tên hạng mục"
                    name_placeholder="VD: Thi công móng"
                />
            </div>
        </Modal>
    }
}

#[component]
pub fn ItemsTab(project_id: String) -> impl IntoView {
    let config = use_config();
    let notifications = use_notifications();
    let store = use_project_workspace().items;
    let vm = ItemsViewModel::new(store, project_id);
    let state = RwSignal::new(ListViewState::with_page_size(config.table.default_page_size));

    let records = Signal::derive(move || vm.records());
    let heading = move || format!("Danh sách hạng mục ({})", records.with(|r| r.len()));

    let columns = vec![
        Column::new("Tên hạng mục", "name")
            .sortable()
            .min_width(220.0)
            .render(|i: &Arc<ProjectItem>, query| {
                view! {
                    <div class="cell-stack">
                        <div class="cell-stack__main">{highlight_matches(&i.name, query)}</div>
                        {(!i.description.is_empty()).then(|| view! {
                            <div class="cell-stack__sub">{i.description.clone()}</div>
                        })}
                    </div>
                }
            }),
        Column::new("Trạng thái", "status")
            .sortable()
            .render(|i: &Arc<ProjectItem>, _| status_badge(i.status)),
        Column::new("Ngày bắt đầu", "start_date")
            .sortable()
            .render(|i: &Arc<ProjectItem>, _| view! { <span>{format_date(i.start_date)}</span> }),
        Column::new("Ngày kết thúc", "end_date")
            .sortable()
            .render(|i: &Arc<ProjectItem>, _| view! { <span>{format_date(i.end_date)}</span> }),
        Column::new("Tiến độ", "progress")
            .sortable()
            .min_width(150.0)
            .render(|i: &Arc<ProjectItem>, _| {
                view! { <ProgressBar progress=i.progress status=i.status overdue=item_overdue(i) /> }
            }),
    ];

    let actions = row_actions(move |i: &Arc<ProjectItem>| {
        let edit_id = i.id.clone();
        let delete_id = i.id.clone();
        view! {
            <Button variant="ghost" size="sm" icon_name="edit" title="Sửa"
                on_click=Callback::new(move |_| store.begin_edit(&edit_id)) />
            <Button variant="ghost" size="sm" icon_name="trash" title="Xóa"
                on_click=Callback::new(move |_| store.begin_delete(&delete_id)) />
        }
    });

    let on_confirm_delete = Callback::new(move |_| {
        if let Some(removed) = store.run("delete", |s| s.confirm_delete()) {
            notifications.success(format!("Đã xóa hạng mục {}", removed.name));
        }
    });

    view! {
        <div class="tab-panel">
            <div class="tab-panel__header">
                <h3 class="tab-panel__title">{heading}</h3>
                <Button variant="primary" size="sm" on_click=Callback::new(move |_| store.begin_create())>
                    "+ Thêm hạng mục"
                </Button>
            </div>
            <DataTable
                columns=columns
                records=records
                state=state
                empty_title="Chưa có hạng mục"
                empty_description="Thêm hạng mục đầu tiên cho dự án"
                actions=actions
            />
            <ItemForm vm=vm />
            <ConfirmDelete
                open=store.open_signal(CrudModal::Delete)
                title="Xóa hạng mục".to_string()
                record_name=Signal::derive(move || store.selected().map(|i| i.name.clone()).unwrap_or_default())
                message="Bạn có chắc chắn muốn xóa hạng mục"
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
    use chrono::NaiveDate;
    use contracts::domain::a004_project::seed;
    use contracts::shared::collection::from_seed;

    #[test]
    fn test_items_scoped_to_project() {
        let owner = Owner::new();
        owner.with(|| {
            let store = CrudStore::new(from_seed(seed::project_items()));
            let vm = ItemsViewModel::new(store, "2".into());
            assert_eq!(vm.records().len(), 1);

            store.begin_create();
            vm.load(None);
            vm.form.draft.update(|d| {
                d.name = "Đổ bê tông".into();
                d.start_date = NaiveDate::from_ymd_opt(2026, 4, 16);
                d.end_date = NaiveDate::from_ymd_opt(2026, 6, 1);
            });
            let created = vm.save_command().unwrap();
            assert_eq!(created.project_id, "2");
            assert_eq!(vm.records().len(), 2);
            assert_eq!(store.records().len(), 5);
        });
    }
}
