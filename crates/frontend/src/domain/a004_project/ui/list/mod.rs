use crate::domain::a004_project::ui::details::{ProjectDetails, ProjectDetailsViewModel};
use crate::domain::a004_project::ui::progress::{status_badge, ProgressBar};
use crate::domain::a004_project::ui::workspace::use_project_workspace;
use crate::shared::components::confirm_delete::ConfirmDelete;
use crate::shared::components::data_table::{row_actions, Column, DataTable};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::config::use_config;
use crate::shared::crud::CrudModal;
use crate::shared::export::ExcelExportable;
use crate::shared::format::{format_date, today};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::list_view::ListViewState;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a004_project::Project;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::sync::Arc;

impl ExcelExportable for Project {
    fn headers() -> Vec<&'static str> {
        vec!["Tên dự án", "Mô tả", "Trạng thái", "Ngày bắt đầu", "Ngày kết thúc", "Tiến độ (%)"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.description.clone(),
            self.status.label().to_string(),
            format_date(self.start_date),
            format_date(self.end_date),
            self.progress.to_string(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProjectList() -> impl IntoView {
    let config = use_config();
    let notifications = use_notifications();
    let store = use_project_workspace().projects;
    let state = RwSignal::new(ListViewState::with_page_size(config.table.default_page_size));
    let details = ProjectDetailsViewModel::new(store);
    let navigate = StoredValue::new_local(use_navigate());

    let records = Signal::derive(move || store.records());
    let total = Signal::derive(move || Some(format!("Tổng số: {} dự án", records.with(|r| r.len()))));

    let columns = vec![
        Column::new("Tên dự án", "name")
            .sortable()
            .min_width(250.0)
            .render(|p: &Arc<Project>, query| {
                view! {
                    <div class="cell-stack">
                        <div class="cell-stack__main">{highlight_matches(&p.name, query)}</div>
                        {(!p.description.is_empty()).then(|| view! {
                            <div class="cell-stack__sub">{highlight_matches(&p.description, query)}</div>
                        })}
                    </div>
                }
            }),
        Column::new("Trạng thái", "status")
            .sortable()
            .min_width(150.0)
            .render(|p: &Arc<Project>, _| status_badge(p.status)),
        Column::new("Ngày bắt đầu", "start_date")
            .sortable()
            .min_width(130.0)
            .render(|p: &Arc<Project>, _| view! { <span>{format_date(p.start_date)}</span> }),
        Column::new("Ngày kết thúc", "end_date")
            .sortable()
            .min_width(130.0)
            .render(|p: &Arc<Project>, _| view! { <span>{format_date(p.end_date)}</span> }),
        Column::new("Tiến độ", "progress")
            .sortable()
            .min_width(150.0)
            .render(|p: &Arc<Project>, _| {
                view! { <ProgressBar progress=p.progress status=p.status overdue=p.is_overdue(today()) /> }
            }),
    ];

    let actions = row_actions(move |p: &Arc<Project>| {
        let edit_id = p.id.clone();
        let delete_id = p.id.clone();
        view! {
            <Button variant="ghost" size="sm" icon_name="edit" title="Chỉnh sửa"
                on_click=Callback::new(move |_| store.begin_edit(&edit_id)) />
            <Button variant="ghost" size="sm" icon_name="trash" title="Xóa"
                on_click=Callback::new(move |_| store.begin_delete(&delete_id)) />
        }
    });

    let open_detail = Callback::new(move |p: Arc<Project>| {
        navigate.with_value(|nav| nav(&format!("/dashboard/projects/{}", p.id), NavigateOptions::default()));
    });

    let on_confirm_delete = Callback::new(move |_| {
        if let Some(removed) = store.run("delete", |s| s.confirm_delete()) {
            notifications.success(format!("Đã xóa dự án {}", removed.name));
        }
    });

    view! {
        <PageFrame page_id="a004_project--list" category=PAGE_CAT_LIST>
            <PageHeader title="Quản lý dự án".to_string() subtitle=total>
                <SearchInput
                    placeholder="Tìm kiếm dự án..."
                    on_change=Callback::new(move |q: String| state.update(|s| s.set_query(&q)))
                />
                <Button variant="primary" icon_name="plus" on_click=Callback::new(move |_| store.begin_create())>
                    "Thêm dự án"
                </Button>
            </PageHeader>

            <DataTable
                columns=columns
                records=records
                state=state
                empty_title="Không tìm thấy dự án"
                empty_description="Hãy thử tìm kiếm từ khóa khác hoặc thêm mới"
                actions=actions
                on_row_click=open_detail
            />

            <ProjectDetails vm=details />
            <ConfirmDelete
                open=store.open_signal(CrudModal::Delete)
                title="Xóa dự án".to_string()
                record_name=Signal::derive(move || store.selected().map(|p| p.name.clone()).unwrap_or_default())
                message="Bạn có chắc chắn muốn xóa dự án"
                confirm_label="Xóa"
                cancel_label="Hủy"
                on_confirm=on_confirm_delete
                on_cancel=store.on_cancel()
            />
        </PageFrame>
    }
}
