use super::tabs::{ItemsTab, MaterialsTab, OverviewTab, ProjectTab, StaffTab};
use super::{ProjectDetails, ProjectDetailsViewModel};
use crate::domain::a004_project::ui::progress::status_badge;
use crate::domain::a004_project::ui::workspace::use_project_workspace;
use crate::shared::components::ui::Button;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a004_project::Project;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_params_map};
use std::sync::Arc;

#[component]
fn ProjectNotFound(id: String) -> impl IntoView {
    log::warn!("project {} not found", id);
    view! {
        <div class="not-found-panel">
            <h2 class="not-found-panel__title">"Không tìm thấy dự án"</h2>
            <p class="not-found-panel__text">
                {format!("Dự án với mã \"{}\" không tồn tại hoặc đã bị xóa.", id)}
            </p>
            <A href="/dashboard/projects">"Quay lại danh sách"</A>
        </div>
    }
}

#[component]
fn TabNav(project_id: String, #[prop(into)] active: Signal<ProjectTab>) -> impl IntoView {
    view! {
        <nav class="tabs">
            {ProjectTab::all().into_iter().map(|tab| {
                let class = move || {
                    if active.get() == tab { "tabs__tab tabs__tab--active" } else { "tabs__tab" }
                };
                view! {
                    <span class=class>
                        <A href=tab.href(&project_id)>{tab.label()}</A>
                    </span>
                }
            }).collect_view()}
        </nav>
    }
}

/// `/dashboard/projects/:id`
#[component]
pub fn ProjectDetail() -> impl IntoView {
    let workspace = use_project_workspace();
    let params = use_params_map();
    let location = use_location();

    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let tab = Signal::derive(move || ProjectTab::from_query(&location.search.get()));
    let project = Memo::new(move |_| workspace.project(&id.get()));
    let staff_count = Signal::derive(move || {
        let id = id.get();
        workspace
            .staff
            .records()
            .iter()
            .filter(|s| s.project_id == id)
            .count()
    });

    let details = ProjectDetailsViewModel::new(workspace.projects);

    let body = move |p: Arc<Project>| {
        let edit_id = p.id.clone();
        let project_id = p.id.clone();
        let tab_project = Arc::clone(&p);
        view! {
            <div class="detail-header">
                <A href="/dashboard/projects">"← Quay lại danh sách"</A>
                <div class="detail-header__row">
                    <div>
                        <h1 class="page__title">{p.name.clone()}</h1>
                        <p class="detail-header__description">{p.description.clone()}</p>
                    </div>
                    <div class="detail-header__actions">
                        {status_badge(p.status)}
                        <Button variant="secondary" icon_name="edit"
                            on_click=Callback::new(move |_| workspace.projects.begin_edit(&edit_id))>
                            "Chỉnh sửa"
                        </Button>
                    </div>
                </div>
            </div>
            <TabNav project_id=project_id.clone() active=tab />
            <div class="tabs__content">
                {move || {
                    let project_id = project_id.clone();
                    match tab.get() {
                        ProjectTab::Overview => view! {
                            <OverviewTab project=Arc::clone(&tab_project) staff_count=staff_count />
                        }.into_any(),
                        ProjectTab::Items => view! { <ItemsTab project_id=project_id /> }.into_any(),
                        ProjectTab::Materials => view! { <MaterialsTab project_id=project_id /> }.into_any(),
                        ProjectTab::Staff => view! { <StaffTab project_id=project_id /> }.into_any(),
                    }
                }}
            </div>
        }
    };

    view! {
        <PageFrame page_id="a004_project--detail" category=PAGE_CAT_DETAIL>
            {move || match project.get() {
                Some(p) => body(p).into_any(),
                None => view! { <ProjectNotFound id=id.get() /> }.into_any(),
            }}
            <ProjectDetails vm=details />
        </PageFrame>
    }
}
