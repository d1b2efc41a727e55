use crate::domain::a004_project::ui::progress::{status_badge, ProgressBar};
use crate::shared::format::{format_date, today};
use contracts::domain::a004_project::Project;
use leptos::prelude::*;
use std::sync::Arc;

fn stat(label: &'static str, value: String, modifier: &'static str) -> impl IntoView {
    view! {
        <div class=format!("overview__stat overview__stat--{modifier}")>
            <div class="overview__stat-label">{label}</div>
            <div class="overview__stat-value">{value}</div>
        </div>
    }
}

#[component]
pub fn OverviewTab(
    project: Arc<Project>,
    #[prop(into)]
    staff_count: Signal<usize>,
) -> impl IntoView {
    let schedule = project.schedule(today());
    let (remaining_label, remaining) = if schedule.overdue {
        ("Ngày quá hạn", schedule.days_overdue())
    } else {
        ("Ngày còn lại", schedule.days_remaining.max(0))
    };
    let remaining_modifier = if schedule.overdue { "error" } else { "success" };

    view! {
        <div class="overview">
            <section class="overview__card">
                <h3 class="overview__title">"Thông tin dự án"</h3>
                <dl class="overview__info">
                    <dt>"Trạng thái"</dt>
                    <dd>{status_badge(project.status)}</dd>
                    <dt>"Ngày bắt đầu"</dt>
                    <dd>{format_date(project.start_date)}</dd>
                    <dt>"Ngày kết thúc"</dt>
                    <dd>{format_date(project.end_date)}</dd>
                    <dt>"Mô tả"</dt>
                    <dd>{project.description.clone()}</dd>
                </dl>
            </section>

            <section class="overview__card">
                <h3 class="overview__title">"Tiến độ"</h3>
                <ProgressBar progress=project.progress status=project.status overdue=schedule.overdue />
                <div class="overview__stats">
                    {stat("Ngày đã thực hiện", schedule.days_worked.to_string(), "primary")}
                    {stat(remaining_label, remaining.to_string(), remaining_modifier)}
                    {stat("Tổng số ngày", schedule.total_days.to_string(), "neutral")}
                    <div class="overview__stat overview__stat--neutral">
                        <div class="overview__stat-label">"Nhân sự"</div>
                        <div class="overview__stat-value">{move || staff_count.get().to_string()}</div>
                    </div>
                </div>
            </section>
        </div>
    }
}
