use crate::shared::components::ui::Badge;
use contracts::domain::a004_project::ProjectStatus;
use leptos::prelude::*;

pub fn status_badge(status: ProjectStatus) -> impl IntoView {
    let variant = match status {
        ProjectStatus::Planning => "primary",
        ProjectStatus::InProgress => "warning",
        ProjectStatus::OnHold => "neutral",
        ProjectStatus::Completed => "success",
        ProjectStatus::Cancelled => "error",
    };
    view! { <Badge variant=variant>{status.label()}</Badge> }
}

/// Bar color; overdue work is always red
pub fn progress_class(status: ProjectStatus, overdue: bool) -> &'static str {
    if overdue {
        return "progress__bar progress__bar--error";
    }
    match status {
        ProjectStatus::Planning => "progress__bar progress__bar--primary",
        ProjectStatus::InProgress => "progress__bar progress__bar--warning",
        ProjectStatus::OnHold => "progress__bar progress__bar--hold",
        ProjectStatus::Completed => "progress__bar progress__bar--success",
        ProjectStatus::Cancelled => "progress__bar progress__bar--error",
    }
}

#[component]
pub fn ProgressBar(progress: u8, status: ProjectStatus, #[prop(optional)] overdue: bool) -> impl IntoView {
    let width = format!("width: {}%;", progress.min(100));
    view! {
        <div class="progress">
            <div class="progress__track">
                <div class=progress_class(status, overdue) style=width></div>
            </div>
            <span class="progress__label">{format!("{}%", progress)}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overdue_wins_over_status() {
        assert_eq!(
            progress_class(ProjectStatus::Completed, true),
            "progress__bar progress__bar--error"
        );
        assert_eq!(
            progress_class(ProjectStatus::InProgress, false),
            "progress__bar progress__bar--warning"
        );
    }
}
