use crate::domain::common::patch::merge;
use crate::domain::common::{Patch, Record};
use crate::shared::metadata::{FormErrors, ValidationRules};
use crate::shared::search::{cmp_f64, Searchable, Sortable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const PROGRESS_RULES: ValidationRules = ValidationRules::none()
    .range(0.0, 100.0)
    .with_error("Giá trị từ 0-100!");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::OnHold => "on-hold",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Lên kế hoạch",
            ProjectStatus::InProgress => "Đang thực hiện",
            ProjectStatus::OnHold => "Tạm dừng",
            ProjectStatus::Completed => "Hoàn thành",
            ProjectStatus::Cancelled => "Đã hủy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|st| st.as_str() == s)
    }

    pub fn all() -> [ProjectStatus; 5] {
        [
            ProjectStatus::Planning,
            ProjectStatus::InProgress,
            ProjectStatus::OnHold,
            ProjectStatus::Completed,
            ProjectStatus::Cancelled,
        ]
    }
}

/// Day counts of a dated piece of work relative to `today`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// Days from start until today, capped at the end date
    pub days_worked: i64,
    /// Days from today until the end date, negative once past it
    pub days_remaining: i64,
    pub total_days: i64,
    pub overdue: bool,
}

impl Schedule {
    pub fn compute(
        start: NaiveDate,
        end: NaiveDate,
        status: ProjectStatus,
        today: NaiveDate,
    ) -> Self {
        let days_remaining = (end - today).num_days();
        Self {
            days_worked: (today.min(end) - start).num_days().max(0),
            days_remaining,
            total_days: (end - start).num_days(),
            overdue: days_remaining < 0 && status != ProjectStatus::Completed,
        }
    }

    /// Days overdue, zero when on time
    pub fn days_overdue(&self) -> i64 {
        if self.overdue {
            -self.days_remaining
        } else {
            0
        }
    }
}

/// Construction project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// 0..=100
    pub progress: u8,
    pub assigned_staff: Vec<String>,
}

impl Project {
    pub fn from_dto(id: String, dto: &ProjectDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            description: dto.description.trim().to_string(),
            status: dto.status,
            start_date: dto.start_date.unwrap_or_default(),
            end_date: dto.end_date.unwrap_or_default(),
            progress: dto.progress.min(100),
            assigned_staff: Vec::new(),
        }
    }

    pub fn to_dto(&self) -> ProjectDto {
        ProjectDto {
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
            start_date: Some(self.start_date),
            end_date: Some(self.end_date),
            progress: self.progress,
        }
    }

    pub fn schedule(&self, today: NaiveDate) -> Schedule {
        Schedule::compute(self.start_date, self.end_date, self.status, today)
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.schedule(today).overdue
    }

    /// Negative once the end date has passed
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        self.schedule(today).days_remaining
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, ProjectStatus::Planning | ProjectStatus::InProgress)
    }
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn record_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "project"
    }

    fn element_name() -> &'static str {
        "Dự án"
    }

    fn list_name() -> &'static str {
        "Quản lý dự án"
    }
}

impl Searchable for Project {
    fn search_fields() -> &'static [&'static str] {
        &["name", "description"]
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "description" => Some(self.description.clone()),
            "status" => Some(self.status.label().to_string()),
            "start_date" => Some(self.start_date.to_string()),
            "end_date" => Some(self.end_date.to_string()),
            "progress" => Some(self.progress.to_string()),
            _ => None,
        }
    }
}

impl Sortable for Project {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "start_date" => self.start_date.cmp(&other.start_date),
            "end_date" => self.end_date.cmp(&other.end_date),
            "progress" => cmp_f64(self.progress as f64, other.progress as f64),
            "status" => (self.status as u8).cmp(&(other.status as u8)),
            _ => self
                .get_field_value(field)
                .unwrap_or_default()
                .to_lowercase()
                .cmp(&other.get_field_value(field).unwrap_or_default().to_lowercase()),
        }
    }
}

/// Checks shared by projects and project items
pub(crate) fn validate_dated_work(
    errors: &mut FormErrors,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    progress: u8,
) {
    if start.is_none() {
        errors.add("start_date", "Vui lòng chọn ngày bắt đầu!");
    }
    match (start, end) {
        (_, None) => errors.add("end_date", "Vui lòng chọn ngày kết thúc!"),
        (Some(s), Some(e)) if e < s => {
            errors.add("end_date", "Ngày kết thúc phải sau ngày bắt đầu!")
        }
        _ => {}
    }
    errors.check("progress", PROGRESS_RULES.validate_number(progress as f64, "Tiến độ"));
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub progress: u8,
}

impl ProjectDto {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check(
            "name",
            ValidationRules::required()
                .with_error("Vui lòng nhập tên dự án!")
                .validate_string(&self.name, "Tên dự án"),
        );
        validate_dated_work(&mut errors, self.start_date, self.end_date, self.progress);
        errors.into_result()
    }

    pub fn to_patch(&self) -> ProjectPatch {
        ProjectPatch {
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            status: Some(self.status),
            start_date: self.start_date,
            end_date: self.end_date,
            progress: Some(self.progress.min(100)),
            assigned_staff: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub progress: Option<u8>,
    pub assigned_staff: Option<Vec<String>>,
}

impl Patch for ProjectPatch {
    type Target = Project;

    fn apply(&self, target: &Project) -> Project {
        Project {
            id: target.id.clone(),
            name: merge(&self.name, &target.name),
            description: merge(&self.description, &target.description),
            status: merge(&self.status, &target.status),
            start_date: merge(&self.start_date, &target.start_date),
            end_date: merge(&self.end_date, &target.end_date),
            progress: merge(&self.progress, &target.progress),
            assigned_staff: merge(&self.assigned_staff, &target.assigned_staff),
        }
    }

    fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn project(status: ProjectStatus) -> Project {
        Project {
            id: "p1".into(),
            name: "Nhà xưởng".into(),
            description: String::new(),
            status,
            start_date: d(2025, 1, 1),
            end_date: d(2025, 1, 31),
            progress: 40,
            assigned_staff: vec!["s1".into()],
        }
    }

    #[test]
    fn test_schedule_in_progress() {
        let s = project(ProjectStatus::InProgress).schedule(d(2025, 1, 11));
        assert_eq!(s.days_worked, 10);
        assert_eq!(s.days_remaining, 20);
        assert_eq!(s.total_days, 30);
        assert!(!s.overdue);
    }

    #[test]
    fn test_overdue_unless_completed() {
        let late = d(2025, 2, 5);
        let s = project(ProjectStatus::InProgress).schedule(late);
        assert!(s.overdue);
        assert_eq!(s.days_overdue(), 5);
        assert_eq!(project(ProjectStatus::InProgress).days_remaining(late), -5);
        assert_eq!(s.days_worked, 30);
        assert!(!project(ProjectStatus::Completed).is_overdue(late));
        // end date itself is not overdue
        assert!(!project(ProjectStatus::OnHold).is_overdue(d(2025, 1, 31)));
    }

    #[test]
    fn test_validate_dates_and_progress() {
        let dto = ProjectDto {
            name: "A".into(),
            start_date: Some(d(2025, 3, 1)),
            end_date: Some(d(2025, 2, 1)),
            progress: 120,
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("end_date"), Some("Ngày kết thúc phải sau ngày bắt đầu!"));
        assert_eq!(errors.get("progress"), Some("Giá trị từ 0-100!"));

        let missing = ProjectDto::default().validate().unwrap_err();
        assert!(missing.get("name").is_some());
        assert!(missing.get("start_date").is_some());
        assert!(missing.get("end_date").is_some());
    }

    #[test]
    fn test_patch_keeps_staff() {
        let p = project(ProjectStatus::Planning);
        let mut dto = p.to_dto();
        dto.status = ProjectStatus::InProgress;
        let next = dto.to_patch().apply(&p);
        assert_eq!(next.status, ProjectStatus::InProgress);
        assert_eq!(next.assigned_staff, p.assigned_staff);
        assert_eq!(serde_json::to_value(ProjectStatus::OnHold).unwrap(), "on-hold");
    }
}
