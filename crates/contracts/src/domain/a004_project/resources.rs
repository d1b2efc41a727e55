//! Work items, materials and staff attached to a project.

use super::aggregate::{validate_dated_work, ProjectStatus};
use crate::domain::common::patch::merge;
use crate::domain::common::{Patch, Record};
use crate::shared::metadata::{FormErrors, ValidationRules};
use crate::shared::search::{cmp_f64, Searchable, Sortable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// Project item
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub progress: u8,
}

impl ProjectItem {
    pub fn from_dto(id: String, project_id: &str, dto: &ProjectItemDto) -> Self {
        Self {
            id,
            project_id: project_id.to_string(),
            name: dto.name.trim().to_string(),
            description: dto.description.trim().to_string(),
            status: dto.status,
            start_date: dto.start_date.unwrap_or_default(),
            end_date: dto.end_date.unwrap_or_default(),
            progress: dto.progress.min(100),
        }
    }

    pub fn to_dto(&self) -> ProjectItemDto {
        ProjectItemDto {
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
            start_date: Some(self.start_date),
            end_date: Some(self.end_date),
            progress: self.progress,
        }
    }
}

impl Record for ProjectItem {
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
        "project_item"
    }

    fn element_name() -> &'static str {
        "Hạng mục"
    }

    fn list_name() -> &'static str {
        "Danh sách hạng mục"
    }
}

impl Searchable for ProjectItem {
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

impl Sortable for ProjectItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "start_date" => self.start_date.cmp(&other.start_date),
            "end_date" => self.end_date.cmp(&other.end_date),
            "progress" => self.progress.cmp(&other.progress),
            _ => self
                .get_field_value(field)
                .unwrap_or_default()
                .to_lowercase()
                .cmp(&other.get_field_value(field).unwrap_or_default().to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItemDto {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub progress: u8,
}

impl ProjectItemDto {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check(
            "name",
            ValidationRules::required().validate_string(&self.name, "Tên hạng mục"),
        );
        validate_dated_work(&mut errors, self.start_date, self.end_date, self.progress);
        errors.into_result()
    }

    pub fn to_patch(&self) -> ProjectItemPatch {
        ProjectItemPatch {
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            status: Some(self.status),
            start_date: self.start_date,
            end_date: self.end_date,
            progress: Some(self.progress.min(100)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub progress: Option<u8>,
}

impl Patch for ProjectItemPatch {
    type Target = ProjectItem;

    fn apply(&self, target: &ProjectItem) -> ProjectItem {
        ProjectItem {
            id: target.id.clone(),
            project_id: target.project_id.clone(),
            name: merge(&self.name, &target.name),
            description: merge(&self.description, &target.description),
            status: merge(&self.status, &target.status),
            start_date: merge(&self.start_date, &target.start_date),
            end_date: merge(&self.end_date, &target.end_date),
            progress: merge(&self.progress, &target.progress),
        }
    }

    fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

// ============================================================================
// Material
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialStatus {
    #[default]
    Available,
    Ordered,
    OutOfStock,
}

impl MaterialStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialStatus::Available => "available",
            MaterialStatus::Ordered => "ordered",
            MaterialStatus::OutOfStock => "out-of-stock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaterialStatus::Available => "Sẵn có",
            MaterialStatus::Ordered => "Đã đặt hàng",
            MaterialStatus::OutOfStock => "Hết hàng",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|st| st.as_str() == s)
    }

    pub fn all() -> [MaterialStatus; 3] {
        [
            MaterialStatus::Available,
            MaterialStatus::Ordered,
            MaterialStatus::OutOfStock,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub status: MaterialStatus,
}

impl Material {
    pub fn from_dto(id: String, project_id: &str, dto: &MaterialDto) -> Self {
        Self {
            id,
            project_id: project_id.to_string(),
            name: dto.name.trim().to_string(),
            quantity: dto.quantity,
            unit: dto.unit.trim().to_string(),
            status: dto.status,
        }
    }

    pub fn to_dto(&self) -> MaterialDto {
        MaterialDto {
            name: self.name.clone(),
            quantity: self.quantity,
            unit: self.unit.clone(),
            status: self.status,
        }
    }
}

impl Record for Material {
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
        "project_material"
    }

    fn element_name() -> &'static str {
        "Vật tư"
    }

    fn list_name() -> &'static str {
        "Danh sách vật tư"
    }
}

impl Searchable for Material {
    fn search_fields() -> &'static [&'static str] {
        &["name", "unit"]
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "quantity" => Some(self.quantity.to_string()),
            "unit" => Some(self.unit.clone()),
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }
}

impl Sortable for Material {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "quantity" => cmp_f64(self.quantity, other.quantity),
            _ => self
                .get_field_value(field)
                .unwrap_or_default()
                .to_lowercase()
                .cmp(&other.get_field_value(field).unwrap_or_default().to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDto {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub status: MaterialStatus,
}

impl MaterialDto {
    /// Draft used by the "add material" button
    pub fn placeholder() -> Self {
        Self {
            name: "Vật tư mới".into(),
            quantity: 0.0,
            unit: "cái".into(),
            status: MaterialStatus::Available,
        }
    }

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check(
            "name",
            ValidationRules::required().validate_string(&self.name, "Tên vật tư"),
        );
        errors.check(
            "unit",
            ValidationRules::required().validate_string(&self.unit, "Đơn vị"),
        );
        errors.check(
            "quantity",
            ValidationRules::none()
                .at_least(0.0)
                .validate_number(self.quantity, "Số lượng"),
        );
        errors.into_result()
    }

    pub fn to_patch(&self) -> MaterialPatch {
        MaterialPatch {
            name: Some(self.name.trim().to_string()),
            quantity: Some(self.quantity),
            unit: Some(self.unit.trim().to_string()),
            status: Some(self.status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialPatch {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub status: Option<MaterialStatus>,
}

impl Patch for MaterialPatch {
    type Target = Material;

    fn apply(&self, target: &Material) -> Material {
        Material {
            id: target.id.clone(),
            project_id: target.project_id.clone(),
            name: merge(&self.name, &target.name),
            quantity: merge(&self.quantity, &target.quantity),
            unit: merge(&self.unit, &target.unit),
            status: merge(&self.status, &target.status),
        }
    }

    fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

// ============================================================================
// Staff
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffStatus {
    #[default]
    Active,
    Inactive,
}

impl StaffStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffStatus::Active => "active",
            StaffStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StaffStatus::Active => "Đang làm việc",
            StaffStatus::Inactive => "Nghỉ",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|st| st.as_str() == s)
    }

    pub fn all() -> [StaffStatus; 2] {
        [StaffStatus::Active, StaffStatus::Inactive]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub role: String,
    pub status: StaffStatus,
}

impl Staff {
    pub fn from_dto(id: String, project_id: &str, dto: &StaffDto) -> Self {
        Self {
            id,
            project_id: project_id.to_string(),
            name: dto.name.trim().to_string(),
            role: dto.role.trim().to_string(),
            status: dto.status,
        }
    }

    pub fn to_dto(&self) -> StaffDto {
        StaffDto {
            name: self.name.clone(),
            role: self.role.clone(),
            status: self.status,
        }
    }
}

impl Record for Staff {
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
        "project_staff"
    }

    fn element_name() -> &'static str {
        "Nhân sự"
    }

    fn list_name() -> &'static str {
        "Danh sách nhân sự"
    }
}

impl Searchable for Staff {
    fn search_fields() -> &'static [&'static str] {
        &["name", "role"]
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "role" => Some(self.role.clone()),
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }
}

impl Sortable for Staff {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffDto {
    pub name: String,
    pub role: String,
    pub status: StaffStatus,
}

impl StaffDto {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let required = ValidationRules::required();
        let mut errors = FormErrors::new();
        errors.check("name", required.validate_string(&self.name, "Họ tên"));
        errors.check("role", required.validate_string(&self.role, "Vai trò"));
        errors.into_result()
    }

    pub fn to_patch(&self) -> StaffPatch {
        StaffPatch {
            name: Some(self.name.trim().to_string()),
            role: Some(self.role.trim().to_string()),
            status: Some(self.status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub status: Option<StaffStatus>,
}

impl Patch for StaffPatch {
    type Target = Staff;

    fn apply(&self, target: &Staff) -> Staff {
        Staff {
            id: target.id.clone(),
            project_id: target.project_id.clone(),
            name: merge(&self.name, &target.name),
            role: merge(&self.role, &target.role),
            status: merge(&self.status, &target.status),
        }
    }

    fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_patch_keeps_project() {
        let m = Material::from_dto("m1".into(), "p1", &MaterialDto::placeholder());
        assert_eq!(m.project_id, "p1");
        assert_eq!(m.name, "Vật tư mới");

        let patch = MaterialPatch {
            quantity: Some(12.5),
            status: Some(MaterialStatus::Ordered),
            ..Default::default()
        };
        let next = patch.apply(&m);
        assert_eq!(next.project_id, "p1");
        assert_eq!(next.quantity, 12.5);
        assert_eq!(next.unit, "cái");
    }

    #[test]
    fn test_resource_validation() {
        assert!(MaterialDto::placeholder().validate().is_ok());
        let bad = MaterialDto {
            quantity: -3.0,
            unit: " ".into(),
            ..MaterialDto::placeholder()
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.get("unit").is_some());
        assert!(errors.get("quantity").is_some());

        let staff = StaffDto {
            name: "Nguyễn Văn A".into(),
            ..Default::default()
        };
        assert_eq!(staff.validate().unwrap_err().get("role"), Some("Vai trò is required"));
    }

    #[test]
    fn test_item_validation_shares_date_rules() {
        let dto = ProjectItemDto {
            name: "Đổ móng".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 10),
            progress: 10,
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        let item = ProjectItem::from_dto("i1".into(), "p1", &dto);
        assert_eq!(item.to_dto(), dto);
    }
}
