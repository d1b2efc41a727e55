use crate::domain::common::patch::merge;
use crate::domain::common::{Patch, Record};
use crate::shared::metadata::{FormErrors, ValidationRules};
use crate::shared::search::{Searchable, Sortable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    #[default]
    Active,
    Inactive,
}

impl CategoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryStatus::Active => "active",
            CategoryStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryStatus::Active => "Active",
            CategoryStatus::Inactive => "Inactive",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "inactive" => CategoryStatus::Inactive,
            _ => CategoryStatus::Active,
        }
    }

    pub fn all() -> [CategoryStatus; 2] {
        [CategoryStatus::Active, CategoryStatus::Inactive]
    }
}

/// Material category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: String,
    pub status: CategoryStatus,
}

impl Category {
    /// Build a record from a validated draft
    pub fn from_dto(id: String, dto: &CategoryDto) -> Self {
        Self {
            id,
            code: dto.code.trim().to_string(),
            name: dto.name.trim().to_string(),
            description: dto.description.trim().to_string(),
            status: dto.status,
        }
    }

    pub fn to_dto(&self) -> CategoryDto {
        CategoryDto {
            code: self.code.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
        }
    }
}

impl Record for Category {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn record_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "category"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }
}

impl Searchable for Category {
    fn search_fields() -> &'static [&'static str] {
        &["name", "description"]
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "code" => Some(self.code.clone()),
            "name" => Some(self.name.clone()),
            "description" => Some(self.description.clone()),
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }
}

impl Sortable for Category {}

/// Form values for create and edit
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub code: String,
    pub name: String,
    pub description: String,
    pub status: CategoryStatus,
}

impl CategoryDto {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check(
            "name",
            ValidationRules::required()
                .max_length(100)
                .validate_string(&self.name, "Category name"),
        );
        errors.check(
            "code",
            ValidationRules::none()
                .max_length(20)
                .validate_string(&self.code, "Code"),
        );
        errors.check(
            "description",
            ValidationRules::none()
                .max_length(500)
                .validate_string(&self.description, "Description"),
        );
        errors.into_result()
    }

    /// Patch carrying every field of the draft
    pub fn to_patch(&self) -> CategoryPatch {
        CategoryPatch {
            code: Some(self.code.trim().to_string()),
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            status: Some(self.status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<CategoryStatus>,
}

impl Patch for CategoryPatch {
    type Target = Category;

    fn apply(&self, target: &Category) -> Category {
        Category {
            id: target.id.clone(),
            code: merge(&self.code, &target.code),
            name: merge(&self.name, &target.name),
            description: merge(&self.description, &target.description),
            status: merge(&self.status, &target.status),
        }
    }

    fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vlxd() -> Category {
        Category {
            id: "1".into(),
            code: "VLXD".into(),
            name: "Building materials".into(),
            description: "Cement, sand, bricks".into(),
            status: CategoryStatus::Active,
        }
    }

    #[test]
    fn test_patch_overrides_only_present_fields() {
        let patch = CategoryPatch {
            status: Some(CategoryStatus::Inactive),
            ..Default::default()
        };
        let next = patch.apply(&vlxd());
        assert_eq!(next.status, CategoryStatus::Inactive);
        assert_eq!(next.code, "VLXD");
        assert_eq!(next.name, "Building materials");
        assert_eq!(next.id, "1");
        assert!(!patch.is_empty());
        assert!(CategoryPatch::default().is_empty());
    }

    #[test]
    fn test_validate_requires_name() {
        let dto = CategoryDto::default();
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Category name is required"));

        let ok = CategoryDto {
            name: "Books".into(),
            description: "Educational".into(),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_dto_round_trip_and_json_shape() {
        let c = vlxd();
        assert_eq!(Category::from_dto("1".into(), &c.to_dto()), c);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["status"], "active");
        assert_eq!(json["code"], "VLXD");
    }
}
