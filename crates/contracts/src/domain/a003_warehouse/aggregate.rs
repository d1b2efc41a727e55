use crate::domain::common::patch::merge;
use crate::domain::common::{Patch, Record};
use crate::shared::metadata::{FieldPattern, FormErrors, ValidationRules};
use crate::shared::search::{Searchable, Sortable};
use serde::{Deserialize, Serialize};

const NAME_RULES: ValidationRules = ValidationRules::required().min_length(3);
const ADDRESS_RULES: ValidationRules = ValidationRules::required().min_length(5);
const PHONE_RULES: ValidationRules = ValidationRules::required()
    .pattern(FieldPattern::Digits { min: 10, max: 11 })
    .with_error("Số điện thoại không hợp lệ (10-11 số)!");

/// Storage site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Warehouse {
    pub fn from_dto(id: String, dto: &WarehouseDto) -> Self {
        Self {
            id,
            sku: dto.sku.trim().to_string(),
            name: dto.name.trim().to_string(),
            address: dto.address.trim().to_string(),
            phone: dto.phone.trim().to_string(),
        }
    }

    pub fn to_dto(&self) -> WarehouseDto {
        WarehouseDto {
            sku: self.sku.clone(),
            name: self.name.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
        }
    }
}

impl Record for Warehouse {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn record_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "warehouse"
    }

    fn element_name() -> &'static str {
        "Warehouse"
    }

    fn list_name() -> &'static str {
        "Warehouses"
    }
}

impl Searchable for Warehouse {
    fn search_fields() -> &'static [&'static str] {
        &["name", "address"]
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "sku" => Some(self.sku.clone()),
            "name" => Some(self.name.clone()),
            "address" => Some(self.address.clone()),
            "phone" => Some(self.phone.clone()),
            _ => None,
        }
    }
}

impl Sortable for Warehouse {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseDto {
    pub sku: String,
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl WarehouseDto {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check("name", NAME_RULES.validate_string(&self.name, "Tên kho"));
        errors.check("address", ADDRESS_RULES.validate_string(&self.address, "Địa chỉ"));
        errors.check("phone", PHONE_RULES.validate_string(&self.phone, "Số điện thoại"));
        errors.into_result()
    }

    pub fn to_patch(&self) -> WarehousePatch {
        WarehousePatch {
            sku: Some(self.sku.trim().to_string()),
            name: Some(self.name.trim().to_string()),
            address: Some(self.address.trim().to_string()),
            phone: Some(self.phone.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehousePatch {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl Patch for WarehousePatch {
    type Target = Warehouse;

    fn apply(&self, target: &Warehouse) -> Warehouse {
        Warehouse {
            id: target.id.clone(),
            sku: merge(&self.sku, &target.sku),
            name: merge(&self.name, &target.name),
            address: merge(&self.address, &target.address),
            phone: merge(&self.phone, &target.phone),
        }
    }

    fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, address: &str, phone: &str) -> WarehouseDto {
        WarehouseDto {
            sku: "SKU-009".into(),
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }

    #[test]
    fn test_valid_warehouse() {
        assert!(dto("Kho Thủ Đức", "12 Võ Văn Ngân", "0901234567").validate().is_ok());
    }

    #[test]
    fn test_field_rules() {
        let errors = dto("Kh", "abc", "12345").validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Tên kho must have at least 3 characters"));
        assert!(errors.get("address").is_some());
        assert_eq!(errors.get("phone"), Some("Số điện thoại không hợp lệ (10-11 số)!"));

        let empty = dto("", "", "").validate().unwrap_err();
        assert_eq!(empty.get("phone"), Some("Số điện thoại không hợp lệ (10-11 số)!"));
    }

    #[test]
    fn test_search_fields() {
        let w = Warehouse::from_dto("1".into(), &dto("Kho Thủ Đức", "12 Võ Văn Ngân", "0901234567"));
        assert!(w.matches_filter("võ văn"));
        assert!(!w.matches_filter("0901"));
    }
}
