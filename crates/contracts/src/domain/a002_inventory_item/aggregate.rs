use crate::domain::common::patch::merge;
use crate::domain::common::{Patch, Record};
use crate::shared::metadata::{FormErrors, ValidationRules};
use crate::shared::search::{cmp_f64, Searchable, Sortable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Stock level relative to the minimum stock of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Status implied by the current quantity
    pub fn derive(quantity: f64, min_stock: f64) -> Self {
        if quantity <= 0.0 {
            StockStatus::OutOfStock
        } else if quantity < min_stock {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "Còn hàng",
            StockStatus::LowStock => "Sắp hết",
            StockStatus::OutOfStock => "Hết hàng",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|st| st.as_str() == s)
    }

    pub fn all() -> [StockStatus; 3] {
        [
            StockStatus::InStock,
            StockStatus::LowStock,
            StockStatus::OutOfStock,
        ]
    }
}

/// Construction material held in stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub sku: String,
    pub quantity: f64,
    pub unit: String,
    pub min_stock: f64,
    /// Unit price in VND
    pub price: f64,
    pub supplier: String,
    pub location: String,
    pub status: StockStatus,
}

impl InventoryItem {
    pub fn from_dto(id: String, dto: &InventoryItemDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            category: dto.category.trim().to_string(),
            sku: dto.sku.trim().to_string(),
            quantity: dto.quantity,
            unit: dto.unit.trim().to_string(),
            min_stock: dto.min_stock,
            price: dto.price,
            supplier: dto.supplier.trim().to_string(),
            location: dto.location.trim().to_string(),
            status: StockStatus::derive(dto.quantity, dto.min_stock),
        }
    }

    pub fn to_dto(&self) -> InventoryItemDto {
        InventoryItemDto {
            name: self.name.clone(),
            category: self.category.clone(),
            sku: self.sku.clone(),
            quantity: self.quantity,
            unit: self.unit.clone(),
            min_stock: self.min_stock,
            price: self.price,
            supplier: self.supplier.clone(),
            location: self.location.clone(),
        }
    }

    /// Quantity times unit price
    pub fn stock_value(&self) -> f64 {
        self.quantity * self.price
    }

    pub fn needs_restock(&self) -> bool {
        self.status != StockStatus::InStock
    }
}

impl Record for InventoryItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn record_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "inventory_item"
    }

    fn element_name() -> &'static str {
        "Vật tư"
    }

    fn list_name() -> &'static str {
        "Quản lý vật tư"
    }
}

impl Searchable for InventoryItem {
    fn search_fields() -> &'static [&'static str] {
        &["name", "sku"]
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "sku" => Some(self.sku.clone()),
            "category" => Some(self.category.clone()),
            "quantity" => Some(self.quantity.to_string()),
            "unit" => Some(self.unit.clone()),
            "min_stock" => Some(self.min_stock.to_string()),
            "price" => Some(self.price.to_string()),
            "supplier" => Some(self.supplier.clone()),
            "location" => Some(self.location.clone()),
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }
}

impl Sortable for InventoryItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "quantity" => cmp_f64(self.quantity, other.quantity),
            "min_stock" => cmp_f64(self.min_stock, other.min_stock),
            "price" => cmp_f64(self.price, other.price),
            "status" => (self.status as u8).cmp(&(other.status as u8)),
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
pub struct InventoryItemDto {
    pub name: String,
    pub category: String,
    pub sku: String,
    pub quantity: f64,
    pub unit: String,
    pub min_stock: f64,
    pub price: f64,
    pub supplier: String,
    pub location: String,
}

impl InventoryItemDto {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let required = ValidationRules::required();
        let non_negative = ValidationRules::none().at_least(0.0);

        let mut errors = FormErrors::new();
        errors.check("sku", required.max_length(30).validate_string(&self.sku, "Mã SKU"));
        errors.check("name", required.validate_string(&self.name, "Tên vật tư"));
        errors.check("category", required.validate_string(&self.category, "Danh mục"));
        errors.check("unit", required.validate_string(&self.unit, "Đơn vị"));
        errors.check("supplier", required.validate_string(&self.supplier, "Nhà cung cấp"));
        errors.check("location", required.validate_string(&self.location, "Vị trí kho"));
        errors.check("quantity", non_negative.validate_number(self.quantity, "Số lượng"));
        errors.check("min_stock", non_negative.validate_number(self.min_stock, "Tồn kho tối thiểu"));
        errors.check("price", non_negative.validate_number(self.price, "Đơn giá"));
        errors.into_result()
    }

    pub fn to_patch(&self) -> InventoryItemPatch {
        InventoryItemPatch {
            name: Some(self.name.trim().to_string()),
            category: Some(self.category.trim().to_string()),
            sku: Some(self.sku.trim().to_string()),
            quantity: Some(self.quantity),
            unit: Some(self.unit.trim().to_string()),
            min_stock: Some(self.min_stock),
            price: Some(self.price),
            supplier: Some(self.supplier.trim().to_string()),
            location: Some(self.location.trim().to_string()),
        }
    }
}

/// Partial update. Status is not patchable, it follows quantity and minimum stock.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub sku: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub min_stock: Option<f64>,
    pub price: Option<f64>,
    pub supplier: Option<String>,
    pub location: Option<String>,
}

impl Patch for InventoryItemPatch {
    type Target = InventoryItem;

    fn apply(&self, target: &InventoryItem) -> InventoryItem {
        let quantity = merge(&self.quantity, &target.quantity);
        let min_stock = merge(&self.min_stock, &target.min_stock);
        InventoryItem {
            id: target.id.clone(),
            name: merge(&self.name, &target.name),
            category: merge(&self.category, &target.category),
            sku: merge(&self.sku, &target.sku),
            quantity,
            unit: merge(&self.unit, &target.unit),
            min_stock,
            price: merge(&self.price, &target.price),
            supplier: merge(&self.supplier, &target.supplier),
            location: merge(&self.location, &target.location),
            status: StockStatus::derive(quantity, min_stock),
        }
    }

    fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_inventory_item::seed;

    #[test]
    fn test_stock_status_derivation() {
        assert_eq!(StockStatus::derive(0.0, 5.0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::derive(45.0, 50.0), StockStatus::LowStock);
        assert_eq!(StockStatus::derive(50.0, 50.0), StockStatus::InStock);
    }

    #[test]
    fn test_seed_status_is_consistent() {
        for item in seed::inventory_items() {
            assert_eq!(item.status, StockStatus::derive(item.quantity, item.min_stock), "{}", item.sku);
        }
    }

    #[test]
    fn test_patch_rederives_status() {
        let cement = seed::inventory_items().remove(0);
        let patch = InventoryItemPatch {
            quantity: Some(20.0),
            ..Default::default()
        };
        let next = patch.apply(&cement);
        assert_eq!(next.status, StockStatus::LowStock);
        assert_eq!(next.sku, cement.sku);
        assert_eq!(next.price, cement.price);
    }

    #[test]
    fn test_validate() {
        let dto = InventoryItemDto {
            quantity: -1.0,
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.get("sku").is_some());
        assert!(errors.get("quantity").is_some());
        assert!(errors.get("price").is_none());

        let ok = seed::inventory_items()[1].to_dto();
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_numeric_sort() {
        let items = seed::inventory_items();
        // "1500" < "85000" numerically, not as text
        assert_eq!(items[3].compare_by_field(&items[0], "price"), Ordering::Less);
        assert_eq!(StockStatus::from_str("low-stock"), Some(StockStatus::LowStock));
        assert_eq!(serde_json::to_value(StockStatus::OutOfStock).unwrap(), "out-of-stock");
    }
}
