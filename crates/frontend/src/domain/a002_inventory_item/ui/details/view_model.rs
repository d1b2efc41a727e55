use crate::shared::crud::{CrudMode, CrudStore};
use crate::shared::form::FormState;
use contracts::domain::a002_inventory_item::{InventoryItem, InventoryItemDto};
use leptos::prelude::*;
use std::sync::Arc;

/// Choices of the category select
pub const CATEGORY_CHOICES: [&str; 5] = ["Vật liệu xây", "Thép xây dựng", "Gạch xây", "Sơn", "Khác"];

#[derive(Clone, Copy)]
pub struct InventoryDetailsViewModel {
    pub store: CrudStore<InventoryItem>,
    pub form: FormState<InventoryItemDto>,
}

impl InventoryDetailsViewModel {
    pub fn new(store: CrudStore<InventoryItem>) -> Self {
        Self {
            store,
            form: FormState::new(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.store.mode() == CrudMode::Editing
    }

    pub fn load(&self, selected: Option<Arc<InventoryItem>>) {
        self.form
            .reset(selected.map(|i| i.to_dto()).unwrap_or_default());
    }

    /// Validate and commit; status is derived from quantity and minimum stock
    pub fn save_command(&self) -> Option<Arc<InventoryItem>> {
        let dto = self.form.submit(InventoryItemDto::validate)?;
        match self.store.mode() {
            CrudMode::Creating => self
                .store
                .run("create", |s| s.submit_create(|id| InventoryItem::from_dto(id, &dto))),
            CrudMode::Editing => self.store.run("update", |s| s.submit_update(&dto.to_patch())),
            mode => {
                log::warn!("inventory save ignored in {:?}", mode);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_inventory_item::{seed, StockStatus};
    use contracts::shared::collection::from_seed;

    #[test]
    fn test_edit_quantity_rederives_status() {
        let owner = Owner::new();
        owner.with(|| {
            let store = CrudStore::new(from_seed(seed::inventory_items()));
            let vm = InventoryDetailsViewModel::new(store);
            let before = store.records();
            let first = before[0].clone();

            store.begin_edit(&first.id);
            vm.load(store.selected());
            vm.form.draft.update(|d| d.quantity = 0.0);
            let saved = vm.save_command().unwrap();

            assert_eq!(saved.status, StockStatus::OutOfStock);
            assert_eq!(saved.sku, first.sku);
            let after = store.records();
            assert!(!Arc::ptr_eq(&before[0], &after[0]));
            assert!(Arc::ptr_eq(&before[1], &after[1]));
        });
    }

    #[test]
    fn test_create_requires_fields() {
        let owner = Owner::new();
        owner.with(|| {
            let store = CrudStore::new(from_seed(seed::inventory_items()));
            let vm = InventoryDetailsViewModel::new(store);
            let before = store.records().len();

            store.begin_create();
            vm.load(None);
            assert!(vm.save_command().is_none());
            assert!(vm.form.error("sku").get_untracked().is_some());

            vm.form.reset(InventoryItemDto {
                name: "Đá 1x2".into(),
                category: CATEGORY_CHOICES[0].into(),
                sku: "DA-012".into(),
                quantity: 20.0,
                unit: "m³".into(),
                min_stock: 30.0,
                price: 320000.0,
                supplier: "Đá Biên Hòa".into(),
                location: "Kho B-01".into(),
            });
            let created = vm.save_command().unwrap();
            assert_eq!(created.status, StockStatus::LowStock);
            assert_eq!(store.records().len(), before + 1);
        });
    }
}
