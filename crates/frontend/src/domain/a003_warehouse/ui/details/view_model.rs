use crate::shared::crud::{CrudMode, CrudStore};
use crate::shared::form::FormState;
use contracts::domain::a003_warehouse::{Warehouse, WarehouseDto};
use leptos::prelude::*;
use std::sync::Arc;

/// Next free `SKU-NNN` code after the highest one in use
pub fn next_sku(records: &[Arc<Warehouse>]) -> String {
    let highest = records
        .iter()
        .filter_map(|w| w.sku.strip_prefix("SKU-"))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("SKU-{:03}", highest + 1)
}

#[derive(Clone, Copy)]
pub struct WarehouseDetailsViewModel {
    pub store: CrudStore<Warehouse>,
    pub form: FormState<WarehouseDto>,
}

impl WarehouseDetailsViewModel {
    pub fn new(store: CrudStore<Warehouse>) -> Self {
        Self {
            store,
            form: FormState::new(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.store.mode() == CrudMode::Editing
    }

    pub fn load(&self, selected: Option<Arc<Warehouse>>) {
        let dto = match selected {
            Some(w) => w.to_dto(),
            None => WarehouseDto {
                sku: next_sku(&self.store.records()),
                ..Default::default()
            },
        };
        self.form.reset(dto);
    }

    pub fn save_command(&self) -> Option<Arc<Warehouse>> {
        let dto = self.form.submit(WarehouseDto::validate)?;
        match self.store.mode() {
            CrudMode::Creating => self
                .store
                .run("create", |s| s.submit_create(|id| Warehouse::from_dto(id, &dto))),
            CrudMode::Editing => self.store.run("update", |s| s.submit_update(&dto.to_patch())),
            mode => {
                log::warn!("warehouse save ignored in {:?}", mode);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_warehouse::seed;
    use contracts::shared::collection::from_seed;

    #[test]
    fn test_next_sku() {
        let records = from_seed(seed::warehouses());
        assert_eq!(next_sku(&records), "SKU-003");
        assert_eq!(next_sku(&[]), "SKU-001");
    }

    #[test]
    fn test_create_assigns_sku() {
        let owner = Owner::new();
        owner.with(|| {
            let store = CrudStore::new(from_seed(seed::warehouses()));
            let vm = WarehouseDetailsViewModel::new(store);

            store.begin_create();
            vm.load(None);
            vm.form.draft.update(|d| {
                d.name = "Kho Long An".into();
                d.address = "KCN Tân Đức, Long An".into();
                d.phone = "0272123456".into();
            });
            let created = vm.save_command().unwrap();
            assert_eq!(created.sku, "SKU-003");
            assert_eq!(store.records().len(), 3);
        });
    }

    #[test]
    fn test_short_name_rejected() {
        let owner = Owner::new();
        owner.with(|| {
            let store = CrudStore::new(from_seed(seed::warehouses()));
            let vm = WarehouseDetailsViewModel::new(store);

            store.begin_edit("1");
            vm.load(store.selected());
            vm.form.draft.update(|d| d.name = "K1".into());
            assert!(vm.save_command().is_none());
            assert!(vm.form.error("name").get_untracked().is_some());
            assert_eq!(store.records()[0].name, "Warehouse 1");
        });
    }
}
