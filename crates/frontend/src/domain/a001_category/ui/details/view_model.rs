use crate::shared::crud::{CrudMode, CrudStore};
use crate::shared::form::FormState;
use contracts::domain::a001_category::{Category, CategoryDto};
use leptos::prelude::*;
use std::sync::Arc;

/// ViewModel for the category form
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub store: CrudStore<Category>,
    pub form: FormState<CategoryDto>,
}

impl CategoryDetailsViewModel {
    pub fn new(store: CrudStore<Category>) -> Self {
        Self {
            store,
            form: FormState::new(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.store.mode() == CrudMode::Editing
    }

    /// Fill the form from the selected record, or blank for a new one
    pub fn load(&self, selected: Option<Arc<Category>>) {
        self.form
            .reset(selected.map(|c| c.to_dto()).unwrap_or_default());
    }

    /// Validate and commit. Returns the stored record.
    pub fn save_command(&self) -> Option<Arc<Category>> {
        let dto = self.form.submit(CategoryDto::validate)?;
        match self.store.mode() {
            CrudMode::Creating => self
                .store
                .run("create", |s| s.submit_create(|id| Category::from_dto(id, &dto))),
            CrudMode::Editing => self.store.run("update", |s| s.submit_update(&dto.to_patch())),
            mode => {
                log::warn!("category save ignored in {:?}", mode);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::{seed, CategoryStatus};
    use contracts::shared::collection::from_seed;

    #[test]
    fn test_edit_keeps_code_and_changes_status() {
        let owner = Owner::new();
        owner.with(|| {
            let store = CrudStore::new(from_seed(seed::categories()));
            let vm = CategoryDetailsViewModel::new(store);

            store.begin_edit("1");
            vm.load(store.selected());
            assert!(vm.is_edit_mode());
            vm.form.draft.update(|d| d.status = CategoryStatus::Inactive);

            let saved = vm.save_command().unwrap();
            assert_eq!(saved.id, "1");
            assert_eq!(saved.status, CategoryStatus::Inactive);
            assert_eq!(saved.code, seed::categories()[0].code);
            assert_eq!(store.mode(), CrudMode::Idle);
        });
    }

    #[test]
    fn test_invalid_form_stays_open() {
        let owner = Owner::new();
        owner.with(|| {
            let store = CrudStore::new(from_seed(seed::categories()));
            let vm = CategoryDetailsViewModel::new(store);

            store.begin_create();
            vm.load(None);
            assert!(vm.save_command().is_none());
            assert_eq!(store.mode(), CrudMode::Creating);
            assert!(vm.form.error("name").get_untracked().is_some());
            assert_eq!(store.records().len(), 3);
        });
    }
}
