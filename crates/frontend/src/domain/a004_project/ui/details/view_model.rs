use crate::shared::crud::{CrudMode, CrudStore};
use crate::shared::form::FormState;
use contracts::domain::a004_project::{Project, ProjectDto};
use leptos::prelude::*;
use std::sync::Arc;

#[derive(Clone, Copy)]
pub struct ProjectDetailsViewModel {
    pub store: CrudStore<Project>,
    pub form: FormState<ProjectDto>,
}

impl ProjectDetailsViewModel {
    pub fn new(store: CrudStore<Project>) -> Self {
        Self {
            store,
            form: FormState::new(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.store.mode() == CrudMode::Editing
    }

    pub fn load(&self, selected: Option<Arc<Project>>) {
        self.form
            .reset(selected.map(|p| p.to_dto()).unwrap_or_default());
    }

    /// Validate and commit. Assigned staff survive an edit.
    pub fn save_command(&self) -> Option<Arc<Project>> {
        let dto = self.form.submit(ProjectDto::validate)?;
        match self.store.mode() {
            CrudMode::Creating => self
                .store
                .run("create", |s| s.submit_create(|id| Project::from_dto(id, &dto))),
            CrudMode::Editing => self.store.run("update", |s| s.submit_update(&dto.to_patch())),
            mode => {
                log::warn!("project save ignored in {:?}", mode);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a004_project::{seed, ProjectStatus};
    use contracts::shared::collection::from_seed;

    #[test]
    fn test_edit_keeps_assigned_staff() {
        let owner = Owner::new();
        owner.with(|| {
            let store = CrudStore::new(from_seed(seed::projects()));
            let vm = ProjectDetailsViewModel::new(store);
            let original = store.records()[0].clone();

            store.begin_edit(&original.id);
            vm.load(store.selected());
            vm.form.draft.update(|d| {
                d.status = ProjectStatus::OnHold;
                d.progress = 50;
            });
            let saved = vm.save_command().unwrap();
            assert_eq!(saved.status, ProjectStatus::OnHold);
            assert_eq!(saved.progress, 50);
            assert_eq!(saved.assigned_staff, original.assigned_staff);
        });
    }

    #[test]
    fn test_end_before_start_blocks_create() {
        let owner = Owner::new();
        owner.with(|| {
            let store = CrudStore::new(from_seed(seed::projects()));
            let vm = ProjectDetailsViewModel::new(store);
            let count = store.records().len();

            store.begin_create();
            vm.load(None);
            vm.form.draft.update(|d| {
                d.name = "Cầu Rạch Chiếc".into();
                d.start_date = NaiveDate::from_ymd_opt(2026, 6, 1);
                d.end_date = NaiveDate::from_ymd_opt(2026, 5, 1);
            });
            assert!(vm.save_command().is_none());
            assert!(vm.form.error("end_date").get_untracked().is_some());

            vm.form.draft.update(|d| d.end_date = NaiveDate::from_ymd_opt(2027, 5, 1));
            let created = vm.save_command().unwrap();
            assert!(created.assigned_staff.is_empty());
            assert_eq!(store.records().len(), count + 1);
        });
    }
}
