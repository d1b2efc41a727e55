//! Create / edit / delete orchestration for a list page.
//!
//! A page keeps its records, the selected record and its three CRUD modal
//! flags in one `CrudState`, behind one signal (`CrudStore`). Every user
//! action is a single transition of that state.

use super::modals::ModalRegistry;
use contracts::domain::common::{new_unique_id, Patch, Record};
use contracts::shared::collection::{self, CollectionError};
use leptos::prelude::*;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudModal {
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudMode {
    Idle,
    Creating,
    Editing,
    ConfirmingDelete,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrudError {
    #[error("another form is open ({0:?})")]
    Busy(CrudMode),
    #[error("record '{0}' not found")]
    NotFound(String),
    #[error("no form is open for this action")]
    NoActiveForm,
    #[error(transparent)]
    Collection(#[from] CollectionError),
}

#[derive(Debug, Clone)]
pub struct CrudState<T> {
    records: Vec<Arc<T>>,
    selected: Option<Arc<T>>,
    modals: ModalRegistry<CrudModal>,
}

impl<T: Record> CrudState<T> {
    pub fn new(records: Vec<Arc<T>>) -> Self {
        Self {
            records,
            selected: None,
            modals: ModalRegistry::new(&[CrudModal::Create, CrudModal::Update, CrudModal::Delete]),
        }
    }

    pub fn records(&self) -> &[Arc<T>] {
        &self.records
    }

    pub fn selected(&self) -> Option<&Arc<T>> {
        self.selected.as_ref()
    }

    pub fn is_open(&self, modal: CrudModal) -> bool {
        self.modals.is_open(modal)
    }

    pub fn mode(&self) -> CrudMode {
        if !self.modals.any_open() {
            CrudMode::Idle
        } else if self.modals.is_open(CrudModal::Create) {
            CrudMode::Creating
        } else if self.modals.is_open(CrudModal::Update) {
            CrudMode::Editing
        } else if self.modals.is_open(CrudModal::Delete) {
            CrudMode::ConfirmingDelete
        } else {
            CrudMode::Idle
        }
    }

    fn ensure_idle(&self) -> Result<(), CrudError> {
        match self.mode() {
            CrudMode::Idle => Ok(()),
            busy => Err(CrudError::Busy(busy)),
        }
    }

    fn select(&mut self, id: &str) -> Result<Arc<T>, CrudError> {
        let record = collection::find(&self.records, id)
            .cloned()
            .ok_or_else(|| CrudError::NotFound(id.to_string()))?;
        self.selected = Some(Arc::clone(&record));
        Ok(record)
    }

    pub fn begin_create(&mut self) -> Result<(), CrudError> {
        self.ensure_idle()?;
        self.selected = None;
        self.modals.open(CrudModal::Create);
        Ok(())
    }

    /// Select the record with `id` and open the update form.
    pub fn begin_edit(&mut self, id: &str) -> Result<Arc<T>, CrudError> {
        self.ensure_idle()?;
        let record = self.select(id)?;
        self.modals.open(CrudModal::Update);
        Ok(record)
    }

    /// Select the record with `id` and ask for confirmation.
    pub fn begin_delete(&mut self, id: &str) -> Result<Arc<T>, CrudError> {
        self.ensure_idle()?;
        let record = self.select(id)?;
        self.modals.open(CrudModal::Delete);
        Ok(record)
    }

    /// Append the record built from a fresh identifier and close the form.
    pub fn submit_create(&mut self, build: impl FnOnce(String) -> T) -> Result<Arc<T>, CrudError> {
        if self.mode() != CrudMode::Creating {
            return Err(CrudError::NoActiveForm);
        }
        let record = build(new_unique_id(&self.records));
        let id = record.id().to_string();
        self.records = collection::add(&self.records, record)?;
        self.finish();
        collection::find(&self.records, &id)
            .cloned()
            .ok_or(CrudError::NotFound(id))
    }

    /// Merge `patch` into the selected record and close the form.
    pub fn submit_update<P>(&mut self, patch: &P) -> Result<Arc<T>, CrudError>
    where
        P: Patch<Target = T>,
    {
        if self.mode() != CrudMode::Editing {
            return Err(CrudError::NoActiveForm);
        }
        let id = self
            .selected
            .as_ref()
            .map(|r| r.id().to_string())
            .ok_or(CrudError::NoActiveForm)?;
        self.records = collection::replace(&self.records, &id, patch);
        self.finish();
        collection::find(&self.records, &id)
            .cloned()
            .ok_or(CrudError::NotFound(id))
    }

    /// Remove the selected record and close the confirmation.
    pub fn confirm_delete(&mut self) -> Result<Arc<T>, CrudError> {
        if self.mode() != CrudMode::ConfirmingDelete {
            return Err(CrudError::NoActiveForm);
        }
        let record = self.selected.clone().ok_or(CrudError::NoActiveForm)?;
        let next = collection::try_remove(&self.records, record.id());
        self.finish();
        self.records = next?;
        Ok(record)
    }

    /// Close whatever is open without touching the records.
    pub fn cancel(&mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        self.selected = None;
        self.modals.close_all();
    }
}

/// Reactive `CrudState` of a page.
pub struct CrudStore<T: Send + Sync + 'static> {
    state: RwSignal<CrudState<T>>,
}

impl<T: Send + Sync + 'static> Clone for CrudStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for CrudStore<T> {}

impl<T> CrudStore<T>
where
    T: Record + Send + Sync + 'static,
{
    pub fn new(records: Vec<Arc<T>>) -> Self {
        Self {
            state: RwSignal::new(CrudState::new(records)),
        }
    }

    pub fn records(&self) -> Vec<Arc<T>> {
        self.state.with(|s| s.records().to_vec())
    }

    pub fn selected(&self) -> Option<Arc<T>> {
        self.state.with(|s| s.selected().cloned())
    }

    pub fn mode(&self) -> CrudMode {
        self.state.with(|s| s.mode())
    }

    pub fn is_open(&self, modal: CrudModal) -> bool {
        self.state.with(|s| s.is_open(modal))
    }

    pub fn open_signal(&self, modal: CrudModal) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_open(modal)))
    }

    /// Apply one transition. Rejections are logged and yield `None`.
    pub fn run<R>(
        &self,
        action: &str,
        f: impl FnOnce(&mut CrudState<T>) -> Result<R, CrudError>,
    ) -> Option<R> {
        match self.state.try_update(f) {
            Some(Ok(value)) => Some(value),
            Some(Err(e)) => {
                log::warn!("{} {}: {}", T::full_name(), action, e);
                None
            }
            None => None,
        }
    }

    pub fn begin_create(&self) {
        self.run("create", |s| s.begin_create());
    }

    pub fn begin_edit(&self, id: &str) {
        self.run("edit", |s| s.begin_edit(id));
    }

    pub fn begin_delete(&self, id: &str) {
        self.run("delete", |s| s.begin_delete(id));
    }

    pub fn cancel(&self) {
        self.state.update(|s| s.cancel());
    }

    pub fn on_cancel(&self) -> Callback<()> {
        let this = *self;
        Callback::new(move |_| this.cancel())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::{Category, CategoryPatch, CategoryStatus};
    use contracts::shared::collection::{from_seed, same_records};

    fn cat(id: &str, code: &str, name: &str, status: CategoryStatus) -> Category {
        Category {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            description: String::new(),
            status,
        }
    }

    fn state() -> CrudState<Category> {
        CrudState::new(from_seed(vec![
            cat("1", "VLXD", "Electronics", CategoryStatus::Active),
            cat("2", "CLTH", "Clothing", CategoryStatus::Active),
        ]))
    }

    #[test]
    fn test_create_appends_with_generated_id() {
        let mut s = state();
        s.begin_create().unwrap();
        assert_eq!(s.mode(), CrudMode::Creating);
        assert!(s.selected().is_none());

        let created = s
            .submit_create(|id| Category {
                id,
                code: String::new(),
                name: "Books".into(),
                description: "Educational".into(),
                status: CategoryStatus::Active,
            })
            .unwrap();

        assert_eq!(s.records().len(), 3);
        assert_eq!(created.name, "Books");
        assert_eq!(created.description, "Educational");
        assert!(!created.id.is_empty());
        assert!(s.records()[..2].iter().all(|r| r.id != created.id));
        assert_eq!(s.mode(), CrudMode::Idle);
        assert!(s.selected().is_none());
    }

    #[test]
    fn test_confirm_delete_removes_selected() {
        let mut s = state();
        s.begin_delete("2").unwrap();
        assert_eq!(s.mode(), CrudMode::ConfirmingDelete);
        assert_eq!(s.selected().map(|r| r.id.as_str()), Some("2"));

        let removed = s.confirm_delete().unwrap();
        assert_eq!(removed.id, "2");
        assert_eq!(s.records().len(), 1);
        assert!(s.records().iter().all(|r| r.id != "2"));
        assert_eq!(s.mode(), CrudMode::Idle);
    }

    #[test]
    fn test_update_merges_patch_and_shares_others() {
        let mut s = state();
        let before = s.records().to_vec();
        s.begin_edit("1").unwrap();
        let patch = CategoryPatch {
            status: Some(CategoryStatus::Inactive),
            ..Default::default()
        };
        let updated = s.submit_update(&patch).unwrap();

        assert_eq!(updated.status, CategoryStatus::Inactive);
        assert_eq!(updated.code, "VLXD");
        assert!(Arc::ptr_eq(&before[1], &s.records()[1]));
        assert!(!Arc::ptr_eq(&before[0], &s.records()[0]));
        assert_eq!(s.mode(), CrudMode::Idle);
    }

    #[test]
    fn test_cancel_leaves_records_untouched() {
        let mut s = state();
        let before = s.records().to_vec();
        s.begin_edit("2").unwrap();
        s.cancel();
        assert_eq!(s.mode(), CrudMode::Idle);
        assert!(s.selected().is_none());
        assert!(same_records(&before, s.records()));
    }

    #[test]
    fn test_rejected_transitions() {
        let mut s = state();
        assert_eq!(s.begin_edit("9").unwrap_err(), CrudError::NotFound("9".into()));
        assert_eq!(s.mode(), CrudMode::Idle);
        assert_eq!(s.confirm_delete().unwrap_err(), CrudError::NoActiveForm);

        s.begin_create().unwrap();
        assert_eq!(
            s.begin_delete("1").unwrap_err(),
            CrudError::Busy(CrudMode::Creating)
        );
        assert_eq!(
            s.submit_update(&CategoryPatch::default()).unwrap_err(),
            CrudError::NoActiveForm
        );
        assert_eq!(s.mode(), CrudMode::Creating);
    }
}
