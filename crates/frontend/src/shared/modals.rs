//! Named modal visibility.
//!
//! `ModalRegistry` is the plain state: one flag per registered name.
//! `Modals` puts a registry into a signal and hands out `Copy` control
//! handles per name, so a page declares its modals once instead of keeping a
//! boolean signal per dialog.

use leptos::prelude::*;
use std::fmt::Debug;

/// Visibility flags for a fixed set of names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalRegistry<K> {
    entries: Vec<(K, bool)>,
}

impl<K: Copy + Eq + Debug> ModalRegistry<K> {
    /// Every flag starts closed. A repeated name keeps its first entry.
    pub fn new(names: &[K]) -> Self {
        let mut entries: Vec<(K, bool)> = Vec::with_capacity(names.len());
        for &name in names {
            if !entries.iter().any(|(k, _)| *k == name) {
                entries.push((name, false));
            }
        }
        Self { entries }
    }

    #[cfg(test)]
    fn names(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn is_open(&self, name: K) -> bool {
        self.entries
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, open)| *open)
            .unwrap_or(false)
    }

    /// Returns false when `name` is not registered
    pub fn open(&mut self, name: K) -> bool {
        self.set(name, |_| true)
    }

    pub fn close(&mut self, name: K) -> bool {
        self.set(name, |_| false)
    }

    pub fn toggle(&mut self, name: K) -> bool {
        self.set(name, |open| !open)
    }

    pub fn any_open(&self) -> bool {
        self.entries.iter().any(|(_, open)| *open)
    }

    pub fn close_all(&mut self) {
        for (_, open) in self.entries.iter_mut() {
            *open = false;
        }
    }

    fn set(&mut self, name: K, next: impl FnOnce(bool) -> bool) -> bool {
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, open)) => {
                *open = next(*open);
                true
            }
            None => {
                log::warn!("modal {:?} is not registered", name);
                false
            }
        }
    }
}

/// Reactive registry owned by a page.
pub struct Modals<K: Send + Sync + 'static> {
    registry: RwSignal<ModalRegistry<K>>,
}

impl<K: Send + Sync + 'static> Clone for Modals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static> Copy for Modals<K> {}

impl<K> Modals<K>
where
    K: Copy + Eq + Debug + Send + Sync + 'static,
{
    pub fn new(names: &[K]) -> Self {
        Self {
            registry: RwSignal::new(ModalRegistry::new(names)),
        }
    }

    /// Control handle for one name
    pub fn get(&self, name: K) -> ModalControl<K> {
        ModalControl {
            modals: *self,
            name,
        }
    }

    pub fn is_open(&self, name: K) -> bool {
        self.registry.with(|r| r.is_open(name))
    }

    pub fn open(&self, name: K) {
        self.registry.update(|r| {
            r.open(name);
        });
    }

    pub fn close(&self, name: K) {
        self.registry.update(|r| {
            r.close(name);
        });
    }

    pub fn toggle(&self, name: K) {
        self.registry.update(|r| {
            r.toggle(name);
        });
    }
}

/// Handle bound to one modal name.
pub struct ModalControl<K: Send + Sync + 'static> {
    modals: Modals<K>,
    name: K,
}

impl<K: Copy + Send + Sync + 'static> Clone for ModalControl<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Copy + Send + Sync + 'static> Copy for ModalControl<K> {}

impl<K> ModalControl<K>
where
    K: Copy + Eq + Debug + Send + Sync + 'static,
{
    pub fn is_open(&self) -> bool {
        self.modals.is_open(self.name)
    }

    pub fn open(&self) {
        self.modals.open(self.name);
    }

    pub fn close(&self) {
        self.modals.close(self.name);
    }

    pub fn toggle(&self) {
        self.modals.toggle(self.name);
    }

    /// Open flag for binding into `Modal open=...`
    pub fn signal(&self) -> Signal<bool> {
        let this = *self;
        Signal::derive(move || this.is_open())
    }

    /// Close callback for binding into `Modal on_close=...`
    pub fn on_close(&self) -> Callback<()> {
        let this = *self;
        Callback::new(move |_| this.close())
    }
}

/// Create the modal registry of a page.
pub fn use_modals<K>(names: &[K]) -> Modals<K>
where
    K: Copy + Eq + Debug + Send + Sync + 'static,
{
    Modals::new(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Name {
        Create,
        Update,
        Delete,
        View,
    }

    fn registry() -> ModalRegistry<Name> {
        ModalRegistry::new(&[Name::Create, Name::Update, Name::Delete])
    }

    #[test]
    fn test_all_closed_after_construction() {
        let r = registry();
        assert!(r.names().all(|n| !r.is_open(n)));
        assert!(!r.any_open());
    }

    #[test]
    fn test_open_close_is_independent() {
        let mut r = registry();
        r.open(Name::Delete);
        r.open(Name::Create);
        r.close(Name::Create);
        assert!(!r.is_open(Name::Create));
        assert!(r.is_open(Name::Delete));
        assert!(!r.is_open(Name::Update));
        assert!(r.any_open());
    }

    #[test]
    fn test_open_is_idempotent_and_toggle_restores() {
        let mut r = registry();
        r.open(Name::Update);
        let once = r.clone();
        r.open(Name::Update);
        assert_eq!(r, once);

        let before = r.clone();
        r.toggle(Name::Create);
        r.toggle(Name::Create);
        assert_eq!(r, before);
    }

    #[test]
    fn test_duplicates_and_unknown_names() {
        let mut r = ModalRegistry::new(&[Name::Create, Name::Create, Name::Delete]);
        assert_eq!(r.names().count(), 2);
        assert!(!r.open(Name::View));
        assert!(!r.is_open(Name::View));
        assert!(!r.any_open());

        r.open(Name::Create);
        r.open(Name::Delete);
        r.close_all();
        assert!(!r.any_open());
    }

    #[test]
    fn test_control_handles_are_independent() {
        let owner = Owner::new();
        owner.with(|| {
            let modals = use_modals(&[Name::Create, Name::Update, Name::Delete]);
            let create = modals.get(Name::Create);
            let delete = modals.get(Name::Delete);
            let create_flag = create.signal();

            create.open();
            assert!(create.is_open());
            assert!(create_flag.get_untracked());
            assert!(!modals.get(Name::Update).is_open());
            assert!(!delete.is_open());

            delete.toggle();
            assert!(delete.is_open());
            create.on_close().run(());
            assert!(!create_flag.get_untracked());
            assert!(delete.is_open());

            delete.toggle();
            assert!(!modals.is_open(Name::Delete));
            // unregistered names stay closed
            modals.open(Name::View);
            assert!(!modals.get(Name::View).is_open());
        });
    }
}
