//! Theme management module for the application.
//!
//! `ThemeStore` holds the chosen preference, persists it under the configured
//! key and notifies subscribers. `ThemeProvider` wires one store to the
//! document and exposes it through `ThemeContext`.

use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::storage::{BrowserStorage, KeyValueStore};
use contracts::shared::settings::ThemePreference;
use leptos::prelude::*;
use std::sync::Arc;
use web_sys::window;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub type ListenerId = u64;
type Listener = Arc<dyn Fn(ThemePreference) + Send + Sync>;

/// Observable, persisted theme preference.
pub struct ThemeStore<S> {
    storage: S,
    key: String,
    current: ThemePreference,
    next_id: ListenerId,
    listeners: Vec<(ListenerId, Listener)>,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Read the stored preference once, `default` when nothing is stored.
    pub fn load(storage: S, key: &str, default: ThemePreference) -> Self {
        let current = storage
            .get(key)
            .map(|s| ThemePreference::from_str(&s))
            .unwrap_or(default);
        Self {
            storage,
            key: key.to_string(),
            current,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Persist and notify. Setting the current value again is a no-op.
    pub fn set(&mut self, theme: ThemePreference) {
        if theme == self.current {
            return;
        }
        self.current = theme;
        self.storage.set(&self.key, theme.as_str());
        self.notify();
    }

    /// Forget the stored value and go back to `default`
    pub fn reset(&mut self, default: ThemePreference) {
        self.storage.remove(&self.key);
        if default != self.current {
            self.current = default;
            self.notify();
        }
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(self.current);
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(ThemePreference) + Send + Sync + 'static) -> ListenerId {
        self.next_id += 1;
        self.listeners.push((self.next_id, Arc::new(listener)));
        self.next_id
    }

    /// Returns false for an unknown or already removed id
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Set `data-theme` on the root element to the resolved theme.
fn apply_theme(theme: ThemePreference) {
    let resolved = theme.resolve(system_prefers_dark());
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", resolved.as_str());
    }
}

/// Re-apply when the system scheme changes while `Auto` is selected.
fn watch_system_scheme(theme: ReadSignal<ThemePreference>) {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    let Some(mql) = window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten()) else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |_event: web_sys::MediaQueryListEvent| {
        if theme.get_untracked() == ThemePreference::Auto {
            apply_theme(ThemePreference::Auto);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = mql.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget(); // lives as long as the page
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current preference, mirrors the store. Writes go through `set_theme`.
    pub theme: ReadSignal<ThemePreference>,
    store: StoredValue<ThemeStore<BrowserStorage>>,
}

impl ThemeContext {
    /// Persist, apply and notify subscribers
    pub fn set_theme(&self, theme: ThemePreference) {
        self.store.update_value(|s| s.set(theme));
    }

    /// Drop the stored preference, falling back to `default`
    pub fn reset_theme(&self, default: ThemePreference) {
        self.store.update_value(|s| s.reset(default));
    }

    pub fn subscribe(&self, listener: impl Fn(ThemePreference) + Send + Sync + 'static) -> ListenerId {
        let mut id = 0;
        self.store.update_value(|s| id = s.subscribe(listener));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut removed = false;
        self.store.update_value(|s| removed = s.unsubscribe(id));
        removed
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let config = use_config();
    let mut store = ThemeStore::load(
        BrowserStorage,
        &config.theme.storage_key,
        ThemePreference::from_str(&config.theme.default),
    );
    let (theme, set_theme) = signal(store.current());
    apply_theme(store.current());

    store.subscribe(move |next| {
        log::info!("theme changed to {}", next.as_str());
        set_theme.set(next);
        apply_theme(next);
    });
    watch_system_scheme(theme);

    provide_context(ThemeContext {
        theme,
        store: StoredValue::new(store),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Header button flipping between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    let toggle = move |_| {
        let next = match ctx.theme.get_untracked().resolve(system_prefers_dark()) {
            ThemePreference::Dark => ThemePreference::Light,
            _ => ThemePreference::Dark,
        };
        ctx.set_theme(next);
    };

    view! {
        <button class="top-header-icon-btn" on:click=toggle title="Toggle theme">
            {move || {
                if ctx.theme.get().resolve(system_prefers_dark()) == ThemePreference::Dark {
                    icon("sun")
                } else {
                    icon("moon")
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;
    use std::sync::Mutex;

    #[test]
    fn test_load_defaults_and_reads_stored_value() {
        let store = ThemeStore::load(MemoryStorage::default(), "theme", ThemePreference::Light);
        assert_eq!(store.current(), ThemePreference::Light);

        let storage = MemoryStorage::default();
        storage.set("theme", "dark");
        let store = ThemeStore::load(storage, "theme", ThemePreference::Light);
        assert_eq!(store.current(), ThemePreference::Dark);
    }

    #[test]
    fn test_set_persists_and_survives_reload() {
        let mut store = ThemeStore::load(MemoryStorage::default(), "theme", ThemePreference::Light);
        store.set(ThemePreference::Auto);
        assert_eq!(store.storage.get("theme").as_deref(), Some("auto"));

        let reloaded = ThemeStore::load(store.storage, "theme", ThemePreference::Light);
        assert_eq!(reloaded.current(), ThemePreference::Auto);
    }

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = ThemeStore::load(MemoryStorage::default(), "theme", ThemePreference::Light);

        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |t| sink.lock().unwrap().push(t));
        store.set(ThemePreference::Dark);
        // unchanged value does not notify
        store.set(ThemePreference::Dark);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set(ThemePreference::Light);

        assert_eq!(*seen.lock().unwrap(), vec![ThemePreference::Dark]);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_reset_clears_storage_and_notifies() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let storage = MemoryStorage::default();
        storage.set("theme", "dark");
        let mut store = ThemeStore::load(storage, "theme", ThemePreference::Light);
        let sink = Arc::clone(&seen);
        store.subscribe(move |t| sink.lock().unwrap().push(t));

        store.reset(ThemePreference::Light);
        assert_eq!(store.current(), ThemePreference::Light);
        assert_eq!(store.storage.get("theme"), None);
        // already at the default: storage cleared, nobody notified
        store.reset(ThemePreference::Light);
        assert_eq!(*seen.lock().unwrap(), vec![ThemePreference::Light]);
    }
}
