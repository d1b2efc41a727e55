use contracts::domain::a005_user_profile::UserProfile;
use leptos::prelude::*;

/// App-wide UI state shared by the shell and the pages.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Sidebar expanded (labels visible) or collapsed to icons
    pub left_open: RwSignal<bool>,
    /// Signed-in user shown in the header, edited on the profile page
    pub profile: RwSignal<UserProfile>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            profile: RwSignal::new(UserProfile::default()),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
