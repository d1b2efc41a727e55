//! Collections of the projects section, shared by the list and the detail
//! page while the user stays under `/dashboard/projects`.

use crate::shared::crud::CrudStore;
use contracts::domain::a004_project::{seed, Material, Project, ProjectItem, Staff};
use contracts::shared::collection::{find, from_seed};
use leptos::prelude::*;
use leptos_router::components::Outlet;
use std::sync::Arc;

#[derive(Clone, Copy)]
pub struct ProjectWorkspace {
    pub projects: CrudStore<Project>,
    pub items: CrudStore<ProjectItem>,
    pub materials: CrudStore<Material>,
    pub staff: CrudStore<Staff>,
}

impl ProjectWorkspace {
    pub fn from_seed() -> Self {
        Self {
            projects: CrudStore::new(from_seed(seed::projects())),
            items: CrudStore::new(from_seed(seed::project_items())),
            materials: CrudStore::new(from_seed(seed::materials())),
            staff: CrudStore::new(from_seed(seed::staff())),
        }
    }

    pub fn project(&self, id: &str) -> Option<Arc<Project>> {
        find(&self.projects.records(), id).cloned()
    }
}

pub fn use_project_workspace() -> ProjectWorkspace {
    use_context::<ProjectWorkspace>().expect("ProjectWorkspace not found in context")
}

/// Parent route of the projects section
#[component]
pub fn ProjectsLayout() -> impl IntoView {
    provide_context(ProjectWorkspace::from_seed());
    view! { <Outlet /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_workspace_resolves_projects() {
        let owner = Owner::new();
        owner.with(|| {
            let ws = ProjectWorkspace::from_seed();
            assert_eq!(ws.project("1").map(|p| p.id.clone()), Some("1".to_string()));
            assert!(ws.project("missing").is_none());
            assert!(ws.items.records().iter().all(|i| ws.project(&i.project_id).is_some()));
        });
    }
}
