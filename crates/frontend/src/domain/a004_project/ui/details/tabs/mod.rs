mod items;
mod materials;
mod overview;
mod staff;

pub use items::ItemsTab;
pub use materials::MaterialsTab;
pub use overview::OverviewTab;
pub use staff::StaffTab;

use serde::{Deserialize, Serialize};

/// Tabs of the project detail page, kept in `?tab=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectTab {
    #[default]
    Overview,
    Items,
    Materials,
    Staff,
}

impl ProjectTab {
    pub fn all() -> [ProjectTab; 4] {
        [
            ProjectTab::Overview,
            ProjectTab::Items,
            ProjectTab::Materials,
            ProjectTab::Staff,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectTab::Overview => "Tổng quan",
            ProjectTab::Items => "Hạng mục",
            ProjectTab::Materials => "Vật tư",
            ProjectTab::Staff => "Nhân sự",
        }
    }

    /// Unknown or missing values fall back to the overview
    pub fn from_query(search: &str) -> Self {
        serde_qs::from_str::<DetailQuery>(search.trim_start_matches('?'))
            .map(|q| q.tab)
            .unwrap_or_default()
    }

    pub fn to_query(self) -> String {
        serde_qs::to_string(&DetailQuery { tab: self }).unwrap_or_default()
    }

    pub fn href(self, project_id: &str) -> String {
        format!("/dashboard/projects/{}?{}", project_id, self.to_query())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct DetailQuery {
    #[serde(default)]
    tab: ProjectTab,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_query() {
        assert_eq!(ProjectTab::from_query(""), ProjectTab::Overview);
        assert_eq!(ProjectTab::from_query("?tab=items"), ProjectTab::Items);
        assert_eq!(ProjectTab::from_query("tab=staff&x=1"), ProjectTab::Staff);
        assert_eq!(ProjectTab::from_query("?tab=budget"), ProjectTab::Overview);
    }

    #[test]
    fn test_tab_href() {
        assert_eq!(
            ProjectTab::Materials.href("7"),
            "/dashboard/projects/7?tab=materials"
        );
        for tab in ProjectTab::all() {
            assert_eq!(ProjectTab::from_query(&tab.to_query()), tab);
        }
    }
}
