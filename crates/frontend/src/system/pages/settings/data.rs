use crate::shared::components::ui::Button;
use crate::shared::export::{export_json, export_to_excel, ExportError};
use crate::shared::notifications::use_notifications;
use chrono::NaiveDateTime;
use contracts::domain::a001_category::{seed as category_seed, Category};
use contracts::domain::a002_inventory_item::{seed as inventory_seed, InventoryItem};
use contracts::domain::a003_warehouse::{seed as warehouse_seed, Warehouse};
use contracts::domain::a004_project::{seed as project_seed, Material, Project, ProjectItem, Staff};
use leptos::prelude::*;
use serde::Serialize;

/// Everything the dashboard starts with, as one JSON document
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupSnapshot {
    pub created_at: NaiveDateTime,
    pub categories: Vec<Category>,
    pub inventory: Vec<InventoryItem>,
    pub warehouses: Vec<Warehouse>,
    pub projects: Vec<Project>,
    pub project_items: Vec<ProjectItem>,
    pub materials: Vec<Material>,
    pub staff: Vec<Staff>,
}

impl BackupSnapshot {
    pub fn from_seed(created_at: NaiveDateTime) -> Self {
        Self {
            created_at,
            categories: category_seed::categories(),
            inventory: inventory_seed::inventory_items(),
            warehouses: warehouse_seed::warehouses(),
            projects: project_seed::projects(),
            project_items: project_seed::project_items(),
            materials: project_seed::materials(),
            staff: project_seed::staff(),
        }
    }

    pub fn record_count(&self) -> usize {
        self.categories.len()
            + self.inventory.len()
            + self.warehouses.len()
            + self.projects.len()
            + self.project_items.len()
            + self.materials.len()
            + self.staff.len()
    }

    pub fn filename(&self) -> String {
        format!("sao-luu-{}.json", self.created_at.format("%Y%m%d-%H%M"))
    }
}

#[component]
pub fn DataPanel() -> impl IntoView {
    let notifications = use_notifications();

    let report = move |what: &str, result: Result<usize, ExportError>| match result {
        Ok(count) => notifications.success(format!("Đã xuất {} {}", count, what)),
        Err(e) => {
            log::warn!("{} export failed: {}", what, e);
            notifications.error(format!("Không thể xuất dữ liệu: {}", e));
        }
    };

    let on_export_inventory = Callback::new(move |_| {
        let rows = inventory_seed::inventory_items();
        report("vật tư", export_to_excel(&rows, "vat-tu.csv").map(|_| rows.len()));
    });

    let on_export_projects = Callback::new(move |_| {
        let rows = project_seed::projects();
        report("dự án", export_to_excel(&rows, "du-an.csv").map(|_| rows.len()));
    });

    let on_backup = Callback::new(move |_| {
        let snapshot = BackupSnapshot::from_seed(chrono::Local::now().naive_local());
        let count = snapshot.record_count();
        report("bản ghi", export_json(&snapshot, &snapshot.filename()).map(|_| count));
    });

    view! {
        <section class="card settings__section">
            <h3 class="card__title">"Xuất dữ liệu"</h3>
            <p class="settings__hint">"Tệp CSV mở trực tiếp bằng Excel."</p>
            <div class="settings__actions settings__actions--start">
                <Button variant="secondary" icon_name="download" on_click=on_export_inventory>
                    "Xuất vật tư (CSV)"
                </Button>
                <Button variant="secondary" icon_name="download" on_click=on_export_projects>
                    "Xuất dự án (CSV)"
                </Button>
            </div>
        </section>

        <section class="card settings__section">
            <h3 class="card__title">"Sao lưu"</h3>
            <p class="settings__hint">
                "Tải toàn bộ danh mục, vật tư, kho và dự án về một tệp JSON."
            </p>
            <div class="settings__actions settings__actions--start">
                <Button variant="primary" icon_name="download" on_click=on_backup>
                    "Tạo bản sao lưu"
                </Button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::{build_csv, build_json};
    use chrono::NaiveDate;

    fn snapshot() -> BackupSnapshot {
        let at = NaiveDate::from_ymd_opt(2024, 12, 1)
            .and_then(|d| d.and_hms_opt(8, 30, 0))
            .unwrap();
        BackupSnapshot::from_seed(at)
    }

    #[test]
    fn test_backup_holds_every_collection() {
        let backup = snapshot();
        assert_eq!(backup.filename(), "sao-luu-20241201-0830.json");
        assert_eq!(backup.inventory.len(), 5);

        let json: serde_json::Value = serde_json::from_str(&build_json(&backup).unwrap()).unwrap();
        assert_eq!(json["createdAt"], "2024-12-01T08:30:00");
        for key in ["categories", "inventory", "warehouses", "projects", "projectItems", "materials", "staff"] {
            assert!(json[key].is_array(), "{}", key);
        }
        let total: usize = ["categories", "inventory", "warehouses", "projects", "projectItems", "materials", "staff"]
            .iter()
            .map(|k| json[*k].as_array().map(Vec::len).unwrap_or(0))
            .sum();
        assert_eq!(total, backup.record_count());
    }

    #[test]
    fn test_project_csv_has_one_line_per_project() {
        let projects = project_seed::projects();
        let csv = build_csv(&projects).unwrap();
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines.len(), projects.len() + 1);
        assert!(lines[0].starts_with("Tên dự án;"));
    }
}
