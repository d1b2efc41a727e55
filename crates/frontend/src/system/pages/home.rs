use crate::domain::a002_inventory_item::ui::details::stock_badge;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{CardTone, StatCard, ValueFormat};
use crate::shared::format::format_quantity;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use contracts::domain::a002_inventory_item::{seed as inventory_seed, InventoryItem, StockStatus};
use contracts::domain::a003_warehouse::seed as warehouse_seed;
use contracts::domain::a004_project::{seed as project_seed, Project};
use leptos::prelude::*;

/// Figures shown on the dashboard cards
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSummary {
    pub materials: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub active_projects: usize,
    pub warehouses: usize,
    pub stock_value: f64,
}

impl DashboardSummary {
    pub fn compute(items: &[InventoryItem], projects: &[Project], warehouses: usize) -> Self {
        let count = |status| items.iter().filter(|i| i.status == status).count();
        Self {
            materials: items.len(),
            low_stock: count(StockStatus::LowStock),
            out_of_stock: count(StockStatus::OutOfStock),
            active_projects: projects.iter().filter(|p| p.is_active()).count(),
            warehouses,
            stock_value: items.iter().map(InventoryItem::stock_value).sum(),
        }
    }
}

/// Items below their minimum, out of stock first
pub fn stock_alerts(items: &[InventoryItem]) -> Vec<InventoryItem> {
    let mut alerts: Vec<_> = items.iter().filter(|i| i.needs_restock()).cloned().collect();
    alerts.sort_by_key(|i| i.status != StockStatus::OutOfStock);
    alerts
}

#[component]
pub fn HomePage() -> impl IntoView {
    let items = inventory_seed::inventory_items();
    let summary = DashboardSummary::compute(
        &items,
        &project_seed::projects(),
        warehouse_seed::warehouses().len(),
    );
    let alerts = stock_alerts(&items);
    log::debug!("dashboard summary {:?}", summary);

    let alert_rows = if alerts.is_empty() {
        view! { <p class="alerts__empty">"Tất cả vật tư đều đủ số lượng"</p> }.into_any()
    } else {
        let rows = alerts
            .into_iter()
            .map(|item| {
                view! {
                    <li class="alerts__item">
                        <div class="cell-stack">
                            <div class="cell-stack__main">{item.name.clone()}</div>
                            <div class="cell-stack__sub">
                                {format!(
                                    "{} · còn {} {} (tối thiểu {})",
                                    item.location,
                                    format_quantity(item.quantity),
                                    item.unit,
                                    format_quantity(item.min_stock),
                                )}
                            </div>
                        </div>
                        {stock_badge(item.status)}
                    </li>
                }
            })
            .collect_view();
        view! { <ul class="alerts__list">{rows}</ul> }.into_any()
    };

    view! {
        <PageFrame page_id="home--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Tổng quan".to_string()
                subtitle="Tình hình vật tư, kho và dự án" />

            <div class="stat-grid">
                <StatCard label="Tổng vật tư" icon_name="inventory"
                    value={summary.materials as f64} format=ValueFormat::Integer />
                <StatCard label="Sắp hết hàng" icon_name="alert"
                    value={summary.low_stock as f64} format=ValueFormat::Integer tone=CardTone::Warning />
                <StatCard label="Hết hàng" icon_name="alert"
                    value={summary.out_of_stock as f64} format=ValueFormat::Integer tone=CardTone::Bad />
                <StatCard label="Dự án đang hoạt động" icon_name="projects"
                    value={summary.active_projects as f64} format=ValueFormat::Integer tone=CardTone::Good />
                <StatCard label="Kho hàng" icon_name="warehouse"
                    value={summary.warehouses as f64} format=ValueFormat::Integer />
                <StatCard label="Giá trị tồn kho" icon_name="dashboard"
                    value=summary.stock_value format=ValueFormat::Money />
            </div>

            <section class="card alerts">
                <h3 class="card__title">"Cảnh báo tồn kho"</h3>
                {alert_rows}
            </section>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_seed() {
        let items = inventory_seed::inventory_items();
        let summary = DashboardSummary::compute(&items, &project_seed::projects(), 2);
        assert_eq!(summary.materials, 5);
        assert_eq!(summary.low_stock, 1);
        assert_eq!(summary.out_of_stock, 1);
        assert_eq!(summary.warehouses, 2);
    }

    #[test]
    fn test_alerts_put_out_of_stock_first() {
        let alerts = stock_alerts(&inventory_seed::inventory_items());
        let names: Vec<_> = alerts.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Thép D10", "Cát xây dựng"]);
    }
}
