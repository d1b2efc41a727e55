use crate::shared::components::ui::Badge;
use crate::shared::format::{format_quantity, format_vnd};
use crate::shared::modal::Modal;
use contracts::domain::a002_inventory_item::{InventoryItem, StockStatus};
use leptos::prelude::*;
use std::sync::Arc;

pub fn stock_badge(status: StockStatus) -> impl IntoView {
    let variant = match status {
        StockStatus::InStock => "success",
        StockStatus::LowStock => "warning",
        StockStatus::OutOfStock => "error",
    };
    view! { <Badge variant=variant>{status.label()}</Badge> }
}

fn field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="preview__field">
            <label class="preview__label">{label}</label>
            <p class="preview__value">{value}</p>
        </div>
    }
}

/// Read-only card of one item
#[component]
pub fn InventoryPreview(
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    item: Signal<Option<Arc<InventoryItem>>>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal open=open title="Chi tiết vật tư".to_string() on_close=on_close wide=true>
            {move || item.get().map(|item| view! {
                <div class="preview">
                    <div class="preview__status">{stock_badge(item.status)}</div>
                    <div class="preview__grid">
                        {field("Mã SKU", item.sku.clone())}
                        {field("Tên vật tư", item.name.clone())}
                        {field("Danh mục", item.category.clone())}
                        {field("Đơn giá", format_vnd(item.price))}
                    </div>
                    <div class="preview__grid preview__grid--stock">
                        {field("Số lượng hiện tại", format!("{} {}", format_quantity(item.quantity), item.unit))}
                        {field("Mức tối thiểu", format!("{} {}", format_quantity(item.min_stock), item.unit))}
                        {field("Giá trị tồn kho", format_vnd(item.stock_value()))}
                    </div>
                    <div class="preview__grid">
                        {field("Nhà cung cấp", item.supplier.clone())}
                        {field("Vị trí kho", item.location.clone())}
                    </div>
                </div>
            })}
        </Modal>
    }
}
