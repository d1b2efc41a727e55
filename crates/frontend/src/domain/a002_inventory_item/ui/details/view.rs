use super::view_model::{InventoryDetailsViewModel, CATEGORY_CHOICES};
use crate::shared::components::ui::{Button, Input, NumberInput, Select};
use crate::shared::crud::CrudModal;
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;
use leptos::prelude::*;

#[component]
pub fn InventoryDetails(vm: InventoryDetailsViewModel) -> impl IntoView {
    let notifications = use_notifications();
    let store = vm.store;
    let form = vm.form;

    let open = Signal::derive(move || {
        store.is_open(CrudModal::Create) || store.is_open(CrudModal::Update)
    });
    Effect::new(move |_| {
        if open.get() {
            vm.load(untrack(move || store.selected()));
        }
    });

    let title = Signal::derive(move || {
        if vm.is_edit_mode() {
            "Chỉnh sửa vật tư".to_string()
        } else {
            "Thêm vật tư mới".to_string()
        }
    });

    let (sku, set_sku) = form.bind("sku", |d| d.sku.clone(), |d, v| d.sku = v);
    let (name, set_name) = form.bind("name", |d| d.name.clone(), |d, v| d.name = v);
    let (category, set_category) = form.bind("category", |d| d.category.clone(), |d, v| d.category = v);
    let (unit, set_unit) = form.bind("unit", |d| d.unit.clone(), |d, v| d.unit = v);
    let (quantity, set_quantity) = form.bind("quantity", |d| d.quantity, |d, v| d.quantity = v);
    let (min_stock, set_min_stock) = form.bind("min_stock", |d| d.min_stock, |d, v| d.min_stock = v);
    let (price, set_price) = form.bind("price", |d| d.price, |d, v| d.price = v);
    let (supplier, set_supplier) = form.bind("supplier", |d| d.supplier.clone(), |d, v| d.supplier = v);
    let (location, set_location) = form.bind("location", |d| d.location.clone(), |d, v| d.location = v);

    let category_options = Signal::derive(|| {
        CATEGORY_CHOICES
            .iter()
            .map(|c| (c.to_string(), c.to_string()))
            .collect::<Vec<_>>()
    });

    let on_submit = Callback::new(move |_| {
        let editing = vm.is_edit_mode();
        if let Some(saved) = vm.save_command() {
            notifications.success(if editing {
                format!("Đã cập nhật vật tư {}", saved.name)
            } else {
                format!("Đã thêm vật tư {}", saved.name)
            });
        }
    });
    let on_cancel = store.on_cancel();

    let footer = move || {
        view! {
            <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                "Hủy"
            </Button>
            <Button variant="primary" on_click=on_submit>
                {move || if vm.is_edit_mode() { "Cập nhật" } else { "Thêm mới" }}
            </Button>
        }
    };

    view! {
        <Modal open=open title=title on_close=on_cancel footer=footer wide=true>
            <div class="details-form details-form--grid">
                <Input label="Mã SKU" id="inv-sku" value=sku on_input=set_sku
                    placeholder="VD: XM-001" required=true error=form.error("sku") />
                <Input label="Tên vật tư" id="inv-name" value=name on_input=set_name
                    placeholder="VD: Xi măng Portland" required=true error=form.error("name") />
                <Select label="Danh mục" id="inv-category" value=category on_change=set_category
                    options=category_options placeholder="Chọn danh mục" required=true
                    error=form.error("category") />
                <Input label="Đơn vị" id="inv-unit" value=unit on_input=set_unit
                    placeholder="VD: Bao, m³, Tấn" required=true error=form.error("unit") />
                <NumberInput label="Số lượng" id="inv-quantity" value=quantity on_input=set_quantity
                    min=0.0 required=true error=form.error("quantity") />
                <NumberInput label="Mức tối thiểu" id="inv-min-stock" value=min_stock on_input=set_min_stock
                    min=0.0 required=true error=form.error("min_stock") />
                <NumberInput label="Đơn giá (VND)" id="inv-price" value=price on_input=set_price
                    min=0.0 step=1000.0 required=true error=form.error("price") />
                <Input label="Nhà cung cấp" id="inv-supplier" value=supplier on_input=set_supplier
                    placeholder="VD: Xi măng Hoàng Thạch" required=true error=form.error("supplier") />
                <Input label="Vị trí kho" id="inv-location" value=location on_input=set_location
                    placeholder="VD: Kho A-01" required=true error=form.error("location") />
            </div>
        </Modal>
    }
}
