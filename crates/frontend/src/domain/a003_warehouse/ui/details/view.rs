use super::view_model::WarehouseDetailsViewModel;
use crate::shared::components::ui::{Button, Input};
use crate::shared::crud::CrudModal;
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;
use leptos::prelude::*;

#[component]
pub fn WarehouseDetails(vm: WarehouseDetailsViewModel) -> impl IntoView {
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
        if vm.is_edit_mode() { "Cập nhật kho" } else { "Thêm kho mới" }.to_string()
    });

    let sku = Signal::derive(move || form.draft.with(|d| d.sku.clone()));
    let (name, set_name) = form.bind("name", |d| d.name.clone(), |d, v| d.name = v);
    let (address, set_address) = form.bind("address", |d| d.address.clone(), |d, v| d.address = v);
    let (phone, set_phone) = form.bind("phone", |d| d.phone.clone(), |d, v| d.phone = v);

    let on_submit = Callback::new(move |_| {
        let editing = vm.is_edit_mode();
        if vm.save_command().is_some() {
            notifications.success(if editing {
                "Cập nhật kho thành công!"
            } else {
                "Thêm kho thành công!"
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
        <Modal open=open title=title on_close=on_cancel footer=footer>
            <div class="details-form">
                <Input label="SKU" id="wh-sku" value=sku disabled=true />
                <Input label="Tên kho" id="wh-name" value=name on_input=set_name
                    placeholder="Nhập tên kho" required=true error=form.error("name") />
                <Input label="Địa chỉ" id="wh-address" value=address on_input=set_address
                    placeholder="Nhập địa chỉ kho" required=true error=form.error("address") />
                <Input label="Số điện thoại" id="wh-phone" value=phone on_input=set_phone
                    input_type="tel" placeholder="Nhập số điện thoại" required=true
                    error=form.error("phone") />
            </div>
        </Modal>
    }
}
