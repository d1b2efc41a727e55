use crate::domain::a003_warehouse::ui::details::{WarehouseDetails, WarehouseDetailsViewModel};
use crate::shared::components::confirm_delete::ConfirmDelete;
use crate::shared::components::data_table::{row_actions, Column, DataTable};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::config::use_config;
use crate::shared::crud::{CrudModal, CrudStore};
use crate::shared::list_utils::SearchInput;
use crate::shared::list_view::ListViewState;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a003_warehouse::{seed, Warehouse};
use contracts::shared::collection::from_seed;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
#[allow(non_snake_case)]
pub fn WarehouseList() -> impl IntoView {
    let config = use_config();
    let notifications = use_notifications();
    let store = CrudStore::new(from_seed(seed::warehouses()));
    let state = RwSignal::new(ListViewState::with_page_size(config.table.default_page_size));
    let details = WarehouseDetailsViewModel::new(store);

    let records = Signal::derive(move || store.records());

    let columns: Vec<Column<Warehouse>> = vec![
        Column::new("SKU", "sku").sortable().min_width(100.0),
        Column::new("Name", "name").sortable().min_width(180.0),
        Column::new("Address", "address").min_width(240.0),
        Column::new("Phone", "phone").min_width(130.0),
    ];

    let actions = row_actions(move |w: &Arc<Warehouse>| {
        let edit_id = w.id.clone();
        let delete_id = w.id.clone();
        view! {
            <Button variant="ghost" size="sm" icon_name="edit" title="Chỉnh sửa"
                on_click=Callback::new(move |_| store.begin_edit(&edit_id)) />
            <Button variant="ghost" size="sm" icon_name="trash" title="Xóa"
                on_click=Callback::new(move |_| store.begin_delete(&delete_id)) />
        }
    });

    let on_confirm_delete = Callback::new(move |_| {
        if let Some(removed) = store.run("delete", |s| s.confirm_delete()) {
            notifications.success(format!("Đã xóa kho {}", removed.name));
        }
    });

    view! {
        <PageFrame page_id="a003_warehouse--list" category=PAGE_CAT_LIST>
            <PageHeader title="Quản lý kho".to_string()>
                <SearchInput
                    placeholder="Tìm kiếm kho theo tên hoặc địa chỉ..."
                    on_change=Callback::new(move |q: String| state.update(|s| s.set_query(&q)))
                />
                <Button variant="primary" icon_name="plus" on_click=Callback::new(move |_| store.begin_create())>
                    "Thêm mới"
                </Button>
            </PageHeader>

            <DataTable
                columns=columns
                records=records
                state=state
                empty_title="Chưa có kho nào"
                empty_description="Hãy thêm kho đầu tiên hoặc thử từ khóa khác"
                actions=actions
            />

            <WarehouseDetails vm=details />
            <ConfirmDelete
                open=store.open_signal(CrudModal::Delete)
                title="Xóa kho".to_string()
                record_name=Signal::derive(move || store.selected().map(|w| w.name.clone()).unwrap_or_default())
                message="Bạn có chắc chắn muốn xóa kho"
                confirm_label="Xóa"
                cancel_label="Hủy"
                on_confirm=on_confirm_delete
                on_cancel=store.on_cancel()
            />
        </PageFrame>
    }
}
