use crate::domain::a002_inventory_item::ui::details::{
    stock_badge, InventoryDetails, InventoryDetailsViewModel, InventoryPreview,
};
use crate::shared::components::confirm_delete::ConfirmDelete;
use crate::shared::components::data_table::{row_actions, Column, DataTable};
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::config::use_config;
use crate::shared::crud::{CrudModal, CrudStore};
use crate::shared::export::{export_to_excel, ExcelExportable};
use crate::shared::format::{format_quantity, format_vnd};
use crate::shared::list_utils::{filter_list, highlight_matches, SearchInput};
use crate::shared::list_view::ListViewState;
use crate::shared::modals::use_modals;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a002_inventory_item::filter::{category_options, location_options};
use contracts::domain::a002_inventory_item::{seed, InventoryFilter, InventoryItem, StockStatus};
use contracts::shared::collection::from_seed;
use leptos::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InventoryModal {
    View,
}

impl ExcelExportable for InventoryItem {
    fn headers() -> Vec<&'static str> {
        vec![
            "Mã SKU",
            "Tên vật tư",
            "Danh mục",
            "Số lượng",
            "Đơn vị",
            "Mức tối thiểu",
            "Đơn giá",
            "Nhà cung cấp",
            "Vị trí",
            "Trạng thái",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.sku.clone(),
            self.name.clone(),
            self.category.clone(),
            self.quantity.to_string(),
            self.unit.clone(),
            self.min_stock.to_string(),
            self.price.to_string(),
            self.supplier.clone(),
            self.location.clone(),
            self.status.label().to_string(),
        ]
    }
}

fn to_options(values: Vec<String>) -> Vec<(String, String)> {
    values.into_iter().map(|v| (v.clone(), v)).collect()
}

#[component]
#[allow(non_snake_case)]
pub fn InventoryList() -> impl IntoView {
    let config = use_config();
    let notifications = use_notifications();
    let store = CrudStore::new(from_seed(seed::inventory_items()));
    let state = RwSignal::new(ListViewState::with_page_size(config.table.default_page_size));
    let filter = RwSignal::new(InventoryFilter::default());
    let details = InventoryDetailsViewModel::new(store);

    let modals = use_modals(&[InventoryModal::View]);
    let view_modal = modals.get(InventoryModal::View);
    let viewing = RwSignal::new(None::<Arc<InventoryItem>>);

    // selects narrow the collection; the table applies the text search
    let records = Signal::derive(move || {
        let all = store.records();
        filter.with(|f| f.apply(&all))
    });

    let category_choices = Signal::derive(move || to_options(category_options(&store.records())));
    let location_choices = Signal::derive(move || to_options(location_options(&store.records())));
    let status_choices = Signal::derive(|| {
        StockStatus::all()
            .iter()
            .map(|s| (s.as_str().to_string(), s.label().to_string()))
            .collect::<Vec<_>>()
    });

    let update_filter = move |f: &dyn Fn(&mut InventoryFilter)| {
        filter.update(|current| f(current));
        state.update(|s| s.set_page(1));
    };

    let columns = vec![
        Column::new("Mã SKU", "sku").sortable().min_width(110.0),
        Column::new("Tên vật tư", "name")
            .sortable()
            .min_width(200.0)
            .render(|item: &Arc<InventoryItem>, query| {
                view! {
                    <div class="cell-stack">
                        <div class="cell-stack__main">{highlight_matches(&item.name, query)}</div>
                        <div class="cell-stack__sub">{item.supplier.clone()}</div>
                    </div>
                }
            }),
        Column::new("Danh mục", "category").sortable().min_width(130.0),
        Column::new("Số lượng", "quantity")
            .sortable()
            .render(|item: &Arc<InventoryItem>, _| {
                view! {
                    <div class="cell-stack">
                        <div class="cell-stack__main">
                            {format!("{} {}", format_quantity(item.quantity), item.unit)}
                        </div>
                        <div class="cell-stack__sub">
                            {format!("Tối thiểu: {}", format_quantity(item.min_stock))}
                        </div>
                    </div>
                }
            }),
        Column::new("Đơn giá", "price")
            .sortable()
            .render(|item: &Arc<InventoryItem>, _| view! { <span>{format_vnd(item.price)}</span> }),
        Column::new("Vị trí", "location").sortable(),
        Column::new("Trạng thái", "status")
            .sortable()
            .render(|item: &Arc<InventoryItem>, _| stock_badge(item.status)),
    ];

    let open_preview = Callback::new(move |item: Arc<InventoryItem>| {
        viewing.set(Some(item));
        view_modal.open();
    });

    let actions = row_actions(move |item: &Arc<InventoryItem>| {
        let preview = Arc::clone(item);
        let edit_id = item.id.clone();
        let delete_id = item.id.clone();
        view! {
            <Button
                variant="ghost"
                size="sm"
                icon_name="eye"
                title="Xem chi tiết"
                on_click=Callback::new(move |_| open_preview.run(Arc::clone(&preview)))
            />
            <Button
                variant="ghost"
                size="sm"
                icon_name="edit"
                title="Chỉnh sửa"
                on_click=Callback::new(move |_| store.begin_edit(&edit_id))
            />
            <Button
                variant="ghost"
                size="sm"
                icon_name="trash"
                title="Xóa"
                on_click=Callback::new(move |_| store.begin_delete(&delete_id))
            />
        }
    });

    let on_export = Callback::new(move |_| {
        let rows = state.with_untracked(|s| filter_list::<InventoryItem, _>(&records.get_untracked(), &s.query));
        match export_to_excel(&rows, "vat-tu.csv") {
            Ok(()) => notifications.success(format!("Đã xuất {} vật tư", rows.len())),
            Err(e) => {
                log::warn!("inventory export failed: {}", e);
                notifications.error(format!("Không thể xuất dữ liệu: {}", e));
            }
        }
    });

    let on_confirm_delete = Callback::new(move |_| {
        if let Some(removed) = store.run("delete", |s| s.confirm_delete()) {
            notifications.success(format!("Đã xóa vật tư {}", removed.name));
        }
    });

    let close_preview = Callback::new(move |_| {
        view_modal.close();
        viewing.set(None);
    });

    view! {
        <PageFrame page_id="a002_inventory_item--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Quản lý vật tư".to_string()
                subtitle="Theo dõi và quản lý vật tư xây dựng trong kho"
            >
                <Button variant="secondary" icon_name="download" on_click=on_export>
                    "Xuất Excel"
                </Button>
                <Button variant="primary" icon_name="plus" on_click=Callback::new(move |_| store.begin_create())>
                    "Thêm mới"
                </Button>
            </PageHeader>

            <div class="page__toolbar filter-bar">
                <SearchInput
                    placeholder="Tìm kiếm theo tên hoặc mã SKU..."
                    on_change=Callback::new(move |q: String| state.update(|s| s.set_query(&q)))
                />
                <FilterSelect
                    value=Signal::derive(move || filter.with(|f| f.category.clone()))
                    options=category_choices
                    all_label="Tất cả danh mục"
                    on_change=Callback::new(move |v: Option<String>| update_filter(&|f| f.category = v.clone()))
                />
                <FilterSelect
                    value=Signal::derive(move || filter.with(|f| f.location.clone()))
                    options=location_choices
                    all_label="Tất cả kho"
                    on_change=Callback::new(move |v: Option<String>| update_filter(&|f| f.location = v.clone()))
                />
                <FilterSelect
                    value=Signal::derive(move || filter.with(|f| f.status.map(|s| s.as_str().to_string())))
                    options=status_choices
                    all_label="Tất cả trạng thái"
                    on_change=Callback::new(move |v: Option<String>| {
                        let status = v.as_deref().and_then(StockStatus::from_str);
                        update_filter(&|f| f.status = status)
                    })
                />
                <Show when=move || filter.with(|f| f.is_active())>
                    <Button
                        variant="ghost"
                        icon_name="x"
                        on_click=Callback::new(move |_| update_filter(&|f| *f = InventoryFilter::default()))
                    >
                        "Xóa bộ lọc"
                    </Button>
                </Show>
            </div>

            <DataTable
                columns=columns
                records=records
                state=state
                empty_title="Không tìm thấy vật tư nào"
                empty_description="Hãy thử thay đổi bộ lọc hoặc tìm kiếm lại"
                actions=actions
                on_row_click=open_preview
            />

            <InventoryPreview open=view_modal.signal() item=viewing on_close=close_preview />
            <InventoryDetails vm=details />
            <ConfirmDelete
                open=store.open_signal(CrudModal::Delete)
                title="Xóa vật tư".to_string()
                record_name=Signal::derive(move || store.selected().map(|i| i.name.clone()).unwrap_or_default())
                message="Bạn có chắc chắn muốn xóa vật tư"
                confirm_label="Xóa"
                cancel_label="Hủy"
                on_confirm=on_confirm_delete
                on_cancel=store.on_cancel()
            />
        </PageFrame>
    }
}
