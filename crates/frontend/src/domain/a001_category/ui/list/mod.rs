use crate::domain::a001_category::ui::details::{CategoryDetails, CategoryDetailsViewModel};
use crate::shared::components::confirm_delete::ConfirmDelete;
use crate::shared::components::data_table::{row_actions, Column, DataTable};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::config::use_config;
use crate::shared::crud::{CrudModal, CrudStore};
use crate::shared::list_utils::SearchInput;
use crate::shared::list_view::ListViewState;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a001_category::{seed, Category, CategoryStatus};
use contracts::shared::collection::from_seed;
use leptos::prelude::*;
use std::sync::Arc;

fn status_badge(status: CategoryStatus) -> impl IntoView {
    let variant = match status {
        CategoryStatus::Active => "success",
        CategoryStatus::Inactive => "neutral",
    };
    view! { <Badge variant=variant>{status.label()}</Badge> }
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let config = use_config();
    let notifications = use_notifications();
    let store = CrudStore::new(from_seed(seed::categories()));
    let state = RwSignal::new(ListViewState::with_page_size(config.table.default_page_size));
    let details = CategoryDetailsViewModel::new(store);

    let records = Signal::derive(move || store.records());

    let columns = vec![
        Column::new("Name", "name").sortable().min_width(180.0),
        Column::new("Code", "code").sortable().min_width(90.0),
        Column::new("Description", "description").min_width(260.0),
        Column::new("Status", "status")
            .sortable()
            .render(|c: &Arc<Category>, _| status_badge(c.status)),
    ];

    let actions = row_actions(move |c: &Arc<Category>| {
        let edit_id = c.id.clone();
        let delete_id = c.id.clone();
        view! {
            <Button
                variant="ghost"
                size="sm"
                icon_name="edit"
                title="Edit"
                on_click=Callback::new(move |_| store.begin_edit(&edit_id))
            />
            <Button
                variant="ghost"
                size="sm"
                icon_name="trash"
                title="Delete"
                on_click=Callback::new(move |_| store.begin_delete(&delete_id))
            />
        }
    });

    let on_confirm_delete = Callback::new(move |_| {
        if let Some(removed) = store.run("delete", |s| s.confirm_delete()) {
            notifications.success(format!("Category \"{}\" deleted", removed.name));
        }
    });

    view! {
        <PageFrame page_id="a001_category--list" category=PAGE_CAT_LIST>
            <PageHeader title="Category Management".to_string()>
                <Button variant="primary" icon_name="plus" on_click=Callback::new(move |_| store.begin_create())>
                    "Add new"
                </Button>
            </PageHeader>

            <div class="page__toolbar">
                <SearchInput
                    placeholder="Search categories by name or description..."
                    on_change=Callback::new(move |q: String| state.update(|s| s.set_query(&q)))
                />
            </div>

            <DataTable
                columns=columns
                records=records
                state=state
                empty_title="No Categories Found"
                empty_description="Start by adding your first category"
                actions=actions
            />

            <CategoryDetails vm=details />
            <ConfirmDelete
                open=store.open_signal(CrudModal::Delete)
                title="Delete Category".to_string()
                record_name=Signal::derive(move || store.selected().map(|c| c.name.clone()).unwrap_or_default())
                on_confirm=on_confirm_delete
                on_cancel=store.on_cancel()
            />
        </PageFrame>
    }
}
