//! Generic table over `Arc` records.
//!
//! The page owns the `ListViewState` (query, sort, page) and the records;
//! the table derives the visible window, renders the header with sort
//! markers, the rows, pagination and the empty state.

use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, highlight_matches};
use crate::shared::list_view::{ListViewState, ListWindow};
use contracts::domain::common::Record;
use contracts::shared::search::Sortable;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

type CellRenderer<T> = Arc<dyn Fn(&Arc<T>, &str) -> AnyView + Send + Sync>;

/// Column: title, source field and an optional custom cell renderer
pub struct Column<T> {
    pub title: &'static str,
    pub field: &'static str,
    pub sortable: bool,
    pub min_width: f64,
    render: Option<CellRenderer<T>>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            title: self.title,
            field: self.field,
            sortable: self.sortable,
            min_width: self.min_width,
            render: self.render.clone(),
        }
    }
}

impl<T: Sortable> Column<T> {
    pub fn new(title: &'static str, field: &'static str) -> Self {
        Self {
            title,
            field,
            sortable: false,
            min_width: 100.0,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn min_width(mut self, width: f64) -> Self {
        self.min_width = width;
        self
    }

    /// Custom cell; receives the record and the current search query
    pub fn render<V: IntoView + 'static>(
        mut self,
        f: impl Fn(&Arc<T>, &str) -> V + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(move |r, q| f(r, q).into_any()));
        self
    }

    fn cell(&self, record: &Arc<T>, query: &str) -> AnyView {
        match &self.render {
            Some(render) => render(record, query),
            None => {
                let text = record.get_field_value(self.field).unwrap_or_default();
                if T::search_fields().contains(&self.field) {
                    highlight_matches(&text, query)
                } else {
                    view! { <span>{text}</span> }.into_any()
                }
            }
        }
    }
}

type RowActions<T> = Arc<dyn Fn(&Arc<T>) -> AnyView + Send + Sync>;

/// Wrap a row action renderer for `DataTable::actions`
pub fn row_actions<T, V>(f: impl Fn(&Arc<T>) -> V + Send + Sync + 'static) -> RowActions<T>
where
    V: IntoView + 'static,
{
    Arc::new(move |r| f(r).into_any())
}

#[component]
pub fn DataTable<T>(
    columns: Vec<Column<T>>,
    /// Records before search, sort and paging
    #[prop(into)]
    records: Signal<Vec<Arc<T>>>,
    state: RwSignal<ListViewState>,
    #[prop(into)]
    empty_title: String,
    #[prop(into)]
    empty_description: String,
    /// Trailing actions column
    #[prop(optional)]
    actions: Option<RowActions<T>>,
    #[prop(optional)]
    on_row_click: Option<Callback<Arc<T>>>,
) -> impl IntoView
where
    T: Sortable + Record + PartialEq + Send + Sync + 'static,
{
    let config = use_config();
    let window: Memo<ListWindow<T>> =
        Memo::new(move |_| records.with(|r| state.with(|s| s.window(r))));

    // keep the stored page in range once filtering shrinks the list
    Effect::new(move |_| {
        let clamped = window.with(|w| w.page);
        if state.with_untracked(|s| s.page) != clamped {
            state.update(|s| s.set_page(clamped));
        }
    });

    let columns = StoredValue::new(columns);
    let actions = StoredValue::new(actions);
    let has_actions = actions.with_value(|a| a.is_some());

    let toggle_sort = move |field: &'static str| state.update(|s| s.toggle_sort(field));

    view! {
        <Show
            when=move || !window.with(|w| w.is_empty())
            fallback=move || view! {
                <EmptyState title=empty_title.clone() description=empty_description.clone() />
            }
        >
            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {columns.with_value(|cols| cols.iter().map(|col| {
                                let field = col.field;
                                let title = col.title;
                                if col.sortable {
                                    view! {
                                        <TableHeaderCell resizable=false min_width=col.min_width class="resizable">
                                            <div class="table__sortable-header" style="cursor: pointer;" on:click=move |_| toggle_sort(field)>
                                                {title}
                                                <span class=move || state.with(|s| get_sort_class(s.sort_by.as_deref(), field))>
                                                    {move || state.with(|s| get_sort_indicator(s.sort_by.as_deref(), field, s.sort_ascending))}
                                                </span>
                                            </div>
                                        </TableHeaderCell>
                                    }.into_any()
                                } else {
                                    view! {
                                        <TableHeaderCell resizable=false min_width=col.min_width class="resizable">
                                            {title}
                                        </TableHeaderCell>
                                    }.into_any()
                                }
                            }).collect_view())}
                            {has_actions.then(|| view! {
                                <TableHeaderCell resizable=false min_width=120.0>"Actions"</TableHeaderCell>
                            })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || window.with(|w| w.rows.clone())
                            // a replaced record gets a new allocation, so its row re-renders
                            key=|r| (r.id().to_string(), Arc::as_ptr(r) as usize)
                            children=move |record| {
                                let for_click = Arc::clone(&record);
                                let row_class = if on_row_click.is_some() { "table__row--clickable" } else { "" };
                                let cells = columns.with_value(|cols| {
                                    cols.iter().map(|col| {
                                        let col = col.clone();
                                        let record = Arc::clone(&record);
                                        view! {
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || state.with(|s| col.cell(&record, &s.query))}
                                                </TableCellLayout>
                                            </TableCell>
                                        }
                                    }).collect_view()
                                });
                                let action_cell = actions.with_value(|a| a.clone()).map(|render| {
                                    let buttons = render(&record);
                                    view! {
                                        <TableCell>
                                            <div class="table__actions" on:click=|ev| ev.stop_propagation()>
                                                {buttons}
                                            </div>
                                        </TableCell>
                                    }
                                });
                                view! {
                                    <TableRow
                                        class=row_class
                                        on:click=move |_| {
                                            if let Some(cb) = on_row_click {
                                                cb.run(Arc::clone(&for_click));
                                            }
                                        }
                                    >
                                        {cells}
                                        {action_cell}
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
            <PaginationControls
                current_page=Signal::derive(move || window.with(|w| w.page))
                total_pages=Signal::derive(move || window.with(|w| w.total_pages))
                total_count=Signal::derive(move || window.with(|w| w.total_count))
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=Callback::new(move |page| state.update(|s| s.set_page(page)))
                on_page_size_change=Callback::new(move |size| state.update(|s| s.set_page_size(size)))
                page_size_options=config.table.page_size_options.clone()
            />
        </Show>
    }
}
