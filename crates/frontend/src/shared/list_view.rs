//! Search, sort and paging state of a list page.
//!
//! Everything here is plain data; pages keep a `ListViewState` in a signal
//! and derive the visible window through a memo.

use contracts::shared::search::{filter_list, sort_list, Sortable};
use std::sync::Arc;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Number of pages needed for `total` rows, zero for an empty list.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewState {
    /// Debounced search text
    pub query: String,
    pub sort_by: Option<String>,
    pub sort_ascending: bool,
    /// 0-indexed
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl ListViewState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            query: String::new(),
            sort_by: None,
            sort_ascending: true,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// New query, back to the first page
    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
            self.page = 0;
        }
    }

    /// Same field flips the direction, another field sorts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_by.as_deref() == Some(field) {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_by = Some(field.to_string());
            self.sort_ascending = true;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    /// Filter, sort and slice `records`.
    pub fn window<T: Sortable>(&self, records: &[Arc<T>]) -> ListWindow<T> {
        let mut rows = filter_list::<T, _>(records, &self.query);
        if let Some(field) = &self.sort_by {
            sort_list::<T, _>(&mut rows, field, self.sort_ascending);
        }
        ListWindow::slice(rows, self.page, self.page_size)
    }
}

/// One page of filtered rows.
#[derive(Debug)]
pub struct ListWindow<T> {
    pub rows: Vec<Arc<T>>,
    pub total_count: usize,
    pub total_pages: usize,
    /// Requested page clamped to the last available one
    pub page: usize,
}

impl<T> Clone for ListWindow<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            total_count: self.total_count,
            total_pages: self.total_pages,
            page: self.page,
        }
    }
}

impl<T: PartialEq> PartialEq for ListWindow<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.total_count == other.total_count
            && self.total_pages == other.total_pages
            && self.page == other.page
    }
}

impl<T> ListWindow<T> {
    pub fn slice(filtered: Vec<Arc<T>>, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_count = filtered.len();
        let pages = total_pages(total_count, page_size);
        let page = page.min(pages.saturating_sub(1));
        let rows = filtered
            .into_iter()
            .skip(page * page_size)
            .take(page_size)
            .collect();
        Self {
            rows,
            total_count,
            total_pages: pages,
            page,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::seed::categories;
    use contracts::domain::a002_inventory_item::seed::inventory_items;
    use contracts::shared::collection::from_seed;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn test_slice_clamps_page() {
        let records = from_seed((0..25).collect::<Vec<u32>>());
        let w = ListWindow::slice(records.clone(), 2, 10);
        assert_eq!(w.rows.len(), 5);
        assert_eq!(w.total_pages, 3);

        let w = ListWindow::slice(records.clone(), 7, 10);
        assert_eq!(w.page, 2);
        assert_eq!(*w.rows[0], 20);

        let w = ListWindow::<u32>::slice(Vec::new(), 3, 10);
        assert_eq!(w.page, 0);
        assert!(w.is_empty());
    }

    #[test]
    fn test_search_then_clear_restores_order() {
        let records = from_seed(categories());
        let mut state = ListViewState::default();

        state.set_query("cloth");
        let w = state.window(&records);
        assert_eq!(w.rows.len(), 1);
        assert_eq!(w.rows[0].name, "Clothing");

        state.set_query("");
        let w = state.window(&records);
        let names: Vec<_> = w.rows.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Electronics", "Clothing", "Books"]);
    }

    #[test]
    fn test_query_and_page_size_reset_page() {
        let mut state = ListViewState::default();
        state.set_page(3);
        state.set_query("x");
        assert_eq!(state.page, 0);
        state.set_page(2);
        state.set_page_size(50);
        assert_eq!(state.page, 0);
        assert_eq!(state.page_size, 50);
    }

    #[test]
    fn test_toggle_sort_numeric() {
        let records = from_seed(inventory_items());
        let mut state = ListViewState::default();
        state.toggle_sort("quantity");
        let asc = state.window(&records);
        assert_eq!(asc.rows[0].quantity, 0.0);

        state.toggle_sort("quantity");
        assert!(!state.sort_ascending);
        let desc = state.window(&records);
        assert_eq!(desc.rows[0].quantity, 15000.0);
    }
}
