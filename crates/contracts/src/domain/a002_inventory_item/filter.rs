//! Search box plus exact-match selects of the inventory list.

use super::{InventoryItem, StockStatus};
use crate::shared::search::{normalize_query, Searchable};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Current filter state. `None` selects mean "all".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryFilter {
    pub search: String,
    pub status: Option<StockStatus>,
    pub category: Option<String>,
    pub location: Option<String>,
}

impl InventoryFilter {
    pub fn is_active(&self) -> bool {
        !self.search.is_empty()
            || self.status.is_some()
            || self.category.is_some()
            || self.location.is_some()
    }

    fn matches(&self, needle: Option<&str>, item: &InventoryItem) -> bool {
        needle.map_or(true, |n| item.matches_filter(n))
            && self.status.map_or(true, |s| item.status == s)
            && self.category.as_deref().map_or(true, |c| item.category == c)
            && self.location.as_deref().map_or(true, |l| item.location == l)
    }

    /// Items passing every criterion, in collection order
    pub fn apply(&self, items: &[Arc<InventoryItem>]) -> Vec<Arc<InventoryItem>> {
        let needle = normalize_query(&self.search);
        items
            .iter()
            .filter(|item| self.matches(needle.as_deref(), item))
            .cloned()
            .collect()
    }
}

/// Distinct categories, sorted
pub fn category_options(items: &[Arc<InventoryItem>]) -> Vec<String> {
    distinct(items, |i| &i.category)
}

/// Distinct storage locations, sorted
pub fn location_options(items: &[Arc<InventoryItem>]) -> Vec<String> {
    distinct(items, |i| &i.location)
}

fn distinct<F>(items: &[Arc<InventoryItem>], key: F) -> Vec<String>
where
    F: Fn(&InventoryItem) -> &String,
{
    items
        .iter()
        .map(|i| key(i).clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_inventory_item::seed;
    use crate::shared::collection::from_seed;

    fn skus(items: &[Arc<InventoryItem>]) -> Vec<&str> {
        items.iter().map(|i| i.sku.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_all() {
        let items = from_seed(seed::inventory_items());
        let filter = InventoryFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&items).len(), 5);
    }

    #[test]
    fn test_search_by_name_or_sku() {
        let items = from_seed(seed::inventory_items());
        let by_sku = InventoryFilter {
            search: "thep".into(),
            ..Default::default()
        };
        assert_eq!(skus(&by_sku.apply(&items)), vec!["THEP-D10"]);

        let by_name = InventoryFilter {
            search: "xi măng".into(),
            ..Default::default()
        };
        assert_eq!(skus(&by_name.apply(&items)), vec!["XM-001"]);
    }

    #[test]
    fn test_selects_are_and_combined() {
        let items = from_seed(seed::inventory_items());
        let filter = InventoryFilter {
            category: Some("Vật liệu xây".into()),
            status: Some(StockStatus::LowStock),
            ..Default::default()
        };
        assert_eq!(skus(&filter.apply(&items)), vec!["CAT-001"]);

        let none = InventoryFilter {
            location: Some("Kho A-01".into()),
            status: Some(StockStatus::OutOfStock),
            ..Default::default()
        };
        assert!(none.apply(&items).is_empty());
    }

    #[test]
    fn test_options_are_distinct() {
        let items = from_seed(seed::inventory_items());
        assert_eq!(
            category_options(&items),
            vec!["Gạch xây", "Sơn", "Thép xây dựng", "Vật liệu xây"]
        );
        assert_eq!(location_options(&items).len(), 5);
    }
}
