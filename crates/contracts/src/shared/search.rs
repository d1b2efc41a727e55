//! Text search and sorting over records.

use std::cmp::Ordering;

/// Records that can be matched against a free text query.
pub trait Searchable {
    /// Fields the free text query is matched against
    fn search_fields() -> &'static [&'static str];

    /// Display value of a field, `None` for unknown fields
    fn get_field_value(&self, field: &str) -> Option<String>;

    /// Case-insensitive substring match on any search field.
    /// `needle` must already be folded with [`fold_case`].
    fn matches_filter(&self, needle: &str) -> bool {
        Self::search_fields().iter().any(|field| {
            self.get_field_value(field)
                .map(|v| fold_case(&v).contains(needle))
                .unwrap_or(false)
        })
    }
}

/// Records that can be ordered by a column.
pub trait Sortable: Searchable {
    /// Compare by field. Defaults to a case-insensitive text comparison.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        let a = self.get_field_value(field).unwrap_or_default().to_lowercase();
        let b = other.get_field_value(field).unwrap_or_default().to_lowercase();
        a.cmp(&b)
    }
}

/// Lower case, one char at a time. Matching and highlighting both fold
/// through here so they agree on multi-char lower case forms.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Folded query, `None` when the query matches everything.
/// Only the empty string matches everything; whitespace is significant.
pub fn normalize_query(query: &str) -> Option<String> {
    if query.is_empty() {
        None
    } else {
        Some(fold_case(query))
    }
}

/// Records matching `query`, in their original order.
///
/// Works on anything clonable, so a page holding `Arc<T>` gets shared
/// handles back rather than copies.
pub fn filter_list<T, R>(items: &[R], query: &str) -> Vec<R>
where
    T: Searchable + ?Sized,
    R: AsRef<T> + Clone,
{
    match normalize_query(query) {
        None => items.to_vec(),
        Some(needle) => items
            .iter()
            .filter(|item| item.as_ref().matches_filter(&needle))
            .cloned()
            .collect(),
    }
}

pub fn sort_list<T, R>(items: &mut [R], field: &str, ascending: bool)
where
    T: Sortable + ?Sized,
    R: AsRef<T>,
{
    items.sort_by(|a, b| {
        let cmp = a.as_ref().compare_by_field(b.as_ref(), field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Numeric comparison helper for `compare_by_field` overrides.
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::{seed, Category};
    use crate::shared::collection::from_seed;
    use std::sync::Arc;

    fn names(items: &[Arc<Category>]) -> Vec<&str> {
        items.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let records = from_seed(seed::categories());
        let all = filter_list::<Category, _>(&records, "");
        assert_eq!(all, records);
        let blank = filter_list::<Category, _>(&records, "   ");
        assert!(blank.is_empty());
    }

    #[test]
    fn test_query_whitespace_is_part_of_the_needle() {
        let records = from_seed(seed::categories());
        for query in [" cloth", "cloth ", "ics ", " "] {
            let found = filter_list::<Category, _>(&records, query);
            for hit in &found {
                let contains = Category::search_fields().iter().any(|f| {
                    hit.get_field_value(f)
                        .map(|v| v.to_lowercase().contains(&query.to_lowercase()))
                        .unwrap_or(false)
                });
                assert!(contains, "{:?} returned for {:?}", hit.name, query);
            }
        }
        assert!(filter_list::<Category, _>(&records, " cloth").is_empty());
    }

    #[test]
    fn test_fold_case_expands_multi_char_lower_case() {
        assert_eq!(fold_case("İ"), "i\u{307}");
        assert_eq!(fold_case("ĐÁ"), "đá");
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let records = from_seed(seed::categories());
        let found = filter_list::<Category, _>(&records, "CLOTH");
        assert_eq!(names(&found), vec!["Clothing"]);
        assert!(Arc::ptr_eq(&found[0], &records[1]));
    }

    #[test]
    fn test_filter_matches_any_field_and_is_idempotent() {
        let records = from_seed(seed::categories());
        // "accessories" is only in the description of Electronics
        let once = filter_list::<Category, _>(&records, "accessories");
        assert_eq!(names(&once), vec!["Electronics"]);

        let twice = filter_list::<Category, _>(&once, "accessories");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_preserves_order() {
        let records = from_seed(seed::categories());
        let found = filter_list::<Category, _>(&records, "o");
        let positions: Vec<usize> = found
            .iter()
            .map(|f| records.iter().position(|r| Arc::ptr_eq(r, f)).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_sort_by_name() {
        let mut records = from_seed(seed::categories());
        sort_list::<Category, _>(&mut records, "name", true);
        assert_eq!(names(&records), vec!["Books", "Clothing", "Electronics"]);
        sort_list::<Category, _>(&mut records, "name", false);
        assert_eq!(names(&records), vec!["Electronics", "Clothing", "Books"]);
    }
}
