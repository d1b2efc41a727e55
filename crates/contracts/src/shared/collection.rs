//! Immutable operations over a page-local record collection.
//!
//! Records are shared as `Arc<T>`: every operation returns a new vector and
//! records it does not touch keep their allocation, so `Arc::ptr_eq` holds
//! between the old and the new sequence.

use crate::domain::common::{Patch, Record};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("record '{0}' not found")]
    NotFound(String),
    #[error("record '{0}' already exists")]
    DuplicateId(String),
}

/// Wrap seed values into a shared collection.
pub fn from_seed<T>(seed: Vec<T>) -> Vec<Arc<T>> {
    seed.into_iter().map(Arc::new).collect()
}

pub fn find<'a, T: Record>(records: &'a [Arc<T>], id: &str) -> Option<&'a Arc<T>> {
    records.iter().find(|r| r.id() == id)
}

/// Append a record. The identifier must be fresh.
pub fn add<T: Record>(records: &[Arc<T>], record: T) -> Result<Vec<Arc<T>>, CollectionError> {
    if find(records, record.id()).is_some() {
        return Err(CollectionError::DuplicateId(record.id().to_string()));
    }
    let mut next = Vec::with_capacity(records.len() + 1);
    next.extend(records.iter().cloned());
    next.push(Arc::new(record));
    Ok(next)
}

/// Merge `patch` into the record with `id`. Unknown ids yield an equal copy.
pub fn replace<T, P>(records: &[Arc<T>], id: &str, patch: &P) -> Vec<Arc<T>>
where
    T: Record,
    P: Patch<Target = T>,
{
    records
        .iter()
        .map(|r| {
            if r.id() == id {
                Arc::new(patch.apply(r))
            } else {
                Arc::clone(r)
            }
        })
        .collect()
}

/// Drop the record with `id`. Unknown ids yield an equal copy.
pub fn remove<T: Record>(records: &[Arc<T>], id: &str) -> Vec<Arc<T>> {
    records
        .iter()
        .filter(|r| r.id() != id)
        .cloned()
        .collect()
}

/// Like [`remove`] but reports an unknown id.
pub fn try_remove<T: Record>(records: &[Arc<T>], id: &str) -> Result<Vec<Arc<T>>, CollectionError> {
    if find(records, id).is_none() {
        return Err(CollectionError::NotFound(id.to_string()));
    }
    Ok(remove(records, id))
}

/// Element-wise pointer equality.
pub fn same_records<T>(a: &[Arc<T>], b: &[Arc<T>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| Arc::ptr_eq(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::{Category, CategoryPatch, CategoryStatus};

    fn cat(id: &str, name: &str) -> Category {
        Category {
            id: id.into(),
            code: format!("C{}", id),
            name: name.into(),
            description: String::new(),
            status: CategoryStatus::Active,
        }
    }

    fn sample() -> Vec<Arc<Category>> {
        from_seed(vec![cat("1", "Electronics"), cat("2", "Clothing")])
    }

    #[test]
    fn test_add_then_remove_restores_collection() {
        let records = sample();
        let added = add(&records, cat("3", "Books")).unwrap();
        assert_eq!(added.len(), 3);
        assert_eq!(added[2].name, "Books");

        let back = remove(&added, "3");
        assert!(same_records(&records, &back));
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let records = sample();
        assert_eq!(
            add(&records, cat("2", "Dup")),
            Err(CollectionError::DuplicateId("2".into()))
        );
    }

    #[test]
    fn test_replace_keeps_untouched_records_shared() {
        let records = sample();
        let patch = CategoryPatch {
            status: Some(CategoryStatus::Inactive),
            ..Default::default()
        };
        let next = replace(&records, "1", &patch);

        assert_eq!(next[0].status, CategoryStatus::Inactive);
        assert_eq!(next[0].code, "C1");
        assert_eq!(next[0].name, "Electronics");
        assert!(!Arc::ptr_eq(&records[0], &next[0]));
        assert!(Arc::ptr_eq(&records[1], &next[1]));
        // source sequence is untouched
        assert_eq!(records[0].status, CategoryStatus::Active);
    }

    #[test]
    fn test_replace_unknown_id_is_equal() {
        let records = sample();
        let patch = CategoryPatch {
            name: Some("X".into()),
            ..Default::default()
        };
        let next = replace(&records, "missing", &patch);
        assert!(same_records(&records, &next));
    }

    #[test]
    fn test_remove_unknown_id() {
        let records = sample();
        assert!(same_records(&records, &remove(&records, "42")));
        assert_eq!(
            try_remove(&records, "42"),
            Err(CollectionError::NotFound("42".into()))
        );
        let next = try_remove(&records, "2").unwrap();
        assert_eq!(next.len(), 1);
        assert!(find(&next, "2").is_none());
    }
}
