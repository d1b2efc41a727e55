use super::Record;
use std::sync::Arc;
use uuid::Uuid;

/// Fresh random identifier.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Identifier not used by any record of `existing`.
///
/// v4 collisions are not expected in practice, the loop only guarantees the
/// uniqueness invariant of the collection.
pub fn new_unique_id<T: Record>(existing: &[Arc<T>]) -> String {
    loop {
        let candidate = new_record_id();
        if !existing.iter().any(|r| r.id() == candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy(String);

    impl Record for Dummy {
        fn id(&self) -> &str {
            &self.0
        }
        fn display_name(&self) -> &str {
            &self.0
        }
        fn record_index() -> &'static str {
            "t000"
        }
        fn collection_name() -> &'static str {
            "dummy"
        }
        fn element_name() -> &'static str {
            "Dummy"
        }
        fn list_name() -> &'static str {
            "Dummies"
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut items: Vec<Arc<Dummy>> = Vec::new();
        for _ in 0..200 {
            let id = new_unique_id(&items);
            assert!(!items.iter().any(|d| d.0 == id));
            items.push(Arc::new(Dummy(id)));
        }
        assert_eq!(items.len(), 200);
    }

    #[test]
    fn test_id_is_uuid() {
        assert!(Uuid::parse_str(&new_record_id()).is_ok());
        assert_eq!(Dummy::full_name(), "t000_dummy");
    }
}
