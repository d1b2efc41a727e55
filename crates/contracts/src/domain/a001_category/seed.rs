use super::{Category, CategoryStatus};

/// Categories shown on first load
pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: "1".into(),
            code: "ELEC".into(),
            name: "Electronics".into(),
            description: "Electronic devices and accessories".into(),
            status: CategoryStatus::Active,
        },
        Category {
            id: "2".into(),
            code: "CLTH".into(),
            name: "Clothing".into(),
            description: "Fashion and apparel items".into(),
            status: CategoryStatus::Active,
        },
        Category {
            id: "3".into(),
            code: "BOOK".into(),
            name: "Books".into(),
            description: "Books and educational materials".into(),
            status: CategoryStatus::Active,
        },
    ]
}
