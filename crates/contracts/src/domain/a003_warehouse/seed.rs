use super::Warehouse;

pub fn warehouses() -> Vec<Warehouse> {
    vec![
        Warehouse {
            id: "1".into(),
            sku: "SKU-001".into(),
            name: "Warehouse 1".into(),
            address: "123 Main St, City".into(),
            phone: "1234567890".into(),
        },
        Warehouse {
            id: "2".into(),
            sku: "SKU-002".into(),
            name: "Warehouse 2".into(),
            address: "456 Elm St, City".into(),
            phone: "0987654321".into(),
        },
    ]
}
