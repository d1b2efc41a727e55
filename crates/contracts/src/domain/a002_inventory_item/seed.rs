use super::{InventoryItem, StockStatus};

fn item(
    id: &str,
    name: &str,
    category: &str,
    sku: &str,
    quantity: f64,
    unit: &str,
    min_stock: f64,
    price: f64,
    supplier: &str,
    location: &str,
) -> InventoryItem {
    InventoryItem {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        sku: sku.into(),
        quantity,
        unit: unit.into(),
        min_stock,
        price,
        supplier: supplier.into(),
        location: location.into(),
        status: StockStatus::derive(quantity, min_stock),
    }
}

pub fn inventory_items() -> Vec<InventoryItem> {
    vec![
        item("1", "Xi măng Portland", "Vật liệu xây", "XM-001", 500.0, "Bao", 100.0, 85_000.0, "Xi măng Hoàng Thạch", "Kho A-01"),
        item("2", "Cát xây dựng", "Vật liệu xây", "CAT-001", 45.0, "m³", 50.0, 250_000.0, "Cát Bình Dương", "Kho B-02"),
        item("3", "Thép D10", "Thép xây dựng", "THEP-D10", 0.0, "Tấn", 5.0, 15_500_000.0, "Thép Việt Nhật", "Kho C-03"),
        item("4", "Gạch ống 4 lỗ", "Gạch xây", "GACH-001", 15_000.0, "Viên", 5_000.0, 1_500.0, "Gạch Đồng Tâm", "Kho A-05"),
        item("5", "Sơn nước ngoại thất", "Sơn", "SON-001", 80.0, "Thùng", 30.0, 1_200_000.0, "Sơn Jotun", "Kho D-01"),
    ]
}
