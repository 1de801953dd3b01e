use bigdecimal::BigDecimal;
use uuid::Uuid;

/// Product data as read from the catalog at resolution time.
#[derive(Debug, Clone)]
pub struct ProductSnapshot {
    pub id: Uuid,
    pub title: String,
    pub price: BigDecimal,
}

/// A product variant together with its owning product, resolved once per
/// request. Order lines copy prices and titles from this snapshot; later
/// catalog changes never touch existing lines.
#[derive(Debug, Clone)]
pub struct VariantSnapshot {
    pub id: Uuid,
    pub product: ProductSnapshot,
    pub title: String,
    pub price: BigDecimal,
    pub min_selling_quantity: i32,
    pub max_selling_quantity: i32,
    pub available_stock: i32,
}
