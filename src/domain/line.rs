use bigdecimal::BigDecimal;
use serde_json::{json, Value};
use uuid::Uuid;

use super::catalog::VariantSnapshot;

/// A fully-populated order line ready to persist in a single write.
#[derive(Debug, Clone)]
pub struct BuiltLine {
    pub product_variant_id: Uuid,
    pub quantity: i32,
    pub index: i32,
    pub product_title: String,
    pub product_variant_title: String,
    pub product_variant_attributes: Value,
    pub unit_price: BigDecimal,
    pub product_price: BigDecimal,
    pub applied_price_rules: Value,
}

/// Combine a validated quantity with the resolved variant into a line
/// record, snapshotting titles and prices at build time.
///
/// `product_variant_attributes` and `applied_price_rules` stay empty;
/// attribute capture and price-rule application are extension points that
/// are not implemented yet.
pub fn build_line(variant: &VariantSnapshot, quantity: i32, index: i32) -> BuiltLine {
    BuiltLine {
        product_variant_id: variant.id,
        quantity,
        index,
        product_title: variant.product.title.clone(),
        product_variant_title: variant.title.clone(),
        product_variant_attributes: json!({}),
        unit_price: variant.price.clone(),
        product_price: variant.product.price.clone(),
        applied_price_rules: json!([]),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use uuid::Uuid;

    use super::*;
    use crate::domain::catalog::ProductSnapshot;

    fn snapshot() -> VariantSnapshot {
        VariantSnapshot {
            id: Uuid::new_v4(),
            product: ProductSnapshot {
                id: Uuid::new_v4(),
                title: "Basmati Rice".to_string(),
                price: BigDecimal::from_str("90").unwrap(),
            },
            title: "Basmati Rice 5kg".to_string(),
            price: BigDecimal::from_str("100").unwrap(),
            min_selling_quantity: 2,
            max_selling_quantity: 10,
            available_stock: 5,
        }
    }

    #[test]
    fn copies_quantity_and_snapshots_prices_and_titles() {
        let variant = snapshot();
        let line = build_line(&variant, 3, 0);

        assert_eq!(line.product_variant_id, variant.id);
        assert_eq!(line.quantity, 3);
        assert_eq!(line.index, 0);
        assert_eq!(line.product_title, "Basmati Rice");
        assert_eq!(line.product_variant_title, "Basmati Rice 5kg");
        assert_eq!(line.unit_price, BigDecimal::from_str("100").unwrap());
        assert_eq!(line.product_price, BigDecimal::from_str("90").unwrap());
    }

    #[test]
    fn placeholder_fields_are_empty() {
        let line = build_line(&snapshot(), 2, 4);
        assert_eq!(line.product_variant_attributes, serde_json::json!({}));
        assert_eq!(line.applied_price_rules, serde_json::json!([]));
    }
}
