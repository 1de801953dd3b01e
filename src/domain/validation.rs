use thiserror::Error;

use super::catalog::VariantSnapshot;

/// A quantity that falls outside the variant's selling constraints.
///
/// The three reasons are kept distinct so callers can render a precise
/// message per bound instead of one generic rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("This product quantity should be at least {min}.")]
    BelowMinimum { min: i32 },
    #[error("This product quantity should be at most {max}.")]
    AboveMaximum { max: i32 },
    #[error("Only {available} product quantity is currently available.")]
    InsufficientStock { available: i32 },
}

impl QuantityError {
    /// Stable machine-matchable error-code fragment.
    pub fn slug(&self) -> &'static str {
        match self {
            QuantityError::BelowMinimum { .. } => "quantity-less-than-min-selling-quantity",
            QuantityError::AboveMaximum { .. } => "quantity-more-than-max-selling-quantity",
            QuantityError::InsufficientStock { .. } => "quantity-more-than-available-stock",
        }
    }
}

/// Check a requested quantity against the variant snapshot taken at the
/// start of the request. Bounds are evaluated in order: minimum, maximum,
/// stock. No stock is reserved or decremented here.
pub fn validate_quantity(quantity: i32, variant: &VariantSnapshot) -> Result<(), QuantityError> {
    if quantity < variant.min_selling_quantity {
        return Err(QuantityError::BelowMinimum {
            min: variant.min_selling_quantity,
        });
    }
    if quantity > variant.max_selling_quantity {
        return Err(QuantityError::AboveMaximum {
            max: variant.max_selling_quantity,
        });
    }
    if quantity > variant.available_stock {
        return Err(QuantityError::InsufficientStock {
            available: variant.available_stock,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use uuid::Uuid;

    use super::*;
    use crate::domain::catalog::ProductSnapshot;

    fn variant(min: i32, max: i32, stock: i32) -> VariantSnapshot {
        VariantSnapshot {
            id: Uuid::new_v4(),
            product: ProductSnapshot {
                id: Uuid::new_v4(),
                title: "Basmati Rice".to_string(),
                price: BigDecimal::from_str("90").unwrap(),
            },
            title: "Basmati Rice 5kg".to_string(),
            price: BigDecimal::from_str("100").unwrap(),
            min_selling_quantity: min,
            max_selling_quantity: max,
            available_stock: stock,
        }
    }

    #[test]
    fn accepts_exactly_the_closed_interval() {
        let v = variant(2, 10, 5);
        for quantity in 2..=5 {
            assert_eq!(validate_quantity(quantity, &v), Ok(()), "quantity {quantity}");
        }
    }

    #[test]
    fn rejects_below_minimum() {
        let v = variant(2, 10, 5);
        assert_eq!(
            validate_quantity(1, &v),
            Err(QuantityError::BelowMinimum { min: 2 })
        );
    }

    #[test]
    fn rejects_above_maximum() {
        let v = variant(2, 10, 5);
        assert_eq!(
            validate_quantity(11, &v),
            Err(QuantityError::AboveMaximum { max: 10 })
        );
    }

    #[test]
    fn rejects_quantity_exceeding_stock_within_selling_bounds() {
        let v = variant(2, 10, 5);
        assert_eq!(
            validate_quantity(6, &v),
            Err(QuantityError::InsufficientStock { available: 5 })
        );
    }

    #[test]
    fn stock_caps_the_maximum_when_lower() {
        // Effective upper bound is min(max_selling_quantity, available_stock).
        let v = variant(1, 100, 3);
        assert_eq!(validate_quantity(3, &v), Ok(()));
        assert!(matches!(
            validate_quantity(4, &v),
            Err(QuantityError::InsufficientStock { .. })
        ));
    }

    #[test]
    fn maximum_check_wins_over_stock_check() {
        // Both bounds violated: the max bound is reported first.
        let v = variant(2, 10, 5);
        assert!(matches!(
            validate_quantity(20, &v),
            Err(QuantityError::AboveMaximum { .. })
        ));
    }

    #[test]
    fn slugs_are_distinct_per_reason() {
        let below = QuantityError::BelowMinimum { min: 1 }.slug();
        let above = QuantityError::AboveMaximum { max: 1 }.slug();
        let stock = QuantityError::InsufficientStock { available: 1 }.slug();
        assert_ne!(below, above);
        assert_ne!(above, stock);
        assert_ne!(below, stock);
    }
}
