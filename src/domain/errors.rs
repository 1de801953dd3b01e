use thiserror::Error;
use uuid::Uuid;

use super::validation::QuantityError;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No Order found with ID={0}.")]
    OrderNotFound(Uuid),
    #[error("No Order Line found with ID={0}.")]
    OrderLineNotFound(Uuid),
    #[error("No Product Variant found with ID={0}.")]
    VariantNotFound(Uuid),
    // A variant with a dangling product reference is unusable, not merely
    // missing, so it gets its own kind.
    #[error("The Product Variant has no product.")]
    ProductMissing,
    #[error("No Shop found with ID={0}.")]
    ShopNotFound(Uuid),
    #[error("The Order has already been placed.")]
    AlreadyPlaced(Uuid),
    #[error(transparent)]
    Quantity(#[from] QuantityError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Stable machine-matchable error-code fragment. The transport layer
    /// prefixes this with the operation scope, e.g.
    /// `order-line.create.error.order-not-found`.
    pub fn slug(&self) -> &'static str {
        match self {
            DomainError::OrderNotFound(_) => "order-not-found",
            DomainError::OrderLineNotFound(_) => "order-line-not-found",
            DomainError::VariantNotFound(_) => "product-variant-not-found",
            DomainError::ProductMissing => "product-not-found",
            DomainError::ShopNotFound(_) => "shop-not-found",
            DomainError::AlreadyPlaced(_) => "order-already-placed",
            DomainError::Quantity(e) => e.slug(),
            DomainError::Internal(_) => "internal",
        }
    }

    /// The request field the error relates to, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DomainError::Quantity(_) => Some("quantity"),
            _ => None,
        }
    }
}
