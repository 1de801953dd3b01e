use uuid::Uuid;

use super::errors::DomainError;
use super::order::{CreateOrder, OrderLineView, OrderView};

/// Persistence port for the order lifecycle. Every mutating call is a single
/// atomic workflow: either all of its writes land, or none do.
pub trait OrderStore: Send + Sync + 'static {
    /// Create an order directly as `PLACED`, validating and pricing every
    /// line against the catalog. Line indexes follow input order, 0-based.
    fn create_order(&self, input: CreateOrder) -> Result<OrderView, DomainError>;

    /// Append one validated, fully-snapshotted line to an existing order.
    fn append_line(
        &self,
        order_id: Uuid,
        product_variant_id: Uuid,
        quantity: i32,
    ) -> Result<OrderLineView, DomainError>;

    /// Change a line's quantity, re-validating against the line's own
    /// variant. Snapshot fields are refreshed only while the parent order is
    /// still in the cart.
    fn update_line(&self, line_id: Uuid, quantity: i32) -> Result<OrderLineView, DomainError>;

    /// Place a cart order: rotate the shop's cart to a fresh empty order and
    /// mark this one `PLACED` with a generated number.
    fn place_order(&self, order_id: Uuid, note: Option<String>) -> Result<OrderView, DomainError>;

    /// The shop's current cart order, created on demand.
    fn ensure_cart(&self, shop_id: Uuid) -> Result<OrderView, DomainError>;

    fn find_order(&self, order_id: Uuid) -> Result<Option<OrderView>, DomainError>;
}
