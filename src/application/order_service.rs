use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{CreateOrder, OrderLineView, OrderView};
use crate::domain::ports::OrderStore;

/// Application facade over the order store. Handlers talk to this, never to
/// diesel directly.
pub struct OrderService<S> {
    store: S,
}

impl<S: OrderStore> OrderService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_order(&self, input: CreateOrder) -> Result<OrderView, DomainError> {
        self.store.create_order(input)
    }

    pub fn append_line(
        &self,
        order_id: Uuid,
        product_variant_id: Uuid,
        quantity: i32,
    ) -> Result<OrderLineView, DomainError> {
        self.store.append_line(order_id, product_variant_id, quantity)
    }

    pub fn update_line(&self, line_id: Uuid, quantity: i32) -> Result<OrderLineView, DomainError> {
        self.store.update_line(line_id, quantity)
    }

    pub fn place_order(
        &self,
        order_id: Uuid,
        note: Option<String>,
    ) -> Result<OrderView, DomainError> {
        self.store.place_order(order_id, note)
    }

    pub fn shopping_cart(&self, shop_id: Uuid) -> Result<OrderView, DomainError> {
        self.store.ensure_cart(shop_id)
    }

    pub fn get_order(&self, order_id: Uuid) -> Result<Option<OrderView>, DomainError> {
        self.store.find_order(order_id)
    }
}
