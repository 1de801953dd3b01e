//! Cart manager: owns the one-open-cart-per-shop invariant.
//!
//! Both entry points run on the caller's connection; callers wrap them in a
//! transaction and hold a `FOR UPDATE` lock on the shop row, which
//! serializes cart rotation per shop.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{OrderStatus, PaymentStatus};
use crate::schema::{orders, shops};

use super::models::{NewOrderRow, OrderRow, ShopRow};

fn create_cart_order(conn: &mut PgConnection, shop_id: Uuid) -> Result<OrderRow, DomainError> {
    let row = NewOrderRow {
        id: Uuid::new_v4(),
        number: None,
        note: None,
        current_status: OrderStatus::InCart.as_str().to_string(),
        payment_status: PaymentStatus::Pending.as_str().to_string(),
        shop_id,
    };
    let inserted = diesel::insert_into(orders::table)
        .values(&row)
        .returning(OrderRow::as_returning())
        .get_result(conn)?;

    diesel::update(shops::table.filter(shops::id.eq(shop_id)))
        .set((
            shops::cart_order_id.eq(inserted.id),
            shops::updated_at.eq(diesel::dsl::now),
        ))
        .execute(conn)?;

    Ok(inserted)
}

/// The shop's current `IN_CART` order, created and bound if none exists.
pub fn ensure_cart(conn: &mut PgConnection, shop: &ShopRow) -> Result<OrderRow, DomainError> {
    if let Some(cart_id) = shop.cart_order_id {
        let existing: Option<OrderRow> = orders::table
            .filter(orders::id.eq(cart_id))
            .filter(orders::current_status.eq(OrderStatus::InCart.as_str()))
            .select(OrderRow::as_select())
            .first(conn)
            .optional()?;
        if let Some(order) = existing {
            return Ok(order);
        }
    }
    create_cart_order(conn, shop.id)
}

/// Give the shop a brand-new empty cart and return it. The order being
/// placed is untouched here; rotation never reuses its id.
pub fn rotate_cart(conn: &mut PgConnection, shop: &ShopRow) -> Result<OrderRow, DomainError> {
    create_cart_order(conn, shop.id)
}
