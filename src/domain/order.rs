use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use super::errors::DomainError;

/// Lifecycle status of an order. `InCart` is the shop's standing draft;
/// `Placed` is terminal for this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    InCart,
    Placed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::InCart => "IN_CART",
            OrderStatus::Placed => "PLACED",
        }
    }

    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "IN_CART" => Ok(OrderStatus::InCart),
            "PLACED" => Ok(OrderStatus::Placed),
            other => Err(DomainError::Internal(format!(
                "unknown order status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
        }
    }

    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "PENDING" => Ok(PaymentStatus::Pending),
            other => Err(DomainError::Internal(format!(
                "unknown payment status '{other}'"
            ))),
        }
    }
}

/// One requested line in a create-order call: which variant, how many.
#[derive(Debug, Clone)]
pub struct LineSpec {
    pub product_variant_id: Uuid,
    pub quantity: i32,
}

/// Input for the direct create-order flow (order persisted as `PLACED`).
#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub shop_id: Uuid,
    pub note: Option<String>,
    pub lines: Vec<LineSpec>,
}

#[derive(Debug, Clone)]
pub struct OrderLineView {
    pub id: Uuid,
    pub order_id: Uuid,
    pub index: i32,
    pub product_variant_id: Uuid,
    pub quantity: i32,
    pub product_title: String,
    pub product_variant_title: String,
    pub product_variant_attributes: Value,
    pub unit_price: BigDecimal,
    pub product_price: BigDecimal,
    pub applied_price_rules: Value,
}

#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: Uuid,
    pub number: Option<String>,
    pub note: Option<String>,
    pub current_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub shop_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLineView>,
}
