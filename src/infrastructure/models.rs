use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use crate::schema::{order_lines, orders, product_variants, products, shops};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = shops)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShopRow {
    pub id: Uuid,
    pub name: String,
    pub cart_order_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub id: Uuid,
    pub title: String,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = product_variants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductVariantRow {
    pub id: Uuid,
    pub product_id: Option<Uuid>,
    pub title: String,
    pub price: BigDecimal,
    pub min_selling_quantity: i32,
    pub max_selling_quantity: i32,
    pub available_stock: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: Uuid,
    pub number: Option<String>,
    pub note: Option<String>,
    pub current_status: String,
    pub payment_status: String,
    pub shop_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub id: Uuid,
    pub number: Option<String>,
    pub note: Option<String>,
    pub current_status: String,
    pub payment_status: String,
    pub shop_id: Uuid,
}

#[derive(
    Debug, Clone, Queryable, Selectable, Identifiable, Associations,
)]
#[diesel(table_name = order_lines)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderLineRow {
    pub id: Uuid,
    pub order_id: Uuid,
    pub line_index: i32,
    pub product_variant_id: Uuid,
    pub quantity: i32,
    pub product_title: String,
    pub product_variant_title: String,
    pub product_variant_attributes: Value,
    pub unit_price: BigDecimal,
    pub product_price: BigDecimal,
    pub applied_price_rules: Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_lines)]
pub struct NewOrderLineRow {
    pub id: Uuid,
    pub order_id: Uuid,
    pub line_index: i32,
    pub product_variant_id: Uuid,
    pub quantity: i32,
    pub product_title: String,
    pub product_variant_title: String,
    pub product_variant_attributes: Value,
    pub unit_price: BigDecimal,
    pub product_price: BigDecimal,
    pub applied_price_rules: Value,
}
