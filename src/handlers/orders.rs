use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::order::{CreateOrder, LineSpec, OrderLineView, OrderView};
use crate::errors::AppError;
use crate::AppService;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderLineSpec {
    /// Accepted for wire compatibility; line indexes are always assigned
    /// from input position.
    #[serde(default)]
    pub index: Option<i32>,
    pub product_variant: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub shop: Uuid,
    pub note: Option<String>,
    pub order_lines: Vec<CreateOrderLineSpec>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PlaceOrderRequest {
    pub note: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderLineResponse {
    pub id: Uuid,
    pub order: Uuid,
    pub index: i32,
    pub product_variant: Uuid,
    pub quantity: i32,
    pub product_title: String,
    pub product_variant_title: String,
    #[schema(value_type = Object)]
    pub product_variant_attributes: serde_json::Value,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub unit_price: String,
    pub product_price: String,
    #[schema(value_type = Object)]
    pub applied_price_rules: serde_json::Value,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: Uuid,
    pub number: Option<String>,
    pub note: Option<String>,
    pub current_status: String,
    pub payment_status: String,
    pub shop: Uuid,
    pub created_at: String,
    pub order_lines: Vec<OrderLineResponse>,
}

impl From<OrderLineView> for OrderLineResponse {
    fn from(line: OrderLineView) -> Self {
        OrderLineResponse {
            id: line.id,
            order: line.order_id,
            index: line.index,
            product_variant: line.product_variant_id,
            quantity: line.quantity,
            product_title: line.product_title,
            product_variant_title: line.product_variant_title,
            product_variant_attributes: line.product_variant_attributes,
            unit_price: line.unit_price.to_string(),
            product_price: line.product_price.to_string(),
            applied_price_rules: line.applied_price_rules,
        }
    }
}

impl From<OrderView> for OrderResponse {
    fn from(order: OrderView) -> Self {
        OrderResponse {
            id: order.id,
            number: order.number,
            note: order.note,
            current_status: order.current_status.as_str().to_string(),
            payment_status: order.payment_status.as_str().to_string(),
            shop: order.shop_id,
            created_at: order.created_at.to_rfc3339(),
            order_lines: order.lines.into_iter().map(Into::into).collect(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Creates an order directly as PLACED. Every line is resolved against the
/// catalog, quantity-validated and price-snapshotted; the first failing line
/// aborts the whole request and nothing is persisted.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = OrderResponse),
        (status = 400, description = "Quantity outside the variant's selling constraints"),
        (status = 404, description = "Shop, variant or product not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<AppService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let order = web::block(move || {
        let input = CreateOrder {
            shop_id: body.shop,
            note: body.note,
            lines: body
                .order_lines
                .into_iter()
                .map(|l| LineSpec {
                    product_variant_id: l.product_variant,
                    quantity: l.quantity,
                })
                .collect(),
        };
        service
            .create_order(input)
            .map_err(|e| AppError::scoped("order.create", e))
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

/// GET /orders/{id}
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<AppService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let result = web::block(move || {
        service
            .get_order(order_id)
            .map_err(|e| AppError::scoped("order.find", e))
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    match result {
        Some(order) => Ok(HttpResponse::Ok().json(OrderResponse::from(order))),
        None => Err(AppError::scoped(
            "order.find",
            crate::domain::errors::DomainError::OrderNotFound(order_id),
        )),
    }
}

/// POST /orders/{id}/place
///
/// Places a cart order: the shop gets a fresh empty cart and this order
/// transitions to PLACED with a generated number.
#[utoipa::path(
    post,
    path = "/orders/{id}/place",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    request_body = PlaceOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = OrderResponse),
        (status = 400, description = "Order already placed"),
        (status = 404, description = "Order or shop not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn place_order(
    service: web::Data<AppService>,
    path: web::Path<Uuid>,
    body: web::Json<PlaceOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let note = body.into_inner().note;

    let order = web::block(move || {
        service
            .place_order(order_id, note)
            .map_err(|e| AppError::scoped("order.place", e))
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}
