use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;
use crate::AppService;

use super::orders::OrderLineResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderLineRequest {
    pub order: Uuid,
    pub product_variant: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderLineRequest {
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderLineEnvelope {
    #[serde(rename = "orderLine")]
    pub order_line: OrderLineResponse,
}

/// POST /order-lines
///
/// Appends a line to an existing order. The variant is resolved and the
/// quantity validated against its selling constraints; titles and prices
/// are snapshotted from the catalog as of this call.
#[utoipa::path(
    post,
    path = "/order-lines",
    request_body = CreateOrderLineRequest,
    responses(
        (status = 201, description = "Order line created", body = OrderLineEnvelope),
        (status = 400, description = "Quantity outside the variant's selling constraints"),
        (status = 404, description = "Order, variant or product not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "order-lines"
)]
pub async fn create_order_line(
    service: web::Data<AppService>,
    body: web::Json<CreateOrderLineRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let line = web::block(move || {
        service
            .append_line(body.order, body.product_variant, body.quantity)
            .map_err(|e| AppError::scoped("order-line.create", e))
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(OrderLineEnvelope {
        order_line: line.into(),
    }))
}

/// PUT /order-lines/{id}
///
/// Changes a line's quantity. The line's own order and variant are
/// re-resolved server-side and the quantity re-validated; snapshot fields
/// are refreshed only while the parent order is still in the cart.
#[utoipa::path(
    put,
    path = "/order-lines/{id}",
    params(
        ("id" = Uuid, Path, description = "Order line UUID"),
    ),
    request_body = UpdateOrderLineRequest,
    responses(
        (status = 200, description = "Order line updated", body = OrderLineEnvelope),
        (status = 400, description = "Quantity outside the variant's selling constraints"),
        (status = 404, description = "Order line not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "order-lines"
)]
pub async fn update_order_line(
    service: web::Data<AppService>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateOrderLineRequest>,
) -> Result<HttpResponse, AppError> {
    let line_id = path.into_inner();
    let quantity = body.into_inner().quantity;

    let line = web::block(move || {
        service
            .update_line(line_id, quantity)
            .map_err(|e| AppError::scoped("order-line.update", e))
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderLineEnvelope {
        order_line: line.into(),
    }))
}
