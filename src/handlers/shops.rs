use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::errors::AppError;
use crate::AppService;

use super::orders::OrderResponse;

/// GET /shops/{id}/cart
///
/// Returns the shop's current IN_CART order, creating an empty one on
/// demand. Each shop has exactly one open cart at a time.
#[utoipa::path(
    get,
    path = "/shops/{id}/cart",
    params(
        ("id" = Uuid, Path, description = "Shop UUID"),
    ),
    responses(
        (status = 200, description = "The shop's current cart order", body = OrderResponse),
        (status = 404, description = "Shop not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "shops"
)]
pub async fn get_shopping_cart(
    service: web::Data<AppService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let shop_id = path.into_inner();

    let cart = web::block(move || {
        service
            .shopping_cart(shop_id)
            .map_err(|e| AppError::scoped("shop.cart", e))
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(cart)))
}
