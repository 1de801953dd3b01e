use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// Transport-level error: a domain rejection tagged with the operation it
/// occurred in, or an unexpected internal failure.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{source}")]
    Rejection {
        scope: &'static str,
        source: DomainError,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Attach the operation scope under which a domain error surfaced, e.g.
    /// `order-line.create`. Unexpected persistence failures stay internal.
    pub fn scoped(scope: &'static str, source: DomainError) -> Self {
        match source {
            DomainError::Internal(msg) => AppError::Internal(msg),
            source => AppError::Rejection { scope, source },
        }
    }

    /// Full stable error id, e.g.
    /// `order-line.create.error.quantity-less-than-min-selling-quantity`.
    pub fn error_id(&self) -> Option<String> {
        match self {
            AppError::Rejection { scope, source } => {
                Some(format!("{}.error.{}", scope, source.slug()))
            }
            AppError::Internal(_) => None,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Rejection { source, .. } => match source {
                DomainError::OrderNotFound(_)
                | DomainError::OrderLineNotFound(_)
                | DomainError::VariantNotFound(_)
                | DomainError::ShopNotFound(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_REQUEST,
            },
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Rejection { source, .. } => {
                let id = self.error_id().unwrap_or_default();
                let mut message = json!({
                    "id": id,
                    "message": source.to_string(),
                });
                if let Some(field) = source.field() {
                    message["field"] = json!(field);
                }
                HttpResponse::build(self.status_code())
                    .json(json!([{ "messages": [message] }]))
            }
            AppError::Internal(_) => HttpResponse::InternalServerError().json(json!({
                "error": "Internal server error"
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use uuid::Uuid;

    use super::*;
    use crate::domain::validation::QuantityError;

    #[test]
    fn not_found_kinds_return_404() {
        let err = AppError::scoped("order-line.create", DomainError::OrderNotFound(Uuid::new_v4()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn quantity_rejections_return_400() {
        let err = AppError::scoped(
            "order-line.create",
            DomainError::Quantity(QuantityError::BelowMinimum { min: 2 }),
        );
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn domain_internal_stays_internal_when_scoped() {
        let err = AppError::scoped("order.create", DomainError::Internal("oops".to_string()));
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(err.error_id(), None);
    }

    #[test]
    fn error_id_composes_scope_and_slug() {
        let err = AppError::scoped(
            "order-line.create",
            DomainError::Quantity(QuantityError::BelowMinimum { min: 2 }),
        );
        assert_eq!(
            err.error_id().as_deref(),
            Some("order-line.create.error.quantity-less-than-min-selling-quantity")
        );
    }

    #[test]
    fn quantity_errors_name_the_quantity_field() {
        let source = DomainError::Quantity(QuantityError::InsufficientStock { available: 5 });
        assert_eq!(source.field(), Some("quantity"));
    }

    #[test]
    fn rejection_message_carries_the_bound() {
        let err = AppError::scoped(
            "order-line.update",
            DomainError::Quantity(QuantityError::BelowMinimum { min: 2 }),
        );
        assert_eq!(err.to_string(), "This product quantity should be at least 2.");
    }
}
