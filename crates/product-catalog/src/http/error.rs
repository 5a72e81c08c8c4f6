//! HTTP error mapping.
//!
//! Every failure leaves the service as a JSON `{message}` body.

use super::dto::MessageResponse;
use crate::product_actor::ProductError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Product not found")]
    NotFound,

    /// The request was rejected before reaching the store.
    #[error("{message}")]
    BadRequest { status: StatusCode, message: String },

    #[error("Product store unavailable: {0}")]
    Unavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest { status, .. } => *status,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => ApiError::NotFound,
            ProductError::ActorCommunicationError(msg) => ApiError::Unavailable(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Unavailable(reason) = &self {
            warn!(%reason, "Product store unavailable");
        }
        (self.status(), Json(MessageResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_errors_map_to_statuses() {
        let not_found = ApiError::from(ProductError::NotFound("1".into()));
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_string(), "Product not found");

        let gone = ApiError::from(ProductError::ActorCommunicationError("Actor closed".into()));
        assert_eq!(gone.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_bad_request_keeps_status() {
        let e = ApiError::BadRequest {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "missing field `preco`".into(),
        };
        let response = e.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
