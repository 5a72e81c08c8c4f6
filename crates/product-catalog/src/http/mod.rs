//! # HTTP Surface
//!
//! An axum [`Router`] over the product store. Handlers hold a [`ProductClient`] in their state
//! and never see the store itself.
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | `GET` | `/health` | liveness |
//! | `POST` | `/products` | insert |
//! | `GET` | `/products` | list with `nome`, `precoMax`, `mediaAvaliacao` filters |
//! | `GET` | `/products/{id}` | get |
//! | `PUT` | `/products/{id}` | replace |
//! | `DELETE` | `/products/{id}` | delete |
//! | `PATCH` | `/products/{id}/preco` | set price |
//! | `PATCH` | `/products/{id}/estoque` | adjust stock by a delta |

pub mod dto;
pub mod error;
pub mod handlers;

pub use error::ApiError;

use crate::clients::ProductClient;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, patch, post};
use axum::Router;
use std::time::Instant;
use tracing::info;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
}

/// Builds the service router.
pub fn router(products: ProductClient) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/products",
            post(handlers::create_product).get(handlers::list_products),
        )
        .route(
            "/products/{id}",
            get(handlers::get_product)
                .put(handlers::replace_product)
                .delete(handlers::delete_product),
        )
        .route("/products/{id}/preco", patch(handlers::set_price))
        .route("/products/{id}/estoque", patch(handlers::adjust_stock))
        .layer(middleware::from_fn(log_request))
        .with_state(AppState { products })
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        %method,
        %uri,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Request handled"
    );
    response
}
