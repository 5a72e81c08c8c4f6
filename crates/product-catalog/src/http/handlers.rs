//! Route handlers. Each one translates a request into a single store operation.

use super::dto::{
    HealthResponse, ListQuery, MessageResponse, PriceBody, ProductResponse, StockBody,
};
use super::error::ApiError;
use super::AppState;
use crate::model::{Product, ProductFilter, ProductId, ProductReplace};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use resource_actor::ActorClient;
use tracing::debug;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
    })
}

/// `POST /products`: appends the body as posted, without validation.
pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<Product>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let Json(product) = body?;
    let product = state.products.create_product(product).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProductResponse::new("Product created successfully", product)),
    ))
}

/// `GET /products`: lists products passing the query filters, in insertion order.
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let Query(pairs) = query?;
    let filter: ProductFilter = ListQuery::from_pairs(&pairs).into();
    let products = state.products.list_products(filter).await?;
    debug!(count = products.len(), "Listed products");
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = ProductId::parse(&id);
    state
        .products
        .get(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `PUT /products/{id}`: replaces the record with exactly the recognized fields.
pub async fn replace_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ProductReplace>, JsonRejection>,
) -> Result<Json<ProductResponse>, ApiError> {
    let Json(params) = body?;
    let product = state
        .products
        .replace_product(ProductId::parse(&id), params)
        .await?;
    Ok(Json(ProductResponse::new(
        "Product updated successfully",
        product,
    )))
}

/// `DELETE /products/{id}`: succeeds whether or not anything was removed.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state.products.delete(ProductId::parse(&id)).await?;
    debug!(removed, "Deleted products");
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}

pub async fn set_price(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<PriceBody>, JsonRejection>,
) -> Result<Json<ProductResponse>, ApiError> {
    let Json(body) = body?;
    let product = state
        .products
        .set_price(ProductId::parse(&id), body.price)
        .await?;
    Ok(Json(ProductResponse::new(
        "Price updated successfully",
        product,
    )))
}

/// `PATCH /products/{id}/estoque`: the body quantity is added to the current stock.
pub async fn adjust_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<StockBody>, JsonRejection>,
) -> Result<Json<ProductResponse>, ApiError> {
    let Json(body) = body?;
    let product = state
        .products
        .adjust_stock(ProductId::parse(&id), body.quantity)
        .await?;
    Ok(Json(ProductResponse::new(
        "Stock updated successfully",
        product,
    )))
}
