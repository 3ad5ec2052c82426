use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::de::DeserializeOwned;
use shared::*;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};
use tracing::{error, warn};
use crate::inventory::{Inventory, OrderOutcome};

#[derive(Clone)]
pub struct AppState {
    pub inventory: Arc<Inventory>,
    /// Answer 404 for an unknown SKU instead of a bare "Success".
    pub report_missing_sku: bool,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => json_response(ApiResponse::new(400, message)),
            ApiError::NotFound(message) => json_response(ApiResponse::new(404, message)),
            ApiError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/create_product", post(create_product))
        .route("/get_product_list", get(get_product_list))
        .route("/create_order", post(create_order))
        .route("/get_order_list", get(get_order_list))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
}

/// Encodes the envelope with its own `status` on the status line.
fn json_response(response: ApiResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match serde_json::to_vec(&response) {
        Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            error!("Error when writing response: {}", e);
            ApiError::Internal.into_response()
        }
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!("Got error when decoding: {}", e);
        ApiError::BadRequest(format!("Invalid request body: {}", e))
    })
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let product: Product = decode(&body)?;
    let product = state.inventory.create_product(product).await;

    Ok(json_response(ApiResponse::ok(MSG_SUCCESS).with_product(product)))
}

pub async fn get_product_list(State(state): State<AppState>) -> Response {
    let products = state.inventory.list_products().await;
    json_response(ApiResponse::ok(MSG_SUCCESS).with_products(products))
}

pub async fn create_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: CreateOrderRequest = decode(&body)?;
    if request.qty <= 0 {
        warn!("Rejected order for sku {} with qty {}", request.sku, request.qty);
        return Err(ApiError::BadRequest(format!(
            "Invalid quantity {}: must be greater than zero",
            request.qty
        )));
    }

    let response = match state.inventory.create_order(request).await {
        OrderOutcome::Created(order) => ApiResponse::ok(MSG_ORDER_CREATED).with_orders(vec![order]),
        OrderOutcome::InsufficientStock { requested, available } => {
            warn!("Insufficient stock: requested {}, available {}", requested, available);
            ApiResponse::ok(MSG_INSUFFICIENT_STOCK)
        }
        OrderOutcome::SkuNotFound if state.report_missing_sku => {
            return Err(ApiError::NotFound(MSG_PRODUCT_NOT_FOUND.to_string()));
        }
        OrderOutcome::SkuNotFound => ApiResponse::ok(MSG_SUCCESS),
    };

    Ok(json_response(response))
}

pub async fn get_order_list(State(state): State<AppState>) -> Response {
    let orders = state.inventory.list_orders().await;
    json_response(ApiResponse::ok(MSG_SUCCESS).with_orders(orders))
}
