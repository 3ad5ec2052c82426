use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

pub const MSG_SUCCESS: &str = "Success";
pub const MSG_ORDER_CREATED: &str = "Order created.";
pub const MSG_INSUFFICIENT_STOCK: &str =
    "Order cannot be created. Quantity is less than available stock.";
pub const MSG_PRODUCT_NOT_FOUND: &str = "Order cannot be created. Product not found.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub stock: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    /// Snapshot of the matched product, taken before its stock was decremented.
    pub products: Vec<Product>,
    pub sku: String,
    pub qty: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateOrderRequest {
    pub sku: String,
    pub qty: i64,
}

/// Envelope shared by every endpoint. Empty collections and a missing
/// product are left out of the encoded body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub orders: Vec<Order>,
}

impl Order {
    pub fn new(product: Product, sku: String, qty: i64) -> Self {
        Self {
            products: vec![product],
            sku,
            qty,
            created_at: Utc::now(),
        }
    }
}

impl ApiResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            products: Vec::new(),
            product: None,
            orders: Vec::new(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(200, message)
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.product = Some(product);
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }
}
