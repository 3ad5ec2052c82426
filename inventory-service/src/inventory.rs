use shared::*;
use tokio::sync::RwLock;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    Created(Order),
    InsufficientStock { requested: i64, available: i64 },
    SkuNotFound,
}

/// Products and orders held in memory for the lifetime of the process.
///
/// Both sequences live behind one lock so that placing an order (lookup,
/// stock check, decrement, append) is a single critical section.
#[derive(Debug, Default)]
pub struct Inventory {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    products: Vec<Product>,
    orders: Vec<Order>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create_product(&self, product: Product) -> Product {
        let mut state = self.state.write().await;
        state.products.push(product.clone());
        info!("Created product {} (sku {})", product.name, product.sku);
        product
    }

    pub async fn list_products(&self) -> Vec<Product> {
        self.state.read().await.products.clone()
    }

    /// Places an order against the first product whose SKU matches.
    /// Products sharing that SKU further down the list are never consulted.
    pub async fn create_order(&self, request: CreateOrderRequest) -> OrderOutcome {
        let mut state = self.state.write().await;
        let State { products, orders } = &mut *state;

        let Some(product) = products.iter_mut().find(|p| p.sku == request.sku) else {
            warn!("No product with sku {}", request.sku);
            return OrderOutcome::SkuNotFound;
        };

        if product.stock < request.qty {
            return OrderOutcome::InsufficientStock {
                requested: request.qty,
                available: product.stock,
            };
        }

        let order = Order::new(product.clone(), request.sku, request.qty);
        product.stock -= request.qty;
        orders.push(order.clone());

        info!("Order created for sku {} (qty {}), {} left", order.sku, order.qty, product.stock);
        OrderOutcome::Created(order)
    }

    pub async fn list_orders(&self) -> Vec<Order> {
        self.state.read().await.orders.clone()
    }
}
