use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A purchasable item as listed in the catalog file. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    #[serde(default)]
    pub sold: bool,
}

/// Price snapshot of an item taken when the slip is built. Later catalog
/// changes never affect an already-built order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// A built order slip: selected item snapshots, their subtotal, and a
/// freshly minted reference id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn payload(&self) -> OrderPayload {
        OrderPayload {
            order_id: self.order_id.clone(),
            items: self.items.clone(),
            subtotal: self.subtotal,
        }
    }
}

/// Wire form of an order as POSTed to the order endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub order_id: String,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
}

/// Response shape of the order endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub success: bool,
    pub message: String,
}

/// Persisted form of an order, with the store-assigned monotonic id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: i64,
    pub order_id: String,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub created_at: DateTime<Utc>,
}

/// Mint a display/reference order id: `ORDER-YYYYMMDD-RRRR`.
///
/// The 4-digit suffix is random in [1000, 9999); collisions are possible and
/// acceptable. The store-assigned record id is the unique key, not this.
pub fn generate_order_id() -> String {
    let date = Utc::now().format("%Y%m%d");
    let suffix: u32 = rand::rng().random_range(1000..9999);
    format!("ORDER-{}-{}", date, suffix)
}

/// Format a price as USD for display. Rounding to 2 decimal places happens
/// here only; internal subtotals keep full precision.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
