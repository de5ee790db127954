use crate::model::{Order, OrderPayload, OrderResponse, format_price};
use async_trait::async_trait;
use std::{error::Error, sync::Arc};

/// Transport seam for the order endpoint, mockable in tests.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn post_order(
        &self,
        payload: &OrderPayload,
    ) -> Result<OrderResponse, Box<dyn Error + Send + Sync>>;
}

/// Production gateway: POSTs the order payload as JSON to the configured
/// endpoint.
pub struct HttpOrderGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpOrderGateway {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn post_order(
        &self,
        payload: &OrderPayload,
    ) -> Result<OrderResponse, Box<dyn Error + Send + Sync>> {
        let response = self.client.post(&self.endpoint).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(format!("order endpoint returned {}", response.status()).into());
        }
        let body = response.json::<OrderResponse>().await?;
        Ok(body)
    }
}

/// A pre-addressed, pre-subjected, pre-bodied email the shopper can send
/// manually when the order endpoint is unreachable.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    pub fn for_order(owner_email: &str, order: &Order) -> Self {
        let mut body = format!("Order ID: {}\r\n\r\n", order.order_id);
        for item in &order.items {
            body.push_str(&format!("{} - {}\r\n", item.name, format_price(item.price)));
        }
        body.push_str(&format!("\r\nSubtotal: {}\r\n", format_price(order.subtotal)));
        body.push_str("\r\n(Your contact info here)\r\n");

        Self {
            to: owner_email.to_string(),
            subject: format!("Order {}", order.order_id),
            body,
        }
    }

    /// Render as a mailto link the UI can open in the shopper's mail client.
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}

// Mail clients want %20 rather than '+' for spaces in mailto queries.
fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Outcome of a submission attempt. `Fallback` is a valid customer-facing
/// path, not an error state: the order reaches the owner either way.
#[derive(Debug, Clone)]
pub enum SubmissionResult {
    Saved { order_id: String },
    Fallback { draft: EmailDraft },
}

/// Sends a built order to the order endpoint, degrading to an email draft on
/// any failure. A single attempt is made; there is no retry loop.
pub struct SubmissionClient {
    gateway: Arc<dyn OrderGateway>,
    owner_email: String,
}

impl SubmissionClient {
    pub fn new(gateway: Arc<dyn OrderGateway>, owner_email: &str) -> Self {
        Self {
            gateway,
            owner_email: owner_email.to_string(),
        }
    }

    pub async fn submit(&self, order: &Order) -> SubmissionResult {
        match self.gateway.post_order(&order.payload()).await {
            Ok(response) if response.success => {
                tracing::info!(order_id = %order.order_id, "Order saved by endpoint");
                SubmissionResult::Saved {
                    order_id: order.order_id.clone(),
                }
            }
            Ok(response) => {
                tracing::warn!(
                    order_id = %order.order_id,
                    message = %response.message,
                    "Order endpoint rejected order, falling back to email draft"
                );
                self.fallback(order)
            }
            Err(e) => {
                tracing::warn!(
                    order_id = %order.order_id,
                    error = %e,
                    "Order submission failed, falling back to email draft"
                );
                self.fallback(order)
            }
        }
    }

    fn fallback(&self, order: &Order) -> SubmissionResult {
        SubmissionResult::Fallback {
            draft: EmailDraft::for_order(&self.owner_email, order),
        }
    }
}
