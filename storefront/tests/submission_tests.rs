use std::{
    error::Error,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use chrono::Utc;
use storefront::model::{Order, OrderItem, OrderPayload, OrderResponse};
use storefront::submit::{OrderGateway, SubmissionClient, SubmissionResult};

const OWNER_EMAIL: &str = "orders@example.com";

fn test_order() -> Order {
    Order {
        order_id: "ORDER-20250101-1234".to_string(),
        items: vec![
            OrderItem {
                id: "a".to_string(),
                name: "Quilt A".to_string(),
                price: 10.0,
            },
            OrderItem {
                id: "b".to_string(),
                name: "Quilt B".to_string(),
                price: 5.5,
            },
        ],
        subtotal: 15.5,
        created_at: Utc::now(),
    }
}

struct SavingGateway;

#[async_trait]
impl OrderGateway for SavingGateway {
    async fn post_order(
        &self,
        _payload: &OrderPayload,
    ) -> Result<OrderResponse, Box<dyn Error + Send + Sync>> {
        Ok(OrderResponse {
            success: true,
            message: "Order saved".to_string(),
        })
    }
}

struct RejectingGateway;

#[async_trait]
impl OrderGateway for RejectingGateway {
    async fn post_order(
        &self,
        _payload: &OrderPayload,
    ) -> Result<OrderResponse, Box<dyn Error + Send + Sync>> {
        Ok(OrderResponse {
            success: false,
            message: "Server error".to_string(),
        })
    }
}

#[derive(Default)]
struct FailingGateway {
    calls: AtomicUsize,
}

#[async_trait]
impl OrderGateway for FailingGateway {
    async fn post_order(
        &self,
        _payload: &OrderPayload,
    ) -> Result<OrderResponse, Box<dyn Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err("connection refused".into())
    }
}

#[tokio::test]
async fn successful_submission_returns_saved() {
    let client = SubmissionClient::new(Arc::new(SavingGateway), OWNER_EMAIL);
    let order = test_order();

    match client.submit(&order).await {
        SubmissionResult::Saved { order_id } => assert_eq!(order_id, order.order_id),
        other => panic!("expected Saved, got {:?}", other),
    }
}

#[tokio::test]
async fn rejected_response_falls_back_to_email_draft() {
    let client = SubmissionClient::new(Arc::new(RejectingGateway), OWNER_EMAIL);

    match client.submit(&test_order()).await {
        SubmissionResult::Fallback { draft } => assert_eq!(draft.to, OWNER_EMAIL),
        other => panic!("expected Fallback, got {:?}", other),
    }
}

#[tokio::test]
async fn transport_error_falls_back_with_full_draft() {
    let gateway = Arc::new(FailingGateway::default());
    let client = SubmissionClient::new(gateway.clone(), OWNER_EMAIL);
    let order = test_order();

    let SubmissionResult::Fallback { draft } = client.submit(&order).await else {
        panic!("expected Fallback");
    };

    assert_eq!(draft.to, OWNER_EMAIL);
    assert!(draft.subject.contains(&order.order_id));
    assert!(draft.body.contains("Quilt A - $10.00"));
    assert!(draft.body.contains("Quilt B - $5.50"));
    assert!(draft.body.contains("Subtotal: $15.50"));
    // Single attempt, no retry loop
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn mailto_url_is_percent_encoded() {
    let client = SubmissionClient::new(Arc::new(FailingGateway::default()), OWNER_EMAIL);

    let SubmissionResult::Fallback { draft } = client.submit(&test_order()).await else {
        panic!("expected Fallback");
    };
    let url = draft.mailto_url();

    assert!(url.starts_with("mailto:orders@example.com?subject="));
    assert!(url.contains("Order%20ORDER-20250101-1234"));
    assert!(!url.contains(' '));
    assert!(!url.contains('+'));
}
