use crate::model::{OrderPayload, OrderRecord};
use crate::store::OrderStore;
use async_trait::async_trait;
use chrono::Utc;
use std::{
    error::Error,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Flat-file order store: a JSON array on disk, rewritten whole on every
/// append.
///
/// The read-modify-write is not locked across requests; concurrent writers
/// can race. Acceptable for the low-traffic single-process deployments this
/// fallback exists for.
pub struct JsonFileOrderStore {
    path: PathBuf,
}

impl JsonFileOrderStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<OrderRecord>, Box<dyn Error + Send + Sync>> {
        let raw = fs::read_to_string(&self.path).await?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let orders = serde_json::from_str(&raw)?;
        Ok(orders)
    }
}

#[async_trait]
impl OrderStore for JsonFileOrderStore {
    async fn initialize(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        if !fs::try_exists(&self.path).await? {
            fs::write(&self.path, "[]").await?;
        }
        Ok(())
    }

    async fn append(&self, order: &OrderPayload) -> Result<i64, Box<dyn Error + Send + Sync>> {
        let mut orders = self.read_all().await?;
        let id = orders.iter().map(|record| record.id).max().unwrap_or(0) + 1;
        orders.push(OrderRecord {
            id,
            order_id: order.order_id.clone(),
            items: order.items.clone(),
            subtotal: order.subtotal,
            created_at: Utc::now(),
        });
        fs::write(&self.path, serde_json::to_string_pretty(&orders)?).await?;

        tracing::info!(order_id = %order.order_id, record_id = id, "Saved order to JSON file store");
        Ok(id)
    }
}
