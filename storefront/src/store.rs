use crate::json_store::JsonFileOrderStore;
use crate::model::OrderPayload;
use crate::sqlite_store::SqliteOrderStore;
use async_trait::async_trait;
use common::config::{StoreBackend, StoreConfig};
use std::{error::Error, sync::Arc};

/// Persistence seam for submitted orders. Both backends are append-only;
/// no update or delete operations exist.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Prepare the backing storage (create the table or seed the file).
    async fn initialize(&self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Append one order, returning the store-assigned record id.
    async fn append(&self, order: &OrderPayload) -> Result<i64, Box<dyn Error + Send + Sync>>;
}

async fn try_sqlite(url: &str) -> Result<SqliteOrderStore, Box<dyn Error + Send + Sync>> {
    let store = SqliteOrderStore::new(url).await?;
    store.initialize().await?;
    Ok(store)
}

/// Config-driven store factory, invoked once at process start. The choice is
/// fixed for the process lifetime and never re-evaluated per request.
///
/// When the configured sqlite backend cannot be brought up, the factory logs
/// a warning and falls back to the flat-file store instead of failing the
/// process.
pub async fn create_store(
    config: &StoreConfig,
) -> Result<Arc<dyn OrderStore>, Box<dyn Error + Send + Sync>> {
    match config.backend {
        StoreBackend::Sqlite => match try_sqlite(&config.sqlite_url).await {
            Ok(store) => {
                tracing::info!(url = %config.sqlite_url, "Using sqlite order store");
                Ok(Arc::new(store))
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Sqlite order store unavailable, falling back to JSON file store"
                );
                let store = JsonFileOrderStore::new(&config.json_path);
                store.initialize().await?;
                Ok(Arc::new(store))
            }
        },
        StoreBackend::JsonFile => {
            let store = JsonFileOrderStore::new(&config.json_path);
            store.initialize().await?;
            tracing::info!(path = %config.json_path, "Using JSON file order store");
            Ok(Arc::new(store))
        }
    }
}
