use crate::model::OrderPayload;
use crate::store::OrderStore;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::{error::Error, str::FromStr};
use tracing::debug;

const INIT_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    order_id TEXT,
    items TEXT,
    subtotal REAL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Relational order store backed by a sqlite file in WAL mode. Writes are
/// serialized by sqlite itself.
pub struct SqliteOrderStore {
    pool: SqlitePool,
}

impl SqliteOrderStore {
    pub async fn new(database_url: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl OrderStore for SqliteOrderStore {
    async fn initialize(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        sqlx::query(INIT_SQL).execute(&self.pool).await?;
        Ok(())
    }

    async fn append(&self, order: &OrderPayload) -> Result<i64, Box<dyn Error + Send + Sync>> {
        debug!(order_id = %order.order_id, "Inserting order record");
        let items = serde_json::to_string(&order.items)?;
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (order_id, items, subtotal)
            VALUES (?1, ?2, ?3)
            RETURNING id
            "#,
        )
        .bind(&order.order_id)
        .bind(items)
        .bind(order.subtotal)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(order_id = %order.order_id, record_id = id, "Saved order to sqlite store");
        Ok(id)
    }
}
