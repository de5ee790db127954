use std::error::Error;

use storefront::server::{initialize_executable, initialize_tracing, run_server};
use storefront::store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    println!("Starting storefront server...");
    let config = initialize_executable()?;
    initialize_tracing(&config.server.log_level);
    let store = store::create_store(&config.store).await?;
    run_server(&config, store).await
}
