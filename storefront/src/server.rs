use std::{error::Error, path::PathBuf, sync::Arc};

use axum::{
    Router,
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use clap::Parser;
use common::config::Config;
use http::Method;
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    catalog,
    model::{OrderPayload, OrderResponse},
    store::OrderStore,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "config/storefront.yaml")]
    pub config: String,
}

pub fn initialize_executable() -> Result<Config, Box<dyn Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    println!("Loading config from: {}", args.config);
    let mut config = Config::load(&args.config)?;

    // PORT from the environment wins over the configured listen address.
    if let Ok(port) = std::env::var("PORT") {
        let host = config
            .server
            .server_address
            .rsplit_once(':')
            .map(|(host, _)| host.to_string())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        config.server.server_address = format!("{host}:{port}");
    }
    println!("Loaded config: {:#?}", config);

    Ok(config)
}

pub fn initialize_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn OrderStore>,
    pub catalog_path: PathBuf,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/catalog", get(get_catalog))
        .route("/order", post(save_order))
        .route("/order-confirmation", get(order_confirmation_empty))
        .route("/order-confirmation/{order_id}", get(order_confirmation))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn run_server(
    config: &Config,
    store: Arc<dyn OrderStore>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let state = AppState {
        store,
        catalog_path: PathBuf::from(&config.shop.catalog_path),
    };
    let app = app(state);

    tracing::info!("Starting storefront service at {}", config.server.server_address);
    let listener = tokio::net::TcpListener::bind(&config.server.server_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn get_catalog(State(state): State<AppState>) -> impl IntoResponse {
    Json(catalog::load_items_or_empty(&state.catalog_path))
}

async fn save_order(
    State(state): State<AppState>,
    Json(order): Json<OrderPayload>,
) -> impl IntoResponse {
    match state.store.append(&order).await {
        Ok(id) => {
            tracing::info!(order_id = %order.order_id, record_id = id, "Order saved");
            (
                StatusCode::OK,
                Json(OrderResponse {
                    success: true,
                    message: "Order saved".to_string(),
                }),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, order_id = %order.order_id, "Error saving order");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(OrderResponse {
                    success: false,
                    message: "Server error".to_string(),
                }),
            )
        }
    }
}

#[derive(Serialize)]
struct ConfirmationView {
    #[serde(rename = "orderId")]
    order_id: String,
}

// The id is echoed back for display, not re-validated against the store.
async fn order_confirmation(Path(order_id): Path<String>) -> impl IntoResponse {
    Json(ConfirmationView { order_id })
}

async fn order_confirmation_empty() -> impl IntoResponse {
    Json(ConfirmationView {
        order_id: String::new(),
    })
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK").into_response()
}
