use serde::Deserialize;
use std::{error::Error, fs};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CommonConfig {
    pub project_name: String,
    pub data_dir: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServerConfig {
    pub server_address: String,
    pub log_level: String,
}

/// Which order store the server process runs with. Picked once at startup
/// and fixed for the process lifetime.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    #[default]
    Sqlite,
    JsonFile,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    pub sqlite_url: String,
    pub json_path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ShopConfig {
    pub catalog_path: String,
    pub owner_email: String,
    pub order_endpoint: String,
    pub payment_link: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub common: CommonConfig,
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub shop: ShopConfig,
}

impl Config {
    pub fn load(config_path: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let contents = fs::read_to_string(config_path)?;
        let config = serde_yml::from_str(&contents)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
common:
  project_name: storefront
  data_dir: data
server:
  server_address: 0.0.0.0:8000
  log_level: info
store:
  backend: json_file
  sqlite_url: sqlite://data/orders.db
  json_path: data/orders.json
shop:
  catalog_path: data/items.json
  owner_email: orders@example.com
  order_endpoint: http://localhost:8000/order
  payment_link: https://venmo.com/
"#;

    #[test]
    fn parses_full_config() {
        let config: Config = serde_yml::from_str(SAMPLE).unwrap();
        assert_eq!(config.common.project_name, "storefront");
        assert_eq!(config.server.server_address, "0.0.0.0:8000");
        assert_eq!(config.store.backend, StoreBackend::JsonFile);
        assert_eq!(config.shop.owner_email, "orders@example.com");
    }

    #[test]
    fn backend_defaults_to_sqlite() {
        let store: StoreConfig = serde_yml::from_str(
            "sqlite_url: sqlite://orders.db\njson_path: orders.json\n",
        )
        .unwrap();
        assert_eq!(store.backend, StoreBackend::Sqlite);
    }
}
