use crate::config::InventoryConfig;
use crate::core::{InventoryService, Product, ProductId, StockRecord};
use crate::utils::error::{CartError, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Inventory service reached over HTTP (`/products/{id}` and `/stock/{id}`).
#[derive(Debug, Clone)]
pub struct HttpInventory {
    client: Client,
    endpoint: String,
}

impl HttpInventory {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &InventoryConfig) -> Result<Self> {
        match config.timeout_seconds {
            Some(seconds) => Self::with_timeout(&config.endpoint, Duration::from_secs(seconds)),
            None => Ok(Self::new(&config.endpoint)),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, resource: &str, id: ProductId) -> String {
        format!("{}/{}/{}", self.endpoint.trim_end_matches('/'), resource, id)
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: &str, id: ProductId) -> Result<T> {
        let url = self.url(resource, id);
        tracing::debug!("Making inventory request to: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Inventory response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(CartError::UnknownProduct { product_id: id });
        }
        if !status.is_success() {
            return Err(CartError::InventoryStatus {
                url,
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl InventoryService for HttpInventory {
    async fn get_product(&self, id: ProductId) -> Result<Product> {
        self.fetch("products", id).await
    }

    async fn get_stock(&self, id: ProductId) -> Result<StockRecord> {
        self.fetch("stock", id).await
    }
}
