use crate::domain::model::{Product, ProductId, StockRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote catalogue and stock lookups.
#[async_trait]
pub trait InventoryService: Send + Sync {
    async fn get_product(&self, id: ProductId) -> Result<Product>;
    async fn get_stock(&self, id: ProductId) -> Result<StockRecord>;
}

/// Durable string store scoped by key, in the spirit of browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Fire-and-forget sink for user-facing messages.
pub trait Notifier: Send + Sync {
    fn report_error(&self, message: &str);
}
