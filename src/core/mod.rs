pub mod cart;
pub mod session;

pub use crate::domain::model::{Cart, Product, ProductId, StockRecord, UpdateProductAmount};
pub use crate::domain::ports::{InventoryService, KeyValueStore, Notifier};
pub use crate::utils::error::Result;
