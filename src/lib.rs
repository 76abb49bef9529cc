pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CartCommand, CliArgs};

pub use adapters::{ConsoleNotifier, FileStore, HttpInventory, MemoryStore};
pub use config::CartConfig;
pub use crate::core::{
    cart::{CartManager, DEFAULT_CART_KEY},
    session::CartSession,
};
pub use domain::model::{Cart, Product, ProductId, StockRecord, UpdateProductAmount};
pub use utils::error::{CartError, Result};
