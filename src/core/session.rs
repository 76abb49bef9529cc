use crate::core::cart::CartManager;
use crate::core::{Cart, InventoryService, KeyValueStore, Notifier, ProductId, UpdateProductAmount};
use crate::utils::error::{CartError, ErrorCategory, Result};
use std::sync::Arc;

pub const OUT_OF_STOCK_MESSAGE: &str = "Quantidade solicitada fora de estoque";
pub const ADD_FAILED_MESSAGE: &str = "Erro na adição do produto";
pub const REMOVE_FAILED_MESSAGE: &str = "Erro na remoção do produto";
pub const UPDATE_FAILED_MESSAGE: &str = "Erro na alteração de quantidade do produto";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Remove,
    UpdateAmount,
}

impl Operation {
    /// The message shown to the user when this operation fails with `error`.
    pub fn failure_message(&self, error: &CartError) -> &'static str {
        match (self, error.category()) {
            (Operation::Add | Operation::UpdateAmount, ErrorCategory::OutOfStock) => {
                OUT_OF_STOCK_MESSAGE
            }
            (Operation::Add, _) => ADD_FAILED_MESSAGE,
            (Operation::Remove, _) => REMOVE_FAILED_MESSAGE,
            (Operation::UpdateAmount, _) => UPDATE_FAILED_MESSAGE,
        }
    }
}

/// Front end for one user's interaction stream: runs cart operations and
/// reports each failure to the notifier exactly once.
pub struct CartSession<I: InventoryService, S: KeyValueStore, N: Notifier> {
    manager: Arc<CartManager<I, S>>,
    notifier: N,
}

impl<I: InventoryService, S: KeyValueStore, N: Notifier> CartSession<I, S, N> {
    pub fn new(manager: Arc<CartManager<I, S>>, notifier: N) -> Self {
        Self { manager, notifier }
    }

    pub fn cart(&self) -> Cart {
        self.manager.cart()
    }

    pub async fn add_product(&self, product_id: ProductId) -> bool {
        let result = self.manager.add_product(product_id).await;
        self.settle(Operation::Add, result)
    }

    pub async fn remove_product(&self, product_id: ProductId) -> bool {
        let result = self.manager.remove_product(product_id).await;
        self.settle(Operation::Remove, result)
    }

    pub async fn update_product_amount(&self, request: UpdateProductAmount) -> bool {
        let result = self.manager.update_product_amount(request).await;
        self.settle(Operation::UpdateAmount, result)
    }

    fn settle(&self, operation: Operation, result: Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("{:?} failed: {}", operation, e);
                self.notifier.report_error(operation.failure_message(&e));
                false
            }
        }
    }
}
