use crate::core::{Cart, InventoryService, KeyValueStore, Product, ProductId, UpdateProductAmount};
use crate::utils::error::{CartError, Result};
use tokio::sync::{watch, Mutex};

/// Store key the cart lives under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "@RocketShoes:cart";

/// Owns a cart, validates mutations against the inventory and persists every
/// successful change as a full replace under a single store key.
///
/// Mutations hold `operation` for their whole duration, inventory calls
/// included, so concurrent callers on one manager are applied one after the
/// other instead of overwriting each other's result. The current cart sits in
/// a separate watch channel that is only touched for the final swap, so
/// snapshots never wait on an in-flight operation.
pub struct CartManager<I: InventoryService, S: KeyValueStore> {
    inventory: I,
    store: S,
    key: String,
    operation: Mutex<()>,
    state: watch::Sender<Cart>,
}

impl<I: InventoryService, S: KeyValueStore> CartManager<I, S> {
    /// Restores the cart stored under `key`, or starts empty when nothing is stored.
    ///
    /// A stored value that does not parse, or that breaks the cart invariants,
    /// fails with [`CartError::CorruptCart`]. So does a storage document the
    /// store itself cannot parse.
    pub async fn load(inventory: I, store: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();

        let stored = match store.get(&key).await {
            Ok(stored) => stored,
            Err(CartError::Serialization(e)) => {
                return Err(CartError::CorruptCart {
                    key,
                    reason: e.to_string(),
                })
            }
            Err(e) => return Err(e),
        };

        let cart = match stored {
            Some(raw) => {
                let cart: Cart =
                    serde_json::from_str(&raw).map_err(|e| CartError::CorruptCart {
                        key: key.clone(),
                        reason: e.to_string(),
                    })?;
                cart.check_invariants()
                    .map_err(|reason| CartError::CorruptCart {
                        key: key.clone(),
                        reason,
                    })?;
                tracing::debug!("Restored cart with {} products from '{}'", cart.len(), key);
                cart
            }
            None => {
                tracing::debug!("No stored cart under '{}', starting empty", key);
                Cart::new()
            }
        };

        Ok(Self {
            inventory,
            store,
            key,
            operation: Mutex::new(()),
            state: watch::Sender::new(cart),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Snapshot of the cart as of the last successful mutation.
    pub fn cart(&self) -> Cart {
        self.state.borrow().clone()
    }

    /// Adds one unit of `product_id`, fetching the product record on first add.
    pub async fn add_product(&self, product_id: ProductId) -> Result<()> {
        let _operation = self.operation.lock().await;
        let cart = self.cart();

        let current_amount = cart.amount_of(product_id);
        let stock = self.inventory.get_stock(product_id).await?;
        let desired = current_amount
            .checked_add(1)
            .filter(|desired| *desired <= stock.amount)
            .ok_or(CartError::OutOfStock {
                product_id,
                requested: i64::from(current_amount) + 1,
                available: stock.amount,
            })?;

        let updated = match cart.with_amount(product_id, desired) {
            Some(updated) => updated,
            None => {
                let product = self.inventory.get_product(product_id).await?;
                cart.with_product(Product {
                    id: product_id,
                    amount: 1,
                    ..product
                })
            }
        };

        self.commit(updated).await?;
        tracing::info!("Added product {} (amount {})", product_id, desired);
        Ok(())
    }

    /// Drops `product_id` from the cart entirely.
    pub async fn remove_product(&self, product_id: ProductId) -> Result<()> {
        let _operation = self.operation.lock().await;
        let cart = self.cart();

        if !cart.contains(product_id) {
            return Err(CartError::NotInCart { product_id });
        }

        self.commit(cart.without(product_id)).await?;
        tracing::info!("Removed product {}", product_id);
        Ok(())
    }

    /// Sets the amount of a product already in the cart.
    ///
    /// Requests for zero or fewer units are ignored; use
    /// [`remove_product`](Self::remove_product) to drop an entry.
    pub async fn update_product_amount(&self, request: UpdateProductAmount) -> Result<()> {
        let UpdateProductAmount { product_id, amount } = request;

        if amount <= 0 {
            tracing::debug!("Ignoring amount {} for product {}", amount, product_id);
            return Ok(());
        }

        let _operation = self.operation.lock().await;

        let stock = self.inventory.get_stock(product_id).await?;
        let amount_in_stock = u32::try_from(amount)
            .ok()
            .filter(|amount| *amount <= stock.amount)
            .ok_or(CartError::OutOfStock {
                product_id,
                requested: amount,
                available: stock.amount,
            })?;

        let updated = self
            .cart()
            .with_amount(product_id, amount_in_stock)
            .ok_or(CartError::NotInCart { product_id })?;

        self.commit(updated).await?;
        tracing::info!("Set product {} to amount {}", product_id, amount);
        Ok(())
    }

    /// Writes `updated` to the store, then publishes it. A failed write leaves the cart as it was.
    async fn commit(&self, updated: Cart) -> Result<()> {
        let serialized = serde_json::to_string(&updated)?;
        tracing::debug!("Persisting cart ({} bytes) under '{}'", serialized.len(), self.key);
        self.store.set(&self.key, &serialized).await?;
        self.state.send_replace(updated);
        Ok(())
    }
}
