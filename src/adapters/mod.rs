// Adapters layer: concrete implementations of the domain ports (inventory over HTTP,
// key-value storage, user notification).

pub mod http;
pub mod notifier;
pub mod storage;

pub use http::HttpInventory;
pub use notifier::ConsoleNotifier;
pub use storage::{FileStore, MemoryStore};
