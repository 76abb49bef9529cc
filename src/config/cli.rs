use crate::config::CartConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "rocket-cart")]
#[command(about = "Shopping cart kept in sync with a remote inventory service")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the inventory service endpoint
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// Override the storage file path
    #[arg(long)]
    pub storage_path: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CartCommand {
    /// Print the current cart
    Show,
    /// Add one unit of a product
    Add { product_id: u64 },
    /// Remove a product from the cart
    Remove { product_id: u64 },
    /// Set the amount of a product already in the cart
    Set {
        product_id: u64,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

impl CliArgs {
    /// Loads the configuration file (or defaults) and applies command line overrides.
    pub fn resolve_config(&self) -> Result<CartConfig> {
        let mut config = match &self.config {
            Some(path) => CartConfig::from_file(path)?,
            None => CartConfig::default(),
        };

        if let Some(endpoint) = &self.api_endpoint {
            tracing::debug!("Inventory endpoint overridden to: {}", endpoint);
            config.inventory.endpoint = endpoint.clone();
        }
        if let Some(path) = &self.storage_path {
            tracing::debug!("Storage path overridden to: {}", path);
            config.storage.path = path.clone();
        }

        Ok(config)
    }
}
