use clap::Parser;
use rocket_cart::utils::error::ErrorSeverity;
use rocket_cart::utils::{logger, validation::Validate};
use rocket_cart::{
    Cart, CartCommand, CartManager, CartSession, CliArgs, ConsoleNotifier, FileStore,
    HttpInventory, UpdateProductAmount,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::debug!("Cart config: {:?}", config);

    let inventory = HttpInventory::from_config(&config.inventory)?;
    let store = FileStore::new(&config.storage.path);
    tracing::debug!("Using storage file {}", store.path().display());

    let manager = match CartManager::load(inventory, store, config.storage.key.clone()).await {
        Ok(manager) => manager,
        Err(e) => {
            tracing::error!(
                "Failed to restore cart: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            let exit_code = match e.severity() {
                ErrorSeverity::Critical => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    };

    let session = CartSession::new(Arc::new(manager), ConsoleNotifier::new());

    let succeeded = match args.command {
        CartCommand::Show => true,
        CartCommand::Add { product_id } => session.add_product(product_id).await,
        CartCommand::Remove { product_id } => session.remove_product(product_id).await,
        CartCommand::Set { product_id, amount } => {
            session
                .update_product_amount(UpdateProductAmount { product_id, amount })
                .await
        }
    };

    print_cart(&session.cart());

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("🛒 Cart is empty");
        return;
    }

    println!("{:>6}  {:>6}  TITLE", "ID", "AMOUNT");
    for product in cart {
        println!("{:>6}  {:>6}  {}", product.id, product.amount, product.title);
    }
}
