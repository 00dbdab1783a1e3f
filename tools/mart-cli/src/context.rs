//! CLI execution context.

use anyhow::{Context as _, Result};
use mart_commerce::cart::PersistentCart;
use mart_commerce::order::Order;
use mart_commerce::Currency;
use mart_data::{CategoryRepository, OrderRepository, ProductRepository};
use mart_store::{store_key, FileStore, KvStore};

use crate::config::MartConfig;
use crate::output::Output;

/// Execution context for CLI commands: config, catalog, and the persisted
/// session state (cart and placed orders).
pub struct Context {
    /// CLI configuration.
    pub config: MartConfig,
    /// Output handler.
    pub output: Output,
    /// Product catalog.
    pub products: ProductRepository,
    /// Category hierarchy.
    pub categories: CategoryRepository,
}

impl Context {
    /// Load context from an optional config file path.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = match config_path {
            Some(path) => MartConfig::load(path)?,
            None => Self::find_config().unwrap_or_default(),
        };

        let products =
            ProductRepository::with_seed_data().context("Failed to load product catalog")?;
        let categories =
            CategoryRepository::with_seed_data().context("Failed to load categories")?;

        Ok(Self {
            config,
            output,
            products,
            categories,
        })
    }

    /// Look for `mart.toml` in the current directory and its parents.
    fn find_config() -> Option<MartConfig> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join("mart.toml");
            if candidate.exists() {
                return MartConfig::load(candidate.to_str()?).ok();
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// The configured currency.
    pub fn currency(&self) -> Currency {
        self.config.currency()
    }

    /// Open the durable store document.
    pub fn store(&self) -> Result<FileStore> {
        FileStore::open(&self.config.store_path)
            .with_context(|| format!("Failed to open store: {}", self.config.store_path.display()))
    }

    /// Open the persisted cart.
    pub fn cart(&self) -> Result<PersistentCart<FileStore>> {
        Ok(PersistentCart::open(self.store()?, self.currency()))
    }

    /// Load placed orders from the store.
    ///
    /// Order history is display state; unreadable data degrades to an
    /// empty history the same way the cart does.
    pub fn orders(&self) -> Result<OrderRepository> {
        let store = self.store()?;
        let orders: Vec<Order> = match store.get(&store_key!("quickmart", "orders")) {
            Ok(Some(orders)) => orders,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "stored orders are unreadable, starting empty");
                Vec::new()
            }
        };
        Ok(OrderRepository::from_existing(orders))
    }

    /// Write placed orders back to the store.
    pub fn save_orders(&self, orders: &OrderRepository) -> Result<()> {
        let store = self.store()?;
        store
            .set(&store_key!("quickmart", "orders"), &orders.all())
            .context("Failed to persist orders")
    }
}
