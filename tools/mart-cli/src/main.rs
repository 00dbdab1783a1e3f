//! Mart CLI - terminal storefront for QuickMart.
//!
//! Commands:
//! - `mart products` - Browse, filter, and sort the catalog
//! - `mart product <id>` - Product detail with reviews
//! - `mart categories` - Show the category tree
//! - `mart cart` - Show and mutate the persisted cart
//! - `mart order` - Place orders and track them

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, OrderArgs, ProductArgs, ProductsArgs};

/// Mart CLI - browse the QuickMart catalog and manage your cart
#[derive(Parser)]
#[command(name = "mart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse, filter, and sort products
    Products(ProductsArgs),

    /// Show a product's details and reviews
    Product(ProductArgs),

    /// Show the category tree
    Categories,

    /// Show and mutate the cart
    Cart(CartArgs),

    /// Place and track orders
    Order(OrderArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;
    ctx.output.debug(&format!(
        "store: {}",
        ctx.config.store_path.display()
    ));

    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Product(args) => commands::products::show(args, &ctx),
        Commands::Categories => commands::products::categories(&ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Order(args) => commands::orders::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_target(false)
        .init();
}
