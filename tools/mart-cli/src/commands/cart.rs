//! Cart commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;
use mart_commerce::ProductId;

use crate::context::Context;

/// Arguments for `mart cart`.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart (default)
    Show,

    /// Add a product to the cart
    Add {
        /// Product id
        product_id: String,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: i64,
    },

    /// Set the quantity of a cart line (0 removes it)
    Update {
        /// Product id
        product_id: String,

        /// New quantity
        quantity: i64,
    },

    /// Remove a product from the cart
    Remove {
        /// Product id
        product_id: String,
    },

    /// Empty the cart
    Clear,
}

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => show(ctx),
        CartCommand::Add {
            product_id,
            quantity,
        } => add(&ProductId::new(product_id), quantity, ctx),
        CartCommand::Update {
            product_id,
            quantity,
        } => update(&ProductId::new(product_id), quantity, ctx),
        CartCommand::Remove { product_id } => remove(&ProductId::new(product_id), ctx),
        CartCommand::Clear => clear(ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    let cart = ctx.cart()?;

    if cart.cart().is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    ctx.output.header("Cart");
    for item in cart.cart().items() {
        let unit = item.effective_unit_price();
        println!(
            "  {:<24} {:<32} {} x {} = {}",
            style(item.product_id.as_str()).cyan(),
            item.name,
            unit.display(),
            item.quantity,
            style(item.line_total().display()).bold(),
        );
    }

    let totals = cart.totals();
    ctx.output.kv("Items", &totals.item_count.to_string());
    ctx.output.kv("Total", &style(totals.total.display()).bold().to_string());

    Ok(())
}

fn add(product_id: &ProductId, quantity: i64, ctx: &Context) -> Result<()> {
    let product = ctx.products.get(product_id)?;

    // Stock is the catalog's concern; warn here rather than in the cart.
    if !product.stock.can_fulfill(quantity) {
        ctx.output.warn(&format!(
            "Only {} of '{}' in stock",
            product.stock.available, product.name
        ));
    }

    let mut cart = ctx.cart()?;
    cart.add_item(ctx.products.snapshot(product_id)?, quantity)?;

    let line = cart
        .cart()
        .get(product_id)
        .map(|i| i.quantity)
        .unwrap_or(quantity);
    ctx.output.success(&format!(
        "Added {} x {} (now {} in cart)",
        quantity, product.name, line
    ));
    Ok(())
}

fn update(product_id: &ProductId, quantity: i64, ctx: &Context) -> Result<()> {
    let mut cart = ctx.cart()?;

    if !cart.update_quantity(product_id, quantity) {
        ctx.output.info(&format!("'{}' is not in the cart.", product_id));
        return Ok(());
    }

    if quantity <= 0 {
        ctx.output.success(&format!("Removed '{}' from the cart", product_id));
    } else {
        ctx.output.success(&format!("Set '{}' to {}", product_id, quantity));
    }
    Ok(())
}

fn remove(product_id: &ProductId, ctx: &Context) -> Result<()> {
    let mut cart = ctx.cart()?;

    if cart.remove_item(product_id) {
        ctx.output.success(&format!("Removed '{}' from the cart", product_id));
    } else {
        ctx.output.info(&format!("'{}' is not in the cart.", product_id));
    }
    Ok(())
}

fn clear(ctx: &Context) -> Result<()> {
    let mut cart = ctx.cart()?;
    cart.clear();
    ctx.output.success("Cart cleared");
    Ok(())
}
