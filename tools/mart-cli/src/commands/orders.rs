//! Order commands.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;
use mart_commerce::OrderId;

use crate::context::Context;
use crate::output::{format_date, status_badge};

/// Arguments for `mart order`.
#[derive(Args)]
pub struct OrderArgs {
    #[command(subcommand)]
    pub command: OrderCommand,
}

#[derive(Subcommand)]
pub enum OrderCommand {
    /// Place an order from the current cart
    Place,

    /// List placed orders
    List,

    /// Show one order
    Show {
        /// Order id
        order_id: String,
    },

    /// Cancel an order that has not shipped
    Cancel {
        /// Order id
        order_id: String,
    },
}

/// Run the order command.
pub fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    match args.command {
        OrderCommand::Place => place(ctx),
        OrderCommand::List => list(ctx),
        OrderCommand::Show { order_id } => show(&OrderId::new(order_id), ctx),
        OrderCommand::Cancel { order_id } => cancel(&OrderId::new(order_id), ctx),
    }
}

fn place(ctx: &Context) -> Result<()> {
    let mut cart = ctx.cart()?;
    let mut orders = ctx.orders()?;

    let order = orders.place(cart.cart(), None, now())?;

    ctx.output.success(&format!("Order {} placed", order.id));
    ctx.output.kv("Tracking", &order.tracking_id);
    ctx.output
        .kv("Estimated delivery", &format_date(order.estimated_delivery));

    ctx.save_orders(&orders)?;
    cart.clear();

    Ok(())
}

fn list(ctx: &Context) -> Result<()> {
    let orders = ctx.orders()?;

    if orders.all().is_empty() {
        ctx.output.info("No orders yet.");
        return Ok(());
    }

    ctx.output.header("Orders");
    for order in orders.all().iter().rev() {
        println!(
            "  {:<10} {}  {:<3} item(s)  {:<12} {}",
            style(order.id.as_str()).cyan(),
            format_date(order.placed_at),
            order.item_count(),
            status_badge(order.status),
            style(order.grand_total.display()).bold(),
        );
    }
    Ok(())
}

fn show(order_id: &OrderId, ctx: &Context) -> Result<()> {
    let orders = ctx.orders()?;
    let order = orders.get(order_id)?;

    ctx.output.header(&format!("Order {}", order.id));
    ctx.output.kv("Placed", &format_date(order.placed_at));
    ctx.output.kv("Status", &status_badge(order.status));
    ctx.output.kv("Tracking", &order.tracking_id);
    ctx.output
        .kv("Estimated delivery", &format_date(order.estimated_delivery));

    for item in &order.items {
        println!(
            "  {:<32} {} x {} = {}",
            item.name,
            item.unit_price.display(),
            item.quantity,
            item.total_price.display(),
        );
    }
    ctx.output
        .kv("Total", &style(order.grand_total.display()).bold().to_string());

    Ok(())
}

fn cancel(order_id: &OrderId, ctx: &Context) -> Result<()> {
    let mut orders = ctx.orders()?;

    let order = orders.update_status(
        order_id,
        mart_commerce::order::OrderStatus::Cancelled,
        now(),
    )?;
    ctx.output.success(&format!("Order {} cancelled", order.id));

    ctx.save_orders(&orders)?;
    Ok(())
}

fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
