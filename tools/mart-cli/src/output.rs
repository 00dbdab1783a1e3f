//! Output formatting for the CLI.

use console::style;
use mart_commerce::catalog::Product;
use mart_commerce::order::OrderStatus;
use mart_commerce::reviews::RatingSummary;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a one-line product row for listings.
    pub fn product_row(&self, product: &Product) {
        let price = if product.is_on_sale() {
            format!(
                "{} {}",
                style(product.effective_price().display()).green().bold(),
                style(product.price.display()).dim().strikethrough(),
            )
        } else {
            style(product.price.display()).bold().to_string()
        };

        let stock = if !product.stock.is_in_stock() {
            style(" [out of stock]").red().to_string()
        } else if product.stock.is_low() {
            style(format!(" [only {} left]", product.stock.available))
                .yellow()
                .to_string()
        } else {
            String::new()
        };

        println!(
            "  {:<24} {:<32} {} {}{}",
            style(product.id.as_str()).cyan(),
            product.name,
            price,
            rating_stars(&product.rating),
            stock,
        );
    }

}

/// Format a rating as stars plus count, e.g. "★★★★☆ (21)".
pub fn rating_stars(rating: &RatingSummary) -> String {
    if !rating.is_rated() {
        return style("no ratings yet").dim().to_string();
    }
    let full = rating.full_stars().clamp(0, 5) as usize;
    let stars: String = "★".repeat(full) + &"☆".repeat(5 - full);
    format!("{} ({})", style(stars).yellow(), rating.count)
}

/// Status badge for order states.
pub fn status_badge(status: OrderStatus) -> String {
    let name = status.display_name();
    match status {
        OrderStatus::Confirmed => style(name).yellow().to_string(),
        OrderStatus::Shipped => style(name).blue().to_string(),
        OrderStatus::Delivered => style(name).green().to_string(),
        OrderStatus::Cancelled => style(name).dim().to_string(),
    }
}

/// Format a unix timestamp as a UTC date (YYYY-MM-DD).
pub fn format_date(unix_secs: i64) -> String {
    chrono::DateTime::from_timestamp(unix_secs, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| unix_secs.to_string())
}
