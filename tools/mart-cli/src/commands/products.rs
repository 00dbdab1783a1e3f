//! Catalog browsing commands.

use anyhow::Result;
use clap::Args;
use console::style;
use mart_commerce::search::{Filter, SearchQuery, SortOption};
use mart_commerce::{Currency, Money, ProductId};

use crate::context::Context;
use crate::output::{format_date, rating_stars};

/// Arguments for `mart products`.
#[derive(Args)]
pub struct ProductsArgs {
    /// Text search over name, brand, and description
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter by category id
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by subcategory id
    #[arg(long)]
    pub subcategory: Option<String>,

    /// Filter by brand
    #[arg(long)]
    pub brand: Option<String>,

    /// Minimum price (in rupees/major units)
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price (in rupees/major units)
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Only show in-stock products
    #[arg(long)]
    pub in_stock: bool,

    /// Sort order: featured, price-asc, price-desc, name, rating
    #[arg(long, default_value = "featured")]
    pub sort: String,

    /// Page number
    #[arg(short, long, default_value_t = 1)]
    pub page: i64,
}

/// Arguments for `mart product`.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id
    pub id: String,
}

/// Run the products listing command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let currency = ctx.currency();
    let sort = SortOption::from_slug(&args.sort)
        .ok_or_else(|| anyhow::anyhow!("Unknown sort option: {}", args.sort))?;

    let mut query = SearchQuery::new()
        .with_sort(sort)
        .with_pagination(args.page, ctx.config.page_size);

    if let Some(search) = args.search {
        query = query.with_query(search);
    }
    if let Some(category) = args.category {
        query = query.with_filter(Filter::category(category.as_str()));
    }
    if let Some(subcategory) = args.subcategory {
        query = query.with_filter(Filter::subcategory(subcategory.as_str()));
    }
    if let Some(brand) = args.brand {
        query = query.with_filter(Filter::brand(brand));
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        query = query.with_filter(Filter::price_range(
            args.min_price.map(|p| to_money(p, currency)),
            args.max_price.map(|p| to_money(p, currency)),
        ));
    }
    if args.in_stock {
        query = query.with_filter(Filter::in_stock());
    }

    let results = ctx.products.query(&query);

    if results.is_empty() {
        ctx.output.info("No products match.");
        return Ok(());
    }

    ctx.output.header(&format!(
        "Products ({} of {})",
        results.len(),
        results.pagination.total
    ));
    for product in &results.items {
        ctx.output.product_row(product);
    }

    let pagination = results.pagination;
    if pagination.total_pages > 1 {
        ctx.output.info(&format!(
            "Page {} of {} (items {}-{})",
            pagination.page,
            pagination.total_pages,
            pagination.start_item(),
            pagination.end_item(),
        ));
    }

    Ok(())
}

/// Run the product detail command.
pub fn show(args: ProductArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::new(args.id);
    let product = ctx.products.get(&id)?;

    ctx.output.header(&product.name);
    ctx.output.kv("Id", product.id.as_str());
    ctx.output.kv("Brand", &product.brand);
    if let Some(description) = &product.description {
        ctx.output.kv("About", description);
    }
    ctx.output.kv("Price", &product.effective_price().display());
    if product.is_on_sale() {
        let pct = product.discount_percentage().unwrap_or(0.0);
        ctx.output.kv(
            "Deal",
            &format!("{} off ({}%)", product.price.display(), pct.round()),
        );
    }
    ctx.output.kv("Rating", &rating_stars(&product.rating));
    ctx.output.kv(
        "Stock",
        &if product.stock.is_in_stock() {
            format!("{} available", product.stock.available)
        } else {
            "out of stock".to_string()
        },
    );

    let reviews = ctx.products.reviews_for(&id)?;
    if !reviews.is_empty() {
        ctx.output.header("Reviews");
        for review in reviews {
            println!(
                "  {} {} {}",
                style(&review.author).bold(),
                style(format!("{}/5", review.rating)).yellow(),
                style(format_date(review.posted_at)).dim(),
            );
            println!("    {}", review.comment);
        }
    }

    let related = ctx.products.related(&id, 4)?;
    if !related.is_empty() {
        ctx.output.header("You may also like");
        for product in related {
            ctx.output.product_row(product);
        }
    }

    Ok(())
}

/// Run the categories command.
pub fn categories(ctx: &Context) -> Result<()> {
    ctx.output.header("Categories");
    for node in ctx.categories.hierarchy() {
        println!(
            "  {} {}",
            style(node.category.id.as_str()).cyan(),
            node.category.name
        );
        for sub in &node.subcategories {
            println!(
                "    {} {}",
                style(sub.id.as_str()).cyan().dim(),
                style(&sub.name).dim()
            );
        }
    }
    Ok(())
}

fn to_money(major: f64, currency: Currency) -> Money {
    let multiplier = 10_i64.pow(currency.decimal_places()) as f64;
    Money::new((major * multiplier).round() as i64, currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_units_convert_to_minor() {
        let m = to_money(49.99, Currency::INR);
        assert_eq!(m.amount_minor, 4999);
    }
}
