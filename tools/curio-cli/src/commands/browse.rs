//! Catalog browsing.

use anyhow::{anyhow, Result};
use clap::Args;
use curio_commerce::catalog::{Catalog, Condition};
use curio_commerce::money::Money;
use curio_commerce::search::{Filter, ProductQuery, SortOption};

use crate::output::Output;

/// Arguments for `curio browse`.
#[derive(Args)]
pub struct BrowseArgs {
    /// Text to search for in titles and descriptions
    pub query: Option<String>,

    /// Only show listings in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Minimum price in dollars
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price in dollars
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Only show listings with this condition (new, like_new, good, fair)
    #[arg(long)]
    pub condition: Option<String>,

    /// Only show in-stock listings
    #[arg(long)]
    pub in_stock: bool,

    /// Sort order (newest, price-low, price-high, title)
    #[arg(short, long, default_value = "newest")]
    pub sort: String,
}

/// Run the browse command.
pub fn run_browse(args: BrowseArgs, catalog: &Catalog, output: &Output) -> Result<()> {
    let sort: SortOption = args
        .sort
        .parse()
        .map_err(|_| anyhow!("Unknown sort order: {}", args.sort))?;

    let mut query = ProductQuery::new().with_sort(sort);
    if let Some(text) = args.query {
        query = query.with_filter(Filter::text(text));
    }
    if let Some(category) = args.category {
        query = query.with_filter(Filter::category(category.as_str()));
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        query = query.with_filter(Filter::price_range(
            args.min_price.map(Money::from_decimal),
            args.max_price.map(Money::from_decimal),
        ));
    }
    if let Some(condition) = args.condition {
        let condition: Condition = condition
            .parse()
            .map_err(|_| anyhow!("Unknown condition: {}", condition))?;
        query = query.with_filter(Filter::Condition(condition));
    }
    if args.in_stock {
        query = query.with_filter(Filter::InStock);
    }

    let results = catalog.search(&query);
    output.header(&format!("{} listings", results.len()));
    for product in results {
        let category = catalog
            .find_category(&product.category_id)
            .map(|c| c.name.as_str())
            .unwrap_or("?");
        output.info(&format!(
            "{:<8} {:<36} {:>8}  {} x{}  [{}]",
            product.id.as_str(),
            product.title,
            product.price.display(),
            product.condition.display_name(),
            product.available,
            category,
        ));
    }
    Ok(())
}
