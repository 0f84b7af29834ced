//! `browse` subcommand: category listing with filters and sorting.

use clap::Args;

use storefront_catalog::Listing;
use storefront_client::{ApiClient, ClientError};
use storefront_core::{AppConfig, Product};

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Category slug or display name from the route, e.g. "mens-wear".
    pub category: String,

    /// Sort token: best, az, za, priceLow, priceHigh, dateNew, dateOld.
    #[arg(long)]
    pub sort: Option<String>,

    /// Lower price bound (clamped into the category's range).
    #[arg(long)]
    pub price_min: Option<f64>,

    /// Upper price bound (clamped into the category's range).
    #[arg(long)]
    pub price_max: Option<f64>,

    /// Size tags to filter by; may be repeated. No flag means all sizes.
    #[arg(long = "size")]
    pub sizes: Vec<String>,
}

pub async fn run(config: &AppConfig, client: &ApiClient, args: BrowseArgs) -> anyhow::Result<()> {
    let fetched = fetch_category_listing(config, client, &args.category).await;

    let mut listing = Listing::new();
    listing.load(args.category.clone(), fetched);

    if let Some(value) = args.price_min {
        listing.set_price_min(value);
    }
    if let Some(value) = args.price_max {
        listing.set_price_max(value);
    }
    listing.set_sizes(args.sizes);
    if let Some(token) = &args.sort {
        listing.set_sort_token(token);
    }

    let products = listing.apply();
    if products.is_empty() {
        println!("no products");
        return Ok(());
    }

    if let Some(window) = listing.window() {
        println!(
            "{} product(s) in \"{}\" (price range {:.2}–{:.2})",
            products.len(),
            listing.route_token(),
            window.floor(),
            window.ceil()
        );
    }
    print_table(&products);
    Ok(())
}

/// Fetches via the category endpoint, falling back to the public listing
/// with a category query for backends that don't expose per-category routes.
async fn fetch_category_listing(
    config: &AppConfig,
    client: &ApiClient,
    category: &str,
) -> Result<Vec<Product>, ClientError> {
    match client.fetch_category(category).await {
        Ok(products) => Ok(products),
        Err(ClientError::NotFound { .. }) => {
            tracing::debug!(category, "category endpoint missing; using public listing");
            client
                .fetch_products(config.product_limit, Some(category))
                .await
        }
        Err(err) => Err(err),
    }
}

pub(crate) fn print_table(products: &[Product]) {
    for product in products {
        println!(
            "{:<12} {:<40} {:>10.2}",
            product.id, product.name, product.price
        );
    }
}
