//! `search` subcommand: one-shot product search (the explicit-submit path).

use clap::Args;

use storefront_client::ApiClient;

use crate::browse::print_table;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-text search term, passed literally as the `q` parameter.
    pub term: String,
}

pub async fn run(client: &ApiClient, args: SearchArgs) -> anyhow::Result<()> {
    let products = match client.search(&args.term).await {
        Ok(products) => products,
        Err(err) => {
            tracing::warn!(%err, "search failed; showing empty results");
            Vec::new()
        }
    };

    if products.is_empty() {
        println!("no products");
        return Ok(());
    }

    println!("{} result(s) for \"{}\"", products.len(), args.term);
    print_table(&products);
    Ok(())
}
