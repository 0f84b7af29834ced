//! `suggest` subcommand: interactive debounced suggestions.
//!
//! Each stdin line is treated as the current contents of the search box; an
//! empty line clears it. Requests fire through the debounce window and
//! resolve latest-wins, so a slow response for an old query never replaces
//! fresher suggestions.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use storefront_client::ApiClient;
use storefront_core::AppConfig;
use storefront_search::{RequestSequencer, SearchRequest, SuggestionBox};

pub async fn run(config: &AppConfig, client: &ApiClient) -> anyhow::Result<()> {
    let (search_box, mut requests) =
        SuggestionBox::new(Duration::from_millis(config.debounce_ms));
    let sequencer = search_box.sequencer();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("type to search; empty line clears; Ctrl-D exits");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(text) => search_box.on_input(text.trim_end()),
                    None => break,
                }
            }
            request = requests.recv() => {
                let Some(request) = request else { break };
                resolve(client, &sequencer, request).await;
            }
        }
    }

    Ok(())
}

async fn resolve(client: &ApiClient, sequencer: &Arc<RequestSequencer>, request: SearchRequest) {
    let result = client.search(&request.query).await;

    // A newer query may have been dispatched while this one was in flight.
    if !sequencer.is_current(request.generation) {
        tracing::debug!(query = %request.query, "discarding stale suggestion response");
        return;
    }

    match result {
        Ok(products) if products.is_empty() => println!("  (no suggestions)"),
        Ok(products) => {
            for product in products.iter().take(5) {
                println!("  {:<40} {:>10.2}", product.name, product.price);
            }
        }
        Err(err) => {
            tracing::warn!(%err, "suggestion fetch failed");
            println!("  (no suggestions)");
        }
    }
}
