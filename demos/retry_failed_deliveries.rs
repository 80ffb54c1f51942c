//! Find failed deliveries since a given ISO-8601 timestamp and retry
//! each one.
//!
//! ```bash
//! cargo run --example retry_failed_deliveries -- 2026-08-24T00:00:00Z
//! ```
//!
//! Env vars:
//! - `HOOKFREIGHT_API_KEY` (optional for self-hosted)

use hookfreight_sdk::{Client, DeliveryStatus, ListDeliveriesParams, PageParams};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Some(since) = std::env::args().nth(1) else {
        anyhow::bail!("usage: cargo run --example retry_failed_deliveries -- <iso8601-start-date>");
    };

    let mut builder = Client::builder();
    if let Some(key) = env_opt("HOOKFREIGHT_API_KEY") {
        builder = builder.api_key(key);
    }
    let hf = builder.build()?;

    let page = hf
        .deliveries()
        .list(Some(ListDeliveriesParams {
            page: PageParams::new(None, 100),
            status: Some(DeliveryStatus::Failed),
            start_date: Some(since.clone()),
            ..Default::default()
        }))
        .await?;

    println!("Found {} failed deliveries since {since}", page.deliveries.len());

    for delivery in &page.deliveries {
        println!(
            "Retrying {} (event: {})...",
            delivery.id.as_str(),
            delivery.event_id.as_str()
        );
        hf.deliveries().retry(delivery.id.clone()).await?;
    }

    println!("Done.");
    Ok(())
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
