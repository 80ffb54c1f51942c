//! Delivery-queue health check, suitable for an alerting cron.
//!
//! ```bash
//! cargo run --example monitor_queue
//! ```
//!
//! Env vars:
//! - `HOOKFREIGHT_API_KEY` (optional for self-hosted)

use hookfreight_sdk::Client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut builder = Client::builder();
    if let Some(key) = env_opt("HOOKFREIGHT_API_KEY") {
        builder = builder.api_key(key);
    }
    let hf = builder.build()?;

    let stats = hf.deliveries().queue_stats().await?;

    println!("Queue Stats:");
    println!("  Waiting:   {}", stats.waiting);
    println!("  Active:    {}", stats.active);
    println!("  Completed: {}", stats.completed);
    println!("  Failed:    {}", stats.failed);
    println!("  Delayed:   {}", stats.delayed);

    if stats.waiting > 100 {
        eprintln!("WARNING: High queue backlog!");
    }
    if stats.failed > 10 {
        eprintln!("WARNING: Multiple failed deliveries in queue!");
    }

    Ok(())
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
