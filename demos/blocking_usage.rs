//! Same tour as `basic_usage`, but on the blocking client (no runtime).
//!
//! ```bash
//! cargo run --example blocking_usage --features blocking
//! ```
//!
//! Env vars:
//! - `HOOKFREIGHT_API_KEY` (optional for self-hosted)
//! - `HOOKFREIGHT_URL` (optional, defaults to Hookfreight Cloud)

use hookfreight_sdk::BlockingClient;

fn main() -> anyhow::Result<()> {
    let mut builder = BlockingClient::builder();
    if let Some(base) = env_opt("HOOKFREIGHT_URL") {
        builder = builder.base_url(base);
    }
    if let Some(key) = env_opt("HOOKFREIGHT_API_KEY") {
        builder = builder.api_key(key);
    }
    let hf = builder.build()?;

    let page = hf.apps().list(None)?;
    println!("Apps: {}", page.apps.len());
    for app in &page.apps {
        println!("  {} - {}", app.id.as_str(), app.name);
    }

    let stats = hf.deliveries().queue_stats()?;
    println!(
        "Queue: waiting={} active={} failed={}",
        stats.waiting, stats.active, stats.failed
    );

    Ok(())
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
