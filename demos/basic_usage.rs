//! Basic tour: create an app + endpoint, peek at events and deliveries,
//! then clean up.
//!
//! ```bash
//! cargo run --example basic_usage
//! ```
//!
//! Env vars:
//! - `HOOKFREIGHT_API_KEY` (optional for self-hosted)
//! - `HOOKFREIGHT_URL` (optional, defaults to Hookfreight Cloud)

use hookfreight_sdk::{Client, CreateAppParams, CreateEndpointParams};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut builder = Client::builder();
    if let Some(base) = env_opt("HOOKFREIGHT_URL") {
        builder = builder.base_url(base);
    }
    if let Some(key) = env_opt("HOOKFREIGHT_API_KEY") {
        builder = builder.api_key(key);
    }
    let hf = builder.build()?;

    // List all apps
    let page = hf.apps().list(None).await?;
    println!("Apps: {}", page.apps.len());

    // Create a new app
    let app = hf
        .apps()
        .create(&CreateAppParams {
            name: "My App".to_owned(),
            description: Some("Created via SDK".to_owned()),
        })
        .await?;
    println!("Created app: {}", app.id.as_str());

    // Create an endpoint under the app
    let endpoint = hf
        .endpoints()
        .create(&CreateEndpointParams {
            name: "Stripe Webhooks".to_owned(),
            app_id: app.id.clone(),
            forward_url: "https://example.com/webhooks/stripe".to_owned(),
            ..Default::default()
        })
        .await?;
    println!("Created endpoint: {}", endpoint.id.as_str());
    println!("Webhook URL: https://api.hookfreight.com/{}", endpoint.hook_token);

    // Recent events and deliveries
    let events = hf.events().list(None).await?;
    println!("Found {} events", events.events.len());
    let deliveries = hf.deliveries().list(None).await?;
    println!("Found {} deliveries", deliveries.deliveries.len());

    // Clean up
    hf.endpoints().delete(endpoint.id).await?;
    let deleted = hf.apps().delete(app.id).await?;
    println!(
        "Cleaned up ({} endpoint(s) removed with the app).",
        deleted.connected_endpoints
    );
    Ok(())
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
