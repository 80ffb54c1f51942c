//! Pause and resume every endpoint of an app, as a CI/CD maintenance
//! window would.
//!
//! ```bash
//! cargo run --example manage_endpoints -- <app_id>
//! ```
//!
//! Env vars:
//! - `HOOKFREIGHT_API_KEY` (optional for self-hosted)

use hookfreight_sdk::{AppId, Client, UpdateEndpointParams};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Some(app_id) = std::env::args().nth(1).map(AppId::from) else {
        anyhow::bail!("usage: cargo run --example manage_endpoints -- <app_id>");
    };

    let mut builder = Client::builder();
    if let Some(key) = env_opt("HOOKFREIGHT_API_KEY") {
        builder = builder.api_key(key);
    }
    let hf = builder.build()?;

    let page = hf.endpoints().list(app_id.clone(), None).await?;
    println!("App {} has {} endpoint(s):", app_id.as_str(), page.endpoints.len());
    for ep in &page.endpoints {
        println!("  {} - {} (active: {})", ep.id.as_str(), ep.name, ep.is_active);
    }

    // Pause everything for the maintenance window.
    for ep in &page.endpoints {
        hf.endpoints()
            .update(
                ep.id.clone(),
                &UpdateEndpointParams {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await?;
        println!("Paused {}", ep.id.as_str());
    }

    // ... do maintenance work ...

    for ep in &page.endpoints {
        hf.endpoints()
            .update(
                ep.id.clone(),
                &UpdateEndpointParams {
                    is_active: Some(true),
                    ..Default::default()
                },
            )
            .await?;
        println!("Resumed {}", ep.id.as_str());
    }

    Ok(())
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
