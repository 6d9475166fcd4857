//! Wabot demo client.
//!
//! Walks the full session lifecycle against the Wabot messaging API:
//! authenticate with client credentials, list the available message
//! templates, send one templated message, and log out.

mod api;
mod auth;
mod models;

use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api::WabotClient;

/// Recipient and template used by the demonstration run.
const DEMO_RECIPIENT: &str = "+1234567890";
const DEMO_TEMPLATE_ID: &str = "339";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let client_id =
        std::env::var("WABOT_CLIENT_ID").context("WABOT_CLIENT_ID must be set")?;
    let client_secret =
        std::env::var("WABOT_CLIENT_SECRET").context("WABOT_CLIENT_SECRET must be set")?;

    let mut client = WabotClient::new(client_id, client_secret)?;

    client.authenticate().await.context("authentication failed")?;
    println!("Authenticated successfully.");

    let templates = client
        .get_templates()
        .await
        .context("failed to get templates")?;
    for template in &templates {
        println!(
            "Template ID: {}, Name: {}",
            template.template_id, template.name
        );
    }

    let params = vec!["John".to_string(), "your email address".to_string()];
    client
        .send_message(DEMO_RECIPIENT, DEMO_TEMPLATE_ID, &params)
        .await
        .context("failed to send message")?;
    println!("Message sent successfully.");

    client.logout().await.context("logout failed")?;
    println!("Logged out successfully.");

    info!("done");
    Ok(())
}
