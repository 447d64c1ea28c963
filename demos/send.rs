//! Send a push notification to a device token
//!
//! Run with: `PUSHY_SECRET_API_KEY=... cargo run --example send`

use anyhow::{Context, Result};
use pushy::{Pushy, SendOptions};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Plug in your Secret API Key from the Pushy dashboard
    let api_key = std::env::var("PUSHY_SECRET_API_KEY")
        .context("set PUSHY_SECRET_API_KEY to your Secret API Key")?;
    let client = Pushy::new(api_key)?;

    // Payload data to deliver to the target device(s)
    let data = json!({ "message": "Hello World!" });

    // Target device token(s)
    let tokens = vec!["DEVICE_REGISTRATION_ID"];

    // Expire the notification if not delivered within 30 seconds
    let options = SendOptions {
        time_to_live: Some(30),
        ..Default::default()
    };

    let result = client.send_notification(data, tokens, options).await?;
    println!("Push sent successfully! (ID: {})", result.id);

    Ok(())
}
