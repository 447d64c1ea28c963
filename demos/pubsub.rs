//! Manage Pub/Sub topics and subscriptions
//!
//! Run with: `PUSHY_SECRET_API_KEY=... cargo run --example pubsub`

use anyhow::{Context, Result};
use pushy::Pushy;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("PUSHY_SECRET_API_KEY")
        .context("set PUSHY_SECRET_API_KEY to your Secret API Key")?;
    let client = Pushy::new(api_key)?;

    // List the app's topics and their subscriber counts
    let topics = client.topics().await?;
    for topic in &topics {
        println!("{}: {} subscriber(s)", topic.name, topic.subscribers);
    }

    // List devices subscribed to a certain topic
    let subscribers = client.subscribers("news").await?;
    println!("Devices subscribed to 'news': {subscribers:?}");

    // Subscribe a device to topics
    client.subscribe(vec!["news", "weather"], "TOKEN").await?;
    println!("Subscribed device to topic(s) successfully");

    // Unsubscribe the device again
    client.unsubscribe(vec!["news", "weather"], "TOKEN").await?;
    println!("Unsubscribed device from topic(s) successfully");

    Ok(())
}
