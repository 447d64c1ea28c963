//! Pushy API client library
//!
//! This library provides a client for the Pushy push notification service:
//! send notifications, check delivery status, inspect devices, and manage
//! Pub/Sub topic subscriptions.
//!
//! ```rust,no_run
//! use pushy::{Pushy, SendOptions};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), pushy::Error> {
//! let client = Pushy::new("SECRET_API_KEY")?;
//!
//! let result = client
//!     .send_notification(
//!         json!({ "message": "Hello World!" }),
//!         vec!["DEVICE_REGISTRATION_ID"],
//!         SendOptions { time_to_live: Some(30), ..Default::default() },
//!     )
//!     .await?;
//!
//! println!("Push sent successfully! (ID: {})", result.id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod errors;
pub mod models;
pub mod transport;

mod api;
mod request;

// Re-export commonly used types for convenience
pub use client::Pushy;
pub use errors::{Error, Result};
pub use models::{
    DeviceConnectivity, DeviceInfo, DeviceMetadata, DevicePresence, IosNotification, LastActive,
    NotificationStatus, PendingNotification, Recipient, SendInfo, SendOptions, SendResult,
    TopicStatus,
};
pub use transport::{HttpTransport, RequestDescriptor, Transport, TransportOptions, TransportResponse};
