//! Wire models for the Pushy API
//!
//! Request-side types ([`Recipient`], [`SendOptions`]) and the typed
//! response payloads each operation resolves with. Response structs
//! deserialize leniently: unknown fields are ignored and fields the server
//! may omit are `Option` or defaulted, since the API adds fields over time.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::errors::{Error, Result};

/// One push target, or a list of them
///
/// Wherever the API accepts "a string or an array of strings" (device
/// tokens, topics), this enum carries the caller's shape as given. A
/// single string serializes as a bare string; lists serialize as arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    One(String),
    Many(Vec<String>),
}

impl Recipient {
    /// Validate presence and per-element contents
    ///
    /// An empty string or empty list is a missing argument; a list holding
    /// an empty element is an invalid argument. Elements are checked
    /// exhaustively and the first violation is reported.
    pub(crate) fn validate(&self, argument: &'static str, expected: &'static str) -> Result<()> {
        match self {
            Recipient::One(value) => {
                if value.is_empty() {
                    return Err(Error::missing_argument(argument));
                }
            }
            Recipient::Many(values) => {
                if values.is_empty() {
                    return Err(Error::missing_argument(argument));
                }
                for value in values {
                    if value.is_empty() {
                        return Err(Error::invalid_argument(argument, expected));
                    }
                }
            }
        }
        Ok(())
    }

    /// Validate, then normalize to a list
    ///
    /// A single string promotes to a one-element list.
    pub(crate) fn into_list(self, argument: &'static str, expected: &'static str) -> Result<Vec<String>> {
        self.validate(argument, expected)?;
        Ok(match self {
            Recipient::One(value) => vec![value],
            Recipient::Many(values) => values,
        })
    }

    /// Serialize preserving the caller's one-or-many shape
    pub(crate) fn into_value(self) -> Value {
        match self {
            Recipient::One(value) => Value::String(value),
            Recipient::Many(values) => Value::Array(values.into_iter().map(Value::String).collect()),
        }
    }
}

impl From<&str> for Recipient {
    fn from(value: &str) -> Self {
        Recipient::One(value.to_string())
    }
}

impl From<String> for Recipient {
    fn from(value: String) -> Self {
        Recipient::One(value)
    }
}

impl From<Vec<String>> for Recipient {
    fn from(values: Vec<String>) -> Self {
        Recipient::Many(values)
    }
}

impl From<Vec<&str>> for Recipient {
    fn from(values: Vec<&str>) -> Self {
        Recipient::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Recipient {
    fn from(values: &[&str]) -> Self {
        Recipient::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Optional settings for a push notification
///
/// Serialized into the POST body alongside the payload; the computed
/// `data` and `to` fields always win over colliding keys. Unmodeled
/// API options can be passed through `extra`.
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// How long (in seconds) the notification is kept if the device is
    /// offline; the server default is 1 month, the maximum 1 year
    pub time_to_live: Option<u64>,
    /// Deliver later, at a futuristic unix timestamp (in seconds)
    pub schedule: Option<u64>,
    /// Collapse key grouping undelivered notifications (max 32 chars)
    pub collapse_key: Option<String>,
    /// Invoke the app's notification handler even in the background
    pub content_available: Option<bool>,
    /// Invoke the app's Notification Service Extension in the background
    pub mutable_content: Option<bool>,
    /// iOS notification options (alert message, sound, badge number)
    pub notification: Option<IosNotification>,
    /// Additional raw options merged into the request body
    pub extra: HashMap<String, Value>,
}

impl SendOptions {
    /// Build the base POST body from the configured options
    pub(crate) fn into_body(self) -> Map<String, Value> {
        let mut body = Map::new();

        for (key, value) in self.extra {
            body.insert(key, value);
        }

        if let Some(time_to_live) = self.time_to_live {
            body.insert("time_to_live".to_string(), time_to_live.into());
        }

        if let Some(schedule) = self.schedule {
            body.insert("schedule".to_string(), schedule.into());
        }

        if let Some(collapse_key) = self.collapse_key {
            body.insert("collapse_key".to_string(), collapse_key.into());
        }

        if let Some(content_available) = self.content_available {
            body.insert("content_available".to_string(), content_available.into());
        }

        if let Some(mutable_content) = self.mutable_content {
            body.insert("mutable_content".to_string(), mutable_content.into());
        }

        if let Some(notification) = self.notification {
            body.insert("notification".to_string(), notification.into_value());
        }

        body
    }
}

/// iOS notification options attached to a push
#[derive(Debug, Clone, Default)]
pub struct IosNotification {
    /// Main alert message, visible on the lock screen
    pub body: Option<String>,
    /// Number to display as the app icon badge
    pub badge: Option<u32>,
    /// Sound filename, or a sound dictionary for critical alerts
    pub sound: Option<Value>,
    /// Short string visible on Apple Watch and iOS 8.2+
    pub title: Option<String>,
    /// Notification Content Extension category to invoke
    pub category: Option<String>,
    /// Localization key for the notification body
    pub loc_key: Option<String>,
    /// Replacement strings for the body localization placeholders
    pub loc_args: Option<Vec<String>>,
    /// Localization key for the notification title
    pub title_loc_key: Option<String>,
    /// Replacement strings for the title localization placeholders
    pub title_loc_args: Option<Vec<String>>,
    /// Delivery timing on iOS 15+: passive, active, time-sensitive, critical
    pub interruption_level: Option<String>,
}

impl IosNotification {
    fn into_value(self) -> Value {
        let mut body = Map::new();

        if let Some(text) = self.body {
            body.insert("body".to_string(), text.into());
        }

        if let Some(badge) = self.badge {
            body.insert("badge".to_string(), badge.into());
        }

        if let Some(sound) = self.sound {
            body.insert("sound".to_string(), sound);
        }

        if let Some(title) = self.title {
            body.insert("title".to_string(), title.into());
        }

        if let Some(category) = self.category {
            body.insert("category".to_string(), category.into());
        }

        if let Some(loc_key) = self.loc_key {
            body.insert("loc_key".to_string(), loc_key.into());
        }

        if let Some(loc_args) = self.loc_args {
            body.insert("loc_args".to_string(), loc_args.into());
        }

        if let Some(title_loc_key) = self.title_loc_key {
            body.insert("title_loc_key".to_string(), title_loc_key.into());
        }

        if let Some(title_loc_args) = self.title_loc_args {
            body.insert("title_loc_args".to_string(), title_loc_args.into());
        }

        if let Some(interruption_level) = self.interruption_level {
            body.insert("interruption_level".to_string(), interruption_level.into());
        }

        Value::Object(body)
    }
}

/// Result of a successful send, carrying the assigned push ID
#[derive(Debug, Clone, Deserialize)]
pub struct SendResult {
    #[serde(default)]
    pub success: bool,
    /// The notification's unique ID, usable for status and deletion lookups
    pub id: String,
    /// Additional delivery information, for debugging purposes
    #[serde(default)]
    pub info: Option<SendInfo>,
}

/// Delivery details attached to a send result
#[derive(Debug, Clone, Deserialize)]
pub struct SendInfo {
    /// Number of devices that will potentially receive the notification
    #[serde(default)]
    pub devices: u64,
    /// Device tokens that could not be found under this API key
    #[serde(default)]
    pub failed: Vec<String>,
}

/// Delivery status of a previously sent notification
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationStatus {
    /// Creation date of the notification (unix timestamp)
    pub date: i64,
    /// The notification payload data as sent
    #[serde(default)]
    pub payload: Value,
    /// Expiration date of the notification (unix timestamp)
    #[serde(default)]
    pub expiration: Option<i64>,
    /// Device tokens that have not received the notification yet
    #[serde(default)]
    pub pending_devices: Vec<String>,
}

/// Device registration info, presence, and pending notifications
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceInfo {
    pub device: DeviceMetadata,
    pub presence: DeviceConnectivity,
    /// Undelivered notifications (Android and Electron only)
    #[serde(default)]
    pub pending_notifications: Vec<PendingNotification>,
    /// Topics the device is subscribed to
    #[serde(default)]
    pub subscriptions: Vec<String>,
}

/// Registration metadata for a device
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceMetadata {
    /// Registration date (unix timestamp)
    pub date: i64,
    /// Platform identifier: android, ios, web, electron, python
    pub platform: String,
}

/// Connectivity status reported for a single device
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConnectivity {
    pub online: bool,
    pub last_active: LastActive,
    /// Set when the iOS user has uninstalled the app
    #[serde(default)]
    pub uninstalled: Option<bool>,
    /// Set when the Web Push user has unsubscribed from notifications
    #[serde(default)]
    pub unsubscribed: Option<bool>,
}

/// A device's last communication info
#[derive(Debug, Clone, Deserialize)]
pub struct LastActive {
    /// Last communication date (unix timestamp)
    pub date: i64,
    #[serde(default)]
    pub seconds_ago: i64,
}

/// A notification still queued for a device
#[derive(Debug, Clone, Deserialize)]
pub struct PendingNotification {
    pub id: String,
    pub date: i64,
    #[serde(default)]
    pub payload: Value,
    #[serde(default)]
    pub expiration: Option<i64>,
}

/// Presence entry returned by the device presence API, one per token
#[derive(Debug, Clone, Deserialize)]
pub struct DevicePresence {
    /// The device token this presence entry belongs to
    pub id: String,
    pub online: bool,
    /// Last connection date (unix timestamp)
    pub last_active: i64,
    #[serde(default)]
    pub uninstalled: Option<bool>,
    #[serde(default)]
    pub unsubscribed: Option<bool>,
}

/// A Pub/Sub topic and its subscriber count
#[derive(Debug, Clone, Deserialize)]
pub struct TopicStatus {
    pub name: String,
    pub subscribers: u64,
}
