//! Device APIs: info and presence

use reqwest::Method;
use serde_json::json;
use tokio::task::JoinHandle;

use crate::client::Pushy;
use crate::errors::{Error, Result};
use crate::models::{DeviceInfo, DevicePresence, Recipient};
use crate::request::{decode, extract_field};

impl Pushy {
    /// Fetch registration info, presence, and pending notifications for a
    /// device by its token
    pub async fn device_info(&self, device_token: &str) -> Result<DeviceInfo> {
        if device_token.is_empty() {
            return Err(Error::missing_argument("device token"));
        }

        let request = self.build_request(Method::GET, &format!("/devices/{device_token}"), None)?;
        let body = self.execute(request).await?;
        decode("device info response", body)
    }

    /// Fetch device info, delivering the outcome to `callback`
    pub fn device_info_with_callback<F>(
        &self,
        device_token: impl Into<String>,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<DeviceInfo>) + Send + 'static,
    {
        let client = self.clone();
        let device_token = device_token.into();
        tokio::spawn(async move { callback(client.device_info(&device_token).await) })
    }

    /// Check the connectivity status of one or more devices
    ///
    /// A single token promotes to a one-element list. Resolves with one
    /// presence entry per token.
    pub async fn device_presence(
        &self,
        device_tokens: impl Into<Recipient>,
    ) -> Result<Vec<DevicePresence>> {
        let tokens = device_tokens
            .into()
            .into_list("device tokens", "an array of non-empty strings")?;

        let body = json!({ "tokens": tokens });
        let request = self.build_request(Method::POST, "/devices/presence", Some(body))?;
        let body = self.execute(request).await?;
        decode("device presence response", extract_field(body, "presence"))
    }

    /// Check device presence, delivering the outcome to `callback`
    pub fn device_presence_with_callback<F>(
        &self,
        device_tokens: impl Into<Recipient>,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<Vec<DevicePresence>>) + Send + 'static,
    {
        let client = self.clone();
        let device_tokens = device_tokens.into();
        tokio::spawn(async move { callback(client.device_presence(device_tokens).await) })
    }
}
