//! Push notification APIs: send, status, delete

use reqwest::Method;
use serde_json::Value;
use tokio::task::JoinHandle;

use crate::client::Pushy;
use crate::errors::{Error, Result};
use crate::models::{NotificationStatus, Recipient, SendOptions, SendResult};
use crate::request::{decode, extract_field};

impl Pushy {
    /// Send a push notification to one or more devices or topics
    ///
    /// `data` is the payload delivered to the app and must be a JSON
    /// object. The recipient may be a single device token or topic, or a
    /// list of them. Resolves with the server's [`SendResult`], carrying
    /// the assigned push ID.
    pub async fn send_notification(
        &self,
        data: Value,
        to: impl Into<Recipient>,
        options: SendOptions,
    ) -> Result<SendResult> {
        let to = to.into();

        if data.is_null() {
            return Err(Error::missing_argument("data"));
        }
        if !data.is_object() {
            return Err(Error::invalid_argument("data", "a JSON object"));
        }
        to.validate("recipient", "a device token or topic, or a list of them")?;

        // The payload and recipient always win over colliding option keys.
        let mut body = options.into_body();
        body.insert("data".to_string(), data);
        body.insert("to".to_string(), to.into_value());

        let request = self.build_request(Method::POST, "/push", Some(Value::Object(body)))?;
        let body = self.execute(request).await?;
        decode("send notification response", body)
    }

    /// Send a push notification, delivering the outcome to `callback`
    pub fn send_notification_with_callback<F>(
        &self,
        data: Value,
        to: impl Into<Recipient>,
        options: SendOptions,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<SendResult>) + Send + 'static,
    {
        let client = self.clone();
        let to = to.into();
        tokio::spawn(async move { callback(client.send_notification(data, to, options).await) })
    }

    /// Check the delivery status of a notification by its push ID
    pub async fn notification_status(&self, push_id: &str) -> Result<NotificationStatus> {
        if push_id.is_empty() {
            return Err(Error::missing_argument("push id"));
        }

        let request = self.build_request(Method::GET, &format!("/pushes/{push_id}"), None)?;
        let body = self.execute(request).await?;
        decode("notification status response", extract_field(body, "push"))
    }

    /// Check a notification's status, delivering the outcome to `callback`
    pub fn notification_status_with_callback<F>(
        &self,
        push_id: impl Into<String>,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<NotificationStatus>) + Send + 'static,
    {
        let client = self.clone();
        let push_id = push_id.into();
        tokio::spawn(async move { callback(client.notification_status(&push_id).await) })
    }

    /// Permanently delete a pending notification by its push ID
    pub async fn delete_notification(&self, push_id: &str) -> Result<()> {
        if push_id.is_empty() {
            return Err(Error::missing_argument("push id"));
        }

        let request = self.build_request(Method::DELETE, &format!("/pushes/{push_id}"), None)?;
        self.execute(request).await?;
        Ok(())
    }

    /// Delete a pending notification, delivering the outcome to `callback`
    pub fn delete_notification_with_callback<F>(
        &self,
        push_id: impl Into<String>,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<()>) + Send + 'static,
    {
        let client = self.clone();
        let push_id = push_id.into();
        tokio::spawn(async move { callback(client.delete_notification(&push_id).await) })
    }
}
