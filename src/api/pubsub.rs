//! Pub/Sub APIs: topics, subscribers, subscribe, unsubscribe

use reqwest::Method;
use serde_json::json;
use tokio::task::JoinHandle;

use crate::client::Pushy;
use crate::errors::{Error, Result};
use crate::models::{Recipient, TopicStatus};
use crate::request::{decode, extract_field};

impl Pushy {
    /// Retrieve the app's topics and their subscriber counts
    pub async fn topics(&self) -> Result<Vec<TopicStatus>> {
        let request = self.build_request(Method::GET, "/topics/", None)?;
        let body = self.execute(request).await?;
        decode("topics response", extract_field(body, "topics"))
    }

    /// Retrieve topics, delivering the outcome to `callback`
    pub fn topics_with_callback<F>(&self, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Vec<TopicStatus>>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move { callback(client.topics().await) })
    }

    /// Retrieve the device tokens subscribed to a topic
    pub async fn subscribers(&self, topic: &str) -> Result<Vec<String>> {
        if topic.is_empty() {
            return Err(Error::missing_argument("topic"));
        }

        let request = self.build_request(Method::GET, &format!("/topics/{topic}"), None)?;
        let body = self.execute(request).await?;
        decode("topic subscribers response", extract_field(body, "subscribers"))
    }

    /// Retrieve a topic's subscribers, delivering the outcome to `callback`
    pub fn subscribers_with_callback<F>(
        &self,
        topic: impl Into<String>,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<Vec<String>>) + Send + 'static,
    {
        let client = self.clone();
        let topic = topic.into();
        tokio::spawn(async move { callback(client.subscribers(&topic).await) })
    }

    /// Subscribe a device to one or more topics
    pub async fn subscribe(
        &self,
        topics: impl Into<Recipient>,
        device_token: &str,
    ) -> Result<()> {
        if device_token.is_empty() {
            return Err(Error::missing_argument("device token"));
        }
        let topics = topics
            .into()
            .into_list("topics", "a topic or an array of non-empty topics")?;

        let body = json!({ "token": device_token, "topics": topics });
        let request = self.build_request(Method::POST, "/topics/subscribe/", Some(body))?;
        self.execute(request).await?;
        Ok(())
    }

    /// Subscribe a device to topics, delivering the outcome to `callback`
    pub fn subscribe_with_callback<F>(
        &self,
        topics: impl Into<Recipient>,
        device_token: impl Into<String>,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<()>) + Send + 'static,
    {
        let client = self.clone();
        let topics = topics.into();
        let device_token = device_token.into();
        tokio::spawn(async move { callback(client.subscribe(topics, &device_token).await) })
    }

    /// Unsubscribe a device from one or more topics
    pub async fn unsubscribe(
        &self,
        topics: impl Into<Recipient>,
        device_token: &str,
    ) -> Result<()> {
        if device_token.is_empty() {
            return Err(Error::missing_argument("device token"));
        }
        let topics = topics
            .into()
            .into_list("topics", "a topic or an array of non-empty topics")?;

        let body = json!({ "token": device_token, "topics": topics });
        let request = self.build_request(Method::POST, "/topics/unsubscribe/", Some(body))?;
        self.execute(request).await?;
        Ok(())
    }

    /// Unsubscribe a device from topics, delivering the outcome to `callback`
    pub fn unsubscribe_with_callback<F>(
        &self,
        topics: impl Into<Recipient>,
        device_token: impl Into<String>,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<()>) + Send + 'static,
    {
        let client = self.clone();
        let topics = topics.into();
        let device_token = device_token.into();
        tokio::spawn(async move { callback(client.unsubscribe(topics, &device_token).await) })
    }
}
