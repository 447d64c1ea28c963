use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::errors::Result;

/// Canonical description of a single API request
///
/// Built by the client before dispatch; a transport backend must issue it
/// verbatim. The `url` already carries the `api_key` query parameter.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub url: Url,
    pub method: Method,
    /// JSON body, present for POST requests only
    pub body: Option<Value>,
}

/// Transport-level settings merged into every outgoing request
///
/// Only transport concerns are representable here. The computed
/// `url`/`method`/`body` of a request have no corresponding fields, so
/// callers cannot override them through this struct.
#[derive(Debug, Clone, Default)]
pub struct TransportOptions {
    /// Per-request timeout; the backend's own default applies when unset
    pub timeout: Option<Duration>,
    /// Extra headers added to every request
    pub headers: Option<HeaderMap>,
}

/// Raw response handed back by a transport backend
///
/// `body` is `None` when the response carried no body or one that was not
/// valid JSON; outcome normalization reports both as an empty body.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Option<Value>,
}

/// Unified transport interface for issuing API requests
///
/// One implementation per HTTP backend; the client consumes backends only
/// through this trait, so swapping HTTP libraries is an injection concern
/// rather than duplicated client code. An implementation must perform
/// exactly one HTTP call per `execute` invocation, with no retries.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue the described request and return the raw status and JSON body
    async fn execute(
        &self,
        request: &RequestDescriptor,
        options: &TransportOptions,
    ) -> Result<TransportResponse>;
}
