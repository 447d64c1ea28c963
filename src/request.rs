//! Request construction and outcome normalization
//!
//! Every API operation funnels through the same two steps here: build a
//! canonical [`RequestDescriptor`] for `<endpoint>/<path>?api_key=<key>`,
//! then dispatch it once and normalize the transport's outcome. Failure
//! precedence is fixed: a transport error wins, then an empty body, then
//! a server-reported `error` field, then a non-200 status code. Only then
//! is the response considered a success.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::client::Pushy;
use crate::errors::{Error, Result};
use crate::transport::RequestDescriptor;

impl Pushy {
    /// Build the canonical descriptor for an API request
    ///
    /// The path is appended to the configured endpoint as-is, so an
    /// enterprise endpoint may carry a path prefix. The Secret API Key is
    /// always attached as the `api_key` query parameter.
    pub(crate) fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<RequestDescriptor> {
        let endpoint = self.api_endpoint();
        let raw = format!("{endpoint}{path}");

        let mut url = Url::parse(&raw).map_err(|source| Error::InvalidEndpoint {
            url: raw.clone(),
            source,
        })?;
        url.query_pairs_mut().append_pair("api_key", self.api_key());

        debug!(%method, path, "built API request");

        Ok(RequestDescriptor { url, method, body })
    }

    /// Dispatch a request and normalize the outcome to the response body
    pub(crate) async fn execute(&self, request: RequestDescriptor) -> Result<Value> {
        debug!(method = %request.method, url = %request.url, "dispatching API request");

        let response = self
            .transport()
            .execute(&request, self.transport_options())
            .await?;

        let Some(body) = response.body else {
            return Err(Error::EmptyResponseBody);
        };
        if body.is_null() {
            return Err(Error::EmptyResponseBody);
        }

        // The server reports failures through an `error` field, on any
        // status code; it takes precedence over the status check.
        if let Some(error) = body.get("error") {
            if !error.is_null() {
                let message = match error.as_str() {
                    Some(text) => text.to_string(),
                    None => error.to_string(),
                };
                warn!(error = %message, "API reported an error");
                return Err(Error::remote(message));
            }
        }

        if response.status != 200 {
            warn!(status = response.status, "unexpected response status");
            return Err(Error::UnexpectedStatusCode {
                status: response.status,
            });
        }

        Ok(body)
    }
}

/// Take a named payload field out of a response body
///
/// A missing field decodes as `null`, surfacing as a decode error with the
/// operation's context rather than a panic.
pub(crate) fn extract_field(mut body: Value, field: &str) -> Value {
    body.get_mut(field).map(Value::take).unwrap_or(Value::Null)
}

/// Deserialize an extracted payload into its typed model
pub(crate) fn decode<T: DeserializeOwned>(context: &'static str, payload: Value) -> Result<T> {
    serde_json::from_value(payload).map_err(|source| Error::response_decode(context, source))
}
