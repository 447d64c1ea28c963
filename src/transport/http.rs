use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::traits::{RequestDescriptor, Transport, TransportOptions, TransportResponse};
use crate::errors::Result;

/// Production transport backend over `reqwest`
///
/// Connection pooling, TLS, and redirects are delegated entirely to the
/// underlying client. Timeouts beyond reqwest's own defaults are applied
/// per request from [`TransportOptions`].
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the default connection settings
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .tcp_keepalive(Duration::from_secs(60))
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self { client })
    }

    /// Wrap a caller-built client (custom proxy, TLS, or pool settings)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        request: &RequestDescriptor,
        options: &TransportOptions,
    ) -> Result<TransportResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone());

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(headers) = &options.headers {
            builder = builder.headers(headers.clone());
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();

        // Zero-length and non-JSON bodies both surface as an absent body.
        let body = response.json::<Value>().await.ok();

        Ok(TransportResponse { status, body })
    }
}
